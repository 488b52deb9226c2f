use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{delivery_outcome::DeliveryOutcome, email::Email, template_model::TemplateModel};

#[derive(Debug, Error)]
pub enum MailServiceError {
    #[error("Mail service unavailable: {0}")]
    Unavailable(String),
}

/// Port trait for templated email delivery
///
/// Rejected deliveries are reported through [`DeliveryOutcome`]; `Err` is
/// reserved for faults where no outcome could be produced at all.
#[async_trait]
pub trait MailService: Send + Sync {
    async fn send(
        &self,
        recipient: &Email,
        subject: &str,
        template_name: &str,
        model: TemplateModel,
    ) -> Result<DeliveryOutcome, MailServiceError>;
}
