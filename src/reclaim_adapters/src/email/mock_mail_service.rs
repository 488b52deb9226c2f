use std::sync::Arc;

use reclaim_core::{DeliveryOutcome, Email, MailService, MailServiceError, TemplateModel};
use tokio::sync::RwLock;

/// A message handed to [`MockMailService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub recipient: Email,
    pub subject: String,
    pub template_name: String,
    pub model: TemplateModel,
}

/// Mail service that keeps messages in memory instead of delivering them.
#[derive(Debug, Clone)]
pub struct MockMailService {
    outcome: Arc<RwLock<DeliveryOutcome>>,
    sent: Arc<RwLock<Vec<SentMail>>>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::with_outcome(DeliveryOutcome::delivered())
    }

    pub fn with_outcome(outcome: DeliveryOutcome) -> Self {
        Self {
            outcome: Arc::new(RwLock::new(outcome)),
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Changes the outcome reported for subsequent sends.
    pub async fn set_outcome(&self, outcome: DeliveryOutcome) {
        *self.outcome.write().await = outcome;
    }

    pub async fn sent_mails(&self) -> Vec<SentMail> {
        self.sent.read().await.clone()
    }

    pub async fn last_mail(&self) -> Option<SentMail> {
        self.sent.read().await.last().cloned()
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MailService for MockMailService {
    async fn send(
        &self,
        recipient: &Email,
        subject: &str,
        template_name: &str,
        model: TemplateModel,
    ) -> Result<DeliveryOutcome, MailServiceError> {
        tracing::debug!(template = template_name, "Recording email instead of sending it");

        self.sent.write().await.push(SentMail {
            recipient: recipient.clone(),
            subject: subject.to_string(),
            template_name: template_name.to_string(),
            model,
        });

        Ok(self.outcome.read().await.clone())
    }
}
