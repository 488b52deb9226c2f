use reclaim_core::{
    IdentityProvider, IdentityProviderError, MailService, MailServiceError, OperationResult,
    PasswordResetRequest, ResetLink, TemplateModel, recovery_password,
};
use secrecy::ExposeSecret;
use tokio_util::sync::CancellationToken;

use crate::{ApplicationInfo, cancellation::until_cancelled};

pub const NO_USER_FOUND_MESSAGE: &str = "No user found by email, please contact the administrator";
pub const UNKNOWN_DELIVERY_ERROR: &str = "Unknown error";

/// Faults that abort a password reset request instead of producing an
/// [`OperationResult`].
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Password reset request was cancelled")]
    Cancelled,
    #[error("Identity provider error: {0}")]
    IdentityProviderError(#[from] IdentityProviderError),
    #[error("Mail service error: {0}")]
    MailServiceError(#[from] MailServiceError),
}

/// Request password reset use case - emails a reset link to the account owner
pub struct RequestPasswordResetUseCase<I, M>
where
    I: IdentityProvider,
    M: MailService,
{
    identity_provider: I,
    mail_service: M,
    application: ApplicationInfo,
}

impl<I, M> RequestPasswordResetUseCase<I, M>
where
    I: IdentityProvider,
    M: MailService,
{
    pub fn new(identity_provider: I, mail_service: M, application: ApplicationInfo) -> Self {
        Self {
            identity_provider,
            mail_service,
            application,
        }
    }

    /// Execute the request password reset use case
    ///
    /// # Arguments
    /// * `request` - Carries the email address the reset was requested for
    /// * `cancel` - Cooperative cancellation, checked at every await point
    ///
    /// # Returns
    /// `OperationResult::Success` once the mail service accepted the message,
    /// `OperationResult::Failure` for an unknown email or a rejected delivery.
    /// Cancellation and provider faults are returned as `Err`.
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: PasswordResetRequest,
        cancel: &CancellationToken,
    ) -> Result<OperationResult, RequestPasswordResetError> {
        let email = request.email();

        let account = until_cancelled(cancel, self.identity_provider.find_account_by_email(email))
            .await
            .ok_or(RequestPasswordResetError::Cancelled)??;

        let Some(account) = account else {
            return Ok(OperationResult::failure(NO_USER_FOUND_MESSAGE));
        };

        let token = until_cancelled(
            cancel,
            self.identity_provider.generate_password_reset_token(&account),
        )
        .await
        .ok_or(RequestPasswordResetError::Cancelled)??;

        let reset_link = ResetLink::new(
            &self.application.application_url,
            account.id(),
            &token.to_url_safe(),
        );

        let model = TemplateModel::new()
            .with(recovery_password::REQUEST_URL, reset_link.into_string())
            .with(recovery_password::APP_NAME, self.application.app_name.as_str())
            .with(recovery_password::COMPANY, self.application.company.as_str())
            .with(recovery_password::USER_NAME, account.username())
            .with(recovery_password::EMAIL, email.as_ref().expose_secret().as_str());

        let outcome = until_cancelled(
            cancel,
            self.mail_service.send(
                email,
                recovery_password::SUBJECT,
                recovery_password::TEMPLATE_NAME,
                model,
            ),
        )
        .await
        .ok_or(RequestPasswordResetError::Cancelled)??;

        tracing::info!(
            to = %email.as_ref().expose_secret(),
            successful = outcome.successful(),
            errors = %outcome.joined_errors(),
            "Password reset email sent"
        );

        if outcome.successful() {
            return Ok(OperationResult::success());
        }

        let first_error = outcome.first_error().unwrap_or(UNKNOWN_DELIVERY_ERROR);
        Ok(OperationResult::failure(format!(
            "{first_error}, please contact the administrator"
        )))
    }
}
