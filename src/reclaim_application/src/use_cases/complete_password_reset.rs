use reclaim_core::{
    AccountId, IdentityProvider, IdentityProviderError, OperationResult, Password, UrlSafeToken,
};
use tokio_util::sync::CancellationToken;

use crate::cancellation::until_cancelled;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid password reset token";
pub const NO_USER_MESSAGE: &str = "No user found, please contact the administrator";

/// Error types for complete password reset use case
#[derive(Debug, thiserror::Error)]
pub enum CompletePasswordResetError {
    #[error("Password reset was cancelled")]
    Cancelled,
    #[error("Identity provider error: {0}")]
    IdentityProviderError(#[from] IdentityProviderError),
}

/// Complete password reset use case - redeems a reset link for a new password
pub struct CompletePasswordResetUseCase<I>
where
    I: IdentityProvider,
{
    identity_provider: I,
}

impl<I> CompletePasswordResetUseCase<I>
where
    I: IdentityProvider,
{
    pub fn new(identity_provider: I) -> Self {
        Self { identity_provider }
    }

    /// Execute the complete password reset use case
    ///
    /// # Arguments
    /// * `account_id` - The `userid` parameter of the reset link
    /// * `token` - The `token` parameter of the reset link, still encoded
    /// * `new_password` - The new password to set
    /// * `cancel` - Cooperative cancellation signal
    #[tracing::instrument(
        name = "CompletePasswordResetUseCase::execute",
        skip(self, token, new_password, cancel)
    )]
    pub async fn execute(
        &self,
        account_id: AccountId,
        token: UrlSafeToken,
        new_password: Password,
        cancel: &CancellationToken,
    ) -> Result<OperationResult, CompletePasswordResetError> {
        let Ok(token) = token.decode() else {
            return Ok(OperationResult::failure(INVALID_TOKEN_MESSAGE));
        };

        let reset = until_cancelled(
            cancel,
            self.identity_provider
                .reset_password(&account_id, &token, new_password),
        )
        .await
        .ok_or(CompletePasswordResetError::Cancelled)?;

        match reset {
            Ok(()) => {
                tracing::info!(%account_id, "Password reset completed");
                Ok(OperationResult::success())
            }
            Err(IdentityProviderError::AccountNotFound) => {
                Ok(OperationResult::failure(NO_USER_MESSAGE))
            }
            Err(IdentityProviderError::InvalidToken | IdentityProviderError::TokenExpired) => {
                Ok(OperationResult::failure(INVALID_TOKEN_MESSAGE))
            }
            Err(e) => Err(e.into()),
        }
    }
}
