use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId},
    email::Email,
    password::Password,
    reset_token::ResetToken,
};

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Invalid password reset token")]
    InvalidToken,
    #[error("Password reset token expired")]
    TokenExpired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for IdentityProviderError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::InvalidToken, Self::InvalidToken)
                | (Self::TokenExpired, Self::TokenExpired)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Account lookup and reset-token handling owned by an identity provider.
///
/// Token construction and validation live entirely behind this trait; callers
/// treat [`ResetToken`] as opaque.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn find_account_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Account>, IdentityProviderError>;

    async fn generate_password_reset_token(
        &self,
        account: &Account,
    ) -> Result<ResetToken, IdentityProviderError>;

    async fn reset_password(
        &self,
        account_id: &AccountId,
        token: &ResetToken,
        new_password: Password,
    ) -> Result<(), IdentityProviderError>;
}
