pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, AccountIdError},
    delivery_outcome::DeliveryOutcome,
    email::{Email, EmailError},
    operation_result::OperationResult,
    password::{Password, PasswordError},
    password_reset_request::PasswordResetRequest,
    reset_link::ResetLink,
    reset_token::{ResetToken, TokenEncodingError, UrlSafeToken},
    template_model::{TemplateModel, recovery_password},
};

pub use ports::{
    identity_provider::{IdentityProvider, IdentityProviderError},
    services::{MailService, MailServiceError},
};
