use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reclaim_application::{CompletePasswordResetError, RequestPasswordResetError};
use reclaim_core::{
    AccountIdError, EmailError, IdentityProviderError, MailServiceError, PasswordError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum RecoveryApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service is shutting down")]
    Cancelled,

    // The detail is logged, never returned to the caller
    #[error("Unexpected error")]
    UnexpectedError(String),
}

impl IntoResponse for RecoveryApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            RecoveryApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RecoveryApiError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            RecoveryApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "Password recovery failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for RecoveryApiError {
    fn from(error: EmailError) -> Self {
        RecoveryApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for RecoveryApiError {
    fn from(error: PasswordError) -> Self {
        RecoveryApiError::InvalidInput(error.to_string())
    }
}

impl From<AccountIdError> for RecoveryApiError {
    fn from(error: AccountIdError) -> Self {
        RecoveryApiError::InvalidInput(error.to_string())
    }
}

impl From<IdentityProviderError> for RecoveryApiError {
    fn from(error: IdentityProviderError) -> Self {
        RecoveryApiError::UnexpectedError(error.to_string())
    }
}

impl From<MailServiceError> for RecoveryApiError {
    fn from(error: MailServiceError) -> Self {
        RecoveryApiError::UnexpectedError(error.to_string())
    }
}

impl From<RequestPasswordResetError> for RecoveryApiError {
    fn from(error: RequestPasswordResetError) -> Self {
        match error {
            RequestPasswordResetError::Cancelled => RecoveryApiError::Cancelled,
            RequestPasswordResetError::IdentityProviderError(e) => e.into(),
            RequestPasswordResetError::MailServiceError(e) => e.into(),
        }
    }
}

impl From<CompletePasswordResetError> for RecoveryApiError {
    fn from(error: CompletePasswordResetError) -> Self {
        match error {
            CompletePasswordResetError::Cancelled => RecoveryApiError::Cancelled,
            CompletePasswordResetError::IdentityProviderError(e) => e.into(),
        }
    }
}
