pub mod error;
pub mod forgot_password;
pub mod reset_password;

pub use error::{ErrorResponse, RecoveryApiError};
pub use forgot_password::{ForgotPasswordRequest, forgot_password};
pub use reset_password::{ResetPasswordRequest, reset_password};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reclaim_application::ApplicationInfo;
use reclaim_core::OperationResult;
use tokio_util::sync::CancellationToken;

/// Shared state handed to the recovery routes.
#[derive(Clone)]
pub struct RecoveryState<I, M> {
    pub identity_provider: I,
    pub mail_service: M,
    pub application: ApplicationInfo,
    /// Cancelled when the service shuts down; each request runs on a child token.
    pub shutdown: CancellationToken,
}

impl<I, M> RecoveryState<I, M> {
    pub fn new(
        identity_provider: I,
        mail_service: M,
        application: ApplicationInfo,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            identity_provider,
            mail_service,
            application,
            shutdown,
        }
    }
}

fn operation_response(result: OperationResult) -> Response {
    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(result)).into_response()
}
