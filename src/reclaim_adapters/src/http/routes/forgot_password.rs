use axum::{Json, extract::State, response::IntoResponse};
use reclaim_application::RequestPasswordResetUseCase;
use reclaim_core::{Email, IdentityProvider, MailService, PasswordResetRequest};
use secrecy::Secret;
use serde::Deserialize;

use super::{RecoveryState, error::RecoveryApiError, operation_response};

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: Secret<String>,
}

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password<I, M>(
    State(state): State<RecoveryState<I, M>>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, RecoveryApiError>
where
    I: IdentityProvider + Clone + 'static,
    M: MailService + Clone + 'static,
{
    let email = Email::try_from(request.email)?;

    let use_case = RequestPasswordResetUseCase::new(
        state.identity_provider,
        state.mail_service,
        state.application,
    );
    let cancel = state.shutdown.child_token();

    let result = use_case
        .execute(PasswordResetRequest::new(email), &cancel)
        .await?;

    Ok(operation_response(result))
}
