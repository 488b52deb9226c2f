use axum::{Json, extract::State, response::IntoResponse};
use reclaim_application::CompletePasswordResetUseCase;
use reclaim_core::{AccountId, IdentityProvider, Password, UrlSafeToken};
use secrecy::Secret;
use serde::Deserialize;

use super::{RecoveryState, error::RecoveryApiError, operation_response};

/// Body posted by the reset page, echoing the query of the emailed link.
#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub userid: String,
    pub token: String,
    pub new_password: Secret<String>,
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password<I, M>(
    State(state): State<RecoveryState<I, M>>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, RecoveryApiError>
where
    I: IdentityProvider + Clone + 'static,
    M: Clone + Send + Sync + 'static,
{
    let account_id: AccountId = request.userid.parse()?;
    let new_password = Password::try_from(request.new_password)?;
    let token = UrlSafeToken::from_encoded(request.token);

    let use_case = CompletePasswordResetUseCase::new(state.identity_provider);
    let cancel = state.shutdown.child_token();

    let result = use_case
        .execute(account_id, token, new_password, &cancel)
        .await?;

    Ok(operation_response(result))
}
