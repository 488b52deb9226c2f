pub mod routes;

pub use routes::{
    ForgotPasswordRequest, RecoveryApiError, RecoveryState, ResetPasswordRequest,
    forgot_password, reset_password,
};
