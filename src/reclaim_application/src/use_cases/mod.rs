pub mod complete_password_reset;
pub mod request_password_reset;

// Re-export for convenience
pub use complete_password_reset::{CompletePasswordResetError, CompletePasswordResetUseCase};
pub use request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase};
