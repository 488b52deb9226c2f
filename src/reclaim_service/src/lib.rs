pub mod recovery_service;
pub mod tracing;

pub use recovery_service::RecoveryService;
