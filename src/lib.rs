//! # Reclaim - Password Recovery Service Library
//!
//! This is a facade crate that re-exports all public APIs from the recovery service components.
//! Use this crate to get access to all password recovery functionality in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Account`, `ResetToken`, `OperationResult`, etc.
//! - **Ports**: `IdentityProvider`, `MailService`
//! - **Use cases**: `RequestPasswordResetUseCase`, `CompletePasswordResetUseCase`
//! - **Adapters**: `InMemoryIdentityProvider`, `PostmarkMailService`, `MockMailService`
//! - **Service**: `RecoveryService` - The main entry point for the recovery service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use reclaim_core::*;
}

// Re-export most commonly used core types at the root level
pub use reclaim_core::{
    Account, AccountId, DeliveryOutcome, Email, EmailError, OperationResult, Password,
    PasswordError, PasswordResetRequest, ResetLink, ResetToken, TemplateModel, UrlSafeToken,
    recovery_password,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use reclaim_core::{IdentityProvider, IdentityProviderError, MailService, MailServiceError};
}

pub use ports::{IdentityProvider, IdentityProviderError, MailService, MailServiceError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use reclaim_application::*;
}

pub use reclaim_application::{
    ApplicationInfo, CompletePasswordResetError, CompletePasswordResetUseCase,
    RequestPasswordResetError, RequestPasswordResetUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use reclaim_adapters::http::*;
    }

    /// Identity provider implementations
    pub mod persistence {
        pub use reclaim_adapters::persistence::*;
    }

    /// Mail service implementations
    pub mod email {
        pub use reclaim_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use reclaim_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use reclaim_adapters::{
    email::{MockMailService, PostmarkMailService},
    persistence::InMemoryIdentityProvider,
};

// ============================================================================
// Recovery Service (Main Entry Point)
// ============================================================================

/// Main recovery service
pub use reclaim_service::RecoveryService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export the cancellation token accepted by the use cases
pub use tokio_util::sync::CancellationToken;
