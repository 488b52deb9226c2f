pub mod identity_provider;
pub mod services;
