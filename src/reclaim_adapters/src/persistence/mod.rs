pub mod in_memory_identity_provider;

pub use in_memory_identity_provider::InMemoryIdentityProvider;
