//! Provider registry.

mod provider_registry;

pub use provider_registry::ProviderRegistry;
