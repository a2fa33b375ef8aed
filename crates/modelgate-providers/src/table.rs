//! Adapter table — maps a provider name to the adapter that serves it.
//!
//! The dispatcher resolves `ModelConfig::provider` through this table, so a
//! new provider only needs an adapter registered here.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use modelgate_core::config::ProvidersConfig;

use crate::openai::OpenAiAdapter;
use crate::placeholder::PlaceholderAdapter;
use crate::traits::ProviderAdapter;

/// Provider name → adapter.
#[derive(Clone, Default)]
pub struct AdapterTable {
    adapters: HashMap<String, Arc<dyn ProviderAdapter>>,
}

impl std::fmt::Debug for AdapterTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterTable")
            .field("providers", &self.provider_names())
            .finish()
    }
}

impl AdapterTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard three-entry table: OpenAI plus the Anthropic and Google placeholders.
    pub fn from_config(providers: &ProvidersConfig) -> anyhow::Result<Self> {
        let mut table = Self::new();
        table.register(Arc::new(OpenAiAdapter::new(&providers.openai)?));
        table.register(Arc::new(PlaceholderAdapter::anthropic()));
        table.register(Arc::new(PlaceholderAdapter::google()));

        debug!(providers = ?table.provider_names(), "Adapter table built");
        Ok(table)
    }

    /// Register an adapter under its `provider_name()`, returning any adapter it replaced.
    pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) -> Option<Arc<dyn ProviderAdapter>> {
        let name = adapter.provider_name().to_string();
        self.adapters.insert(name, adapter)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.register(adapter);
        self
    }

    /// Adapter for `provider`, matched exactly.
    pub fn get(&self, provider: &str) -> Option<&Arc<dyn ProviderAdapter>> {
        self.adapters.get(provider)
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.adapters.contains_key(provider)
    }

    /// Registered provider names, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{self, ANTHROPIC, GOOGLE, OPENAI};

    #[test]
    fn test_from_config_has_three_providers() {
        let table = AdapterTable::from_config(&ProvidersConfig::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.provider_names(), vec![ANTHROPIC, GOOGLE, OPENAI]);
    }

    #[test]
    fn test_every_registered_model_has_an_adapter() {
        let table = AdapterTable::from_config(&ProvidersConfig::default()).unwrap();
        for model in registry::list_all() {
            assert!(
                table.contains(model.provider),
                "model {} references provider {} with no adapter",
                model.id,
                model.provider
            );
        }
    }

    #[test]
    fn test_get_is_exact() {
        let table = AdapterTable::from_config(&ProvidersConfig::default()).unwrap();
        assert!(table.get("OpenAI").is_some());
        assert!(table.get("openai").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut table = AdapterTable::new().with(Arc::new(PlaceholderAdapter::google()));
        assert!(!table.is_empty());

        let replaced = table.register(Arc::new(PlaceholderAdapter::google()));
        assert!(replaced.is_some());
        assert_eq!(table.len(), 1);
    }
}
