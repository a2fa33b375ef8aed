//! Test doubles shared by the service tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use modelgate_core::types::GenerationRequest;
use modelgate_providers::registry::{ModelConfig, OPENAI};
use modelgate_providers::{AdapterTable, Completion, PlaceholderAdapter, ProviderAdapter, ProviderError};

use crate::dispatcher::AiService;

/// Scripted adapter that records every call it receives.
pub struct MockAdapter {
    provider: &'static str,
    reply: Mutex<Option<Result<Completion, ProviderError>>>,
    text: String,
    delay: Duration,
    calls: Mutex<Vec<(GenerationRequest, String)>>,
}

impl MockAdapter {
    /// Always answers `text` for the OpenAI provider.
    pub fn replying(text: &str) -> Self {
        MockAdapter {
            provider: OPENAI,
            reply: Mutex::new(None),
            text: text.to_string(),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails the first call with `error`.
    pub fn failing(error: ProviderError) -> Self {
        let mock = Self::replying("");
        *mock.reply.lock().unwrap() = Some(Err(error));
        mock
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The most recent `(request, model id)` pair seen.
    pub fn last_call(&self) -> Option<(GenerationRequest, String)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProviderAdapter for MockAdapter {
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &ModelConfig,
    ) -> Result<Completion, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), model.id.to_string()));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(scripted) = self.reply.lock().unwrap().take() {
            return scripted;
        }

        Ok(Completion {
            text: self.text.clone(),
            tokens_used: 7,
            confidence: 0.95,
        })
    }

    fn provider_name(&self) -> &str {
        self.provider
    }
}

/// A service whose OpenAI slot is `adapter`; the placeholders answer instantly.
pub fn service_with(adapter: Arc<dyn ProviderAdapter>) -> AiService {
    let table = AdapterTable::new()
        .with(adapter)
        .with(Arc::new(PlaceholderAdapter::anthropic().with_latency(Duration::ZERO)))
        .with(Arc::new(PlaceholderAdapter::google().with_latency(Duration::ZERO)));
    AiService::new(table)
}
