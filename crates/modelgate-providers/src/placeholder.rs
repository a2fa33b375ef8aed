//! Placeholder adapters for providers without a real integration yet.
//!
//! They simulate upstream latency, then echo a truncated prompt back.
//! No network call is made and the configured API key is unused.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use modelgate_core::types::GenerationRequest;
use modelgate_core::utils::truncate_chars;

use crate::registry::{ModelConfig, ANTHROPIC, GOOGLE};
use crate::traits::{Completion, ProviderAdapter, ProviderError};

/// Characters of the prompt echoed back in the synthetic reply.
const ECHO_CHARS: usize = 100;

/// A stand-in adapter that returns a synthetic reply after a fixed delay.
#[derive(Clone, Debug)]
pub struct PlaceholderAdapter {
    provider: &'static str,
    /// Product name used in the reply text (e.g. `"Claude"`).
    label: &'static str,
    latency: Duration,
    confidence: f64,
}

impl PlaceholderAdapter {
    /// Anthropic stand-in: 500 ms, confidence 0.92.
    pub fn anthropic() -> Self {
        PlaceholderAdapter {
            provider: ANTHROPIC,
            label: "Claude",
            latency: Duration::from_millis(500),
            confidence: 0.92,
        }
    }

    /// Google stand-in: 300 ms, confidence 0.90.
    pub fn google() -> Self {
        PlaceholderAdapter {
            provider: GOOGLE,
            label: "Gemini",
            latency: Duration::from_millis(300),
            confidence: 0.90,
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn reply_text(&self, prompt: &str) -> String {
        format!(
            "{label} response to: {echo}... ({label} API integration needed)",
            label = self.label,
            echo = truncate_chars(prompt, ECHO_CHARS),
        )
    }
}

#[async_trait]
impl ProviderAdapter for PlaceholderAdapter {
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &ModelConfig,
    ) -> Result<Completion, ProviderError> {
        debug!(
            provider = self.provider,
            model = model.id,
            latency_ms = self.latency.as_millis() as u64,
            "Simulating provider call"
        );

        tokio::time::sleep(self.latency).await;

        let tokens_used = u32::try_from(request.prompt_word_count() * 2).unwrap_or(u32::MAX);

        Ok(Completion {
            text: self.reply_text(&request.prompt),
            tokens_used,
            confidence: self.confidence,
        })
    }

    fn provider_name(&self) -> &str {
        self.provider
    }
}
