//! Provider adapter trait — the seam between the dispatcher and each vendor.
//!
//! Every provider (OpenAI, Anthropic, Google, …) implements [`ProviderAdapter`].
//! Adapters return a tagged result so callers can tell "the model said X"
//! apart from "the call failed" without inspecting strings.

use async_trait::async_trait;
use thiserror::Error;

use modelgate_core::types::GenerationRequest;

use crate::registry::ModelConfig;

/// Normalized output of a successful provider call.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    pub text: String,
    /// Tokens reported by the provider, 0 when unavailable.
    pub tokens_used: u32,
    /// Adapter-supplied heuristic in `[0, 1]`.
    pub confidence: f64,
}

/// Why a provider call failed.
///
/// Every variant carries the provider's display name so the rendered
/// message reads like `"OpenAI API Error: …"`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (DNS, connect, timeout, TLS).
    #[error("{provider} API Error: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("{provider} API Error: {status} - {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body could not be interpreted.
    #[error("{provider} API Error: {message}")]
    Decode {
        provider: &'static str,
        message: String,
    },

    /// A streaming body broke off before completing.
    #[error("{provider} API Error: stream interrupted: {message}")]
    Stream {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Provider that produced this error.
    pub fn provider(&self) -> &'static str {
        match self {
            ProviderError::Http { provider, .. }
            | ProviderError::Status { provider, .. }
            | ProviderError::Decode { provider, .. }
            | ProviderError::Stream { provider, .. } => provider,
        }
    }
}

/// Trait that all provider adapters implement.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Run one generation call against the provider.
    ///
    /// # Arguments
    /// * `request` — Caller's request (prompt, sampling parameters, stream flag).
    /// * `model`   — Registry entry the request resolved to.
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &ModelConfig,
    ) -> Result<Completion, ProviderError>;

    /// Provider name this adapter serves; matches `ModelConfig::provider`.
    fn provider_name(&self) -> &str;
}
