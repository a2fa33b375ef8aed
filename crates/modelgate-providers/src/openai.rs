//! OpenAI adapter — the one provider the gateway actually calls over HTTP.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint, in both
//! streaming and non-streaming mode. Streaming replies are collected in full
//! before returning.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, error};

use modelgate_core::config::ProviderConfig;
use modelgate_core::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, GenerationRequest,
};

use crate::registry::{ModelConfig, OPENAI};
use crate::sse;
use crate::traits::{Completion, ProviderAdapter, ProviderError};

/// System message prepended to every OpenAI conversation.
pub const SYSTEM_PREAMBLE: &str = "You are an advanced AI research assistant.";

/// Default API base when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const CONFIDENCE: f64 = 0.95;

// ─────────────────────────────────────────────
// OpenAiAdapter
// ─────────────────────────────────────────────

/// Adapter for OpenAI-compatible chat completion APIs.
pub struct OpenAiAdapter {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API base URL (e.g. `"https://api.openai.com/v1"`).
    api_base: String,
    /// API key for Bearer authentication.
    api_key: String,
}

impl std::fmt::Debug for OpenAiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAdapter")
            .field("api_base", &self.api_base)
            .field("configured", &!self.api_key.is_empty())
            .finish()
    }
}

impl OpenAiAdapter {
    /// Create an adapter from the user's provider config.
    ///
    /// The API key is used verbatim; an empty key only fails once OpenAI rejects it.
    pub fn new(config: &ProviderConfig) -> anyhow::Result<Self> {
        let api_base = config
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("failed to build HTTP client")?;

        Ok(OpenAiAdapter {
            client,
            api_base,
            api_key: config.api_key.clone(),
        })
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/chat/completions", base)
    }

    fn build_body(request: &GenerationRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model_id.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PREAMBLE),
                ChatMessage::user(request.prompt.clone()),
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: request.stream,
        }
    }

    async fn read_completion(response: reqwest::Response) -> Result<Completion, ProviderError> {
        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| ProviderError::Decode {
                provider: OPENAI,
                message: format!("failed to parse response: {e}"),
            })?;

        let tokens_used = parsed.usage.as_ref().map_or(0, |u| u.total_tokens);
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode {
                provider: OPENAI,
                message: "no choices in response".to_string(),
            })?;

        Ok(Completion {
            text: choice.message.content.unwrap_or_default(),
            tokens_used,
            confidence: CONFIDENCE,
        })
    }

    async fn read_stream(response: reqwest::Response) -> Result<Completion, ProviderError> {
        let text = sse::collect_content(response.bytes_stream())
            .await
            .map_err(|e| ProviderError::Stream {
                provider: OPENAI,
                message: e.to_string(),
            })?;

        // Usage is not reported mid-stream.
        Ok(Completion {
            text,
            tokens_used: 0,
            confidence: CONFIDENCE,
        })
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: &ModelConfig,
    ) -> Result<Completion, ProviderError> {
        debug!(
            provider = OPENAI,
            model = model.id,
            stream = request.stream,
            max_tokens = request.max_tokens,
            "Calling OpenAI"
        );

        let body = Self::build_body(request);
        let url = self.completions_url();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = OPENAI, error = %e, "HTTP request failed");
                ProviderError::Http {
                    provider: OPENAI,
                    source: e,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            error!(
                provider = OPENAI,
                status = %status,
                body = %error_text,
                "API error"
            );
            return Err(ProviderError::Status {
                provider: OPENAI,
                status,
                body: error_text,
            });
        }

        let completion = if request.stream {
            Self::read_stream(response).await
        } else {
            Self::read_completion(response).await
        };

        match &completion {
            Ok(c) => debug!(
                provider = OPENAI,
                chars = c.text.len(),
                tokens = c.tokens_used,
                "OpenAI response received"
            ),
            Err(e) => error!(provider = OPENAI, error = %e, "Failed to read OpenAI response"),
        }

        completion
    }

    fn provider_name(&self) -> &str {
        OPENAI
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
