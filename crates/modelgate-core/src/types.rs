//! Core types for Modelgate.
//!
//! Two families live here:
//! - the caller-facing envelopes ([`GenerationRequest`], [`GenerationResponse`])
//!   that every route accepts and returns, and
//! - the OpenAI chat completions wire format used by the OpenAI adapter.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────
// Generation envelopes
// ─────────────────────────────────────────────

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f64 {
    0.7
}

// An explicit `null` means "use the default", same as an absent field.

fn nullable_max_tokens<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_max_tokens))
}

fn nullable_temperature<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_temperature))
}

fn nullable_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

/// A text-generation request as accepted from callers.
///
/// Missing or `null` optional fields take their defaults during deserialization.
/// `max_tokens` is forwarded as-is, never clamped to the model's ceiling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// Registry identifier of the model to route to (e.g. `"gpt-4-turbo"`).
    pub model_id: String,
    /// Prompt text sent as the user message.
    pub prompt: String,
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens", deserialize_with = "nullable_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature", deserialize_with = "nullable_temperature")]
    pub temperature: f64,
    /// Ask the provider to stream; the reply is still collected before returning.
    #[serde(default, deserialize_with = "nullable_flag")]
    pub stream: bool,
    /// Free-form caller context. Carried along, not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl GenerationRequest {
    /// Create a request with default sampling parameters.
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        GenerationRequest {
            model_id: model_id.into(),
            prompt: prompt.into(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            stream: false,
            context: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Number of whitespace-separated words in the prompt.
    pub fn prompt_word_count(&self) -> usize {
        self.prompt.split_whitespace().count()
    }
}

/// The uniform response envelope returned for every generation call.
///
/// Built fresh per call, including for failures: a failed call carries
/// `confidence == 0.0`, `tokens_used == 0` and an `"error"` metadata entry.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub model_id: String,
    /// Generated text, or a human-readable error message.
    pub response: String,
    /// Total tokens reported by the provider (0 when unknown).
    pub tokens_used: u32,
    /// Wall-clock seconds spent inside the dispatcher.
    pub processing_time: f64,
    /// Heuristic score in `[0, 1]`; not a calibrated probability.
    pub confidence: f64,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl GenerationResponse {
    /// The failure message, if this envelope reports one.
    pub fn error_message(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("error"))
            .and_then(Value::as_str)
    }
}

// ─────────────────────────────────────────────
// OpenAI chat completions wire format
// ─────────────────────────────────────────────

/// A chat message in the OpenAI format (only the roles Modelgate sends).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    System { content: String },
    User { content: String },
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }
}

/// Request body for an OpenAI-compatible chat completion API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub stream: bool,
}

/// Raw (non-streaming) chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<UsageInfo>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message within a chat completion choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UsageInfo {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// One server-sent event payload of a streaming chat completion.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
    /// Set when the upstream aborts the stream with an error event.
    #[serde(default)]
    pub error: Option<StreamErrorBody>,
}

/// Error object carried by a mid-stream `data: {"error": …}` event.
#[derive(Debug, Deserialize)]
pub struct StreamErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Content fragment carried by the first choice, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
    }

    /// Upstream error message, when this event reports a failure.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| match (e.message.is_empty(), &e.kind) {
            (false, _) => e.message.clone(),
            (true, Some(kind)) => kind.clone(),
            (true, None) => "upstream reported an error".to_string(),
        })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
