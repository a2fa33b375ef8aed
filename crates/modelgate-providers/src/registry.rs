//! Model registry — static configuration for every model the gateway serves.
//!
//! Each `ModelConfig` names the provider that serves it; the provider name is
//! the key into the adapter table. The table is read-only for the lifetime
//! of the process.

use std::collections::BTreeSet;

use serde::Serialize;

/// Provider name for OpenAI-hosted models.
pub const OPENAI: &str = "OpenAI";
/// Provider name for Anthropic-hosted models.
pub const ANTHROPIC: &str = "Anthropic";
/// Provider name for Google-hosted models.
pub const GOOGLE: &str = "Google";

// ─────────────────────────────────────────────
// ModelConfig — static metadata for one model
// ─────────────────────────────────────────────

/// Static configuration describing one model.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ModelConfig {
    /// Registry identifier (e.g. `"gpt-4-turbo"`), also sent upstream as the model name.
    pub id: &'static str,
    /// Human-readable name (e.g. `"GPT-4 Turbo"`).
    pub name: &'static str,
    /// Provider name; must have an adapter in the dispatch table.
    pub provider: &'static str,
    pub description: &'static str,
    /// Capability tags shown by discovery endpoints.
    pub capabilities: &'static [&'static str],
    pub performance: Performance,
    /// Upper bound on tokens the model accepts.
    pub max_tokens: u32,
    /// USD per 1000 tokens.
    pub cost_per_1k_tokens: f64,
    pub supports_streaming: bool,
    pub supports_function_calling: bool,
}

/// Relative performance scores (0–100) for a model.
///
/// Serializes as a `{"speed", "accuracy", "cost"}` map.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Performance {
    pub speed: u8,
    pub accuracy: u8,
    pub cost: u8,
}

// ─────────────────────────────────────────────
// All registered models
// ─────────────────────────────────────────────

/// Every model the gateway can route to, in discovery order.
pub static MODELS: &[ModelConfig] = &[
    ModelConfig {
        id: "gpt-4-turbo",
        name: "GPT-4 Turbo",
        provider: OPENAI,
        description: "Most advanced model for complex reasoning, analysis, and creative tasks",
        capabilities: &[
            "Advanced Reasoning",
            "Code Generation",
            "Complex Analysis",
            "Creative Writing",
        ],
        performance: Performance {
            speed: 85,
            accuracy: 98,
            cost: 90,
        },
        max_tokens: 4096,
        cost_per_1k_tokens: 0.03,
        supports_streaming: true,
        supports_function_calling: true,
    },
    ModelConfig {
        id: "gpt-3.5-turbo",
        name: "GPT-3.5 Turbo",
        provider: OPENAI,
        description: "Fast and efficient model for general-purpose tasks and quick responses",
        capabilities: &["Text Generation", "Summarization", "Q&A", "Basic Analysis"],
        performance: Performance {
            speed: 95,
            accuracy: 88,
            cost: 30,
        },
        max_tokens: 4096,
        cost_per_1k_tokens: 0.002,
        supports_streaming: true,
        supports_function_calling: true,
    },
    ModelConfig {
        id: "claude-3-opus",
        name: "Claude 3 Opus",
        provider: ANTHROPIC,
        description: "Excellent for research, analysis, and detailed explanations",
        capabilities: &[
            "Research Analysis",
            "Long-form Content",
            "Data Interpretation",
            "Academic Writing",
        ],
        performance: Performance {
            speed: 75,
            accuracy: 96,
            cost: 85,
        },
        max_tokens: 4096,
        cost_per_1k_tokens: 0.015,
        supports_streaming: true,
        supports_function_calling: false,
    },
    ModelConfig {
        id: "gemini-pro",
        name: "Gemini Pro",
        provider: GOOGLE,
        description: "Multimodal AI with strong performance in reasoning and code",
        capabilities: &[
            "Multimodal Processing",
            "Code Analysis",
            "Mathematical Reasoning",
            "Visual Understanding",
        ],
        performance: Performance {
            speed: 88,
            accuracy: 92,
            cost: 40,
        },
        max_tokens: 2048,
        cost_per_1k_tokens: 0.001,
        supports_streaming: true,
        supports_function_calling: false,
    },
];

// ─────────────────────────────────────────────
// Lookup functions
// ─────────────────────────────────────────────

/// Find a model by exact identifier.
pub fn lookup(model_id: &str) -> Option<&'static ModelConfig> {
    MODELS.iter().find(|m| m.id == model_id)
}

/// All registered models, in registry order.
pub fn list_all() -> &'static [ModelConfig] {
    MODELS
}

/// Distinct provider names referenced by the registry.
pub fn providers() -> BTreeSet<&'static str> {
    MODELS.iter().map(|m| m.provider).collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
