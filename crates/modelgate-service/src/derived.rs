//! Derived operations — templated prompts layered over the dispatcher.
//!
//! Each operation builds its prompt, calls
//! [`AiService::process_request`] and reshapes the envelope. Failures arrive
//! as the usual zero-confidence envelope and are reshaped the same way.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use modelgate_core::types::{GenerationRequest, GenerationResponse};

use crate::dispatcher::AiService;

pub const ANALYSIS_MAX_TOKENS: u32 = 1000;
pub const ANALYSIS_TEMPERATURE: f64 = 0.3;
pub const INSIGHTS_MAX_TOKENS: u32 = 1500;
pub const INSIGHTS_TEMPERATURE: f64 = 0.4;

/// Acknowledgement text returned with every research result.
pub const RESEARCH_STARTED: &str = "Research started successfully";

// ─────────────────────────────────────────────
// Result shapes
// ─────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TextAnalysis {
    pub analysis: String,
    pub model_used: String,
    pub confidence: f64,
    pub processing_time: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    pub insights: String,
    pub model_used: String,
    pub confidence: f64,
    pub processing_time: f64,
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResearchOutcome {
    pub message: String,
    pub result: GenerationResponse,
}

// ─────────────────────────────────────────────
// Prompt templates
// ─────────────────────────────────────────────

pub fn analysis_prompt(text: &str) -> String {
    format!("Analyze the following text and provide insights, key topics, and sentiment:\n\n{text}")
}

/// Embeds `data` as pretty-printed JSON followed by the four numbered asks.
pub fn insights_prompt(data: &Value) -> String {
    let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    format!(
        "Analyze the following data and generate actionable insights:\n\
         Data: {rendered}\n\
         Please provide:\n\
         1. Key patterns and trends\n\
         2. Actionable recommendations\n\
         3. Potential risks or opportunities\n\
         4. Confidence level for each insight\n"
    )
}

// ─────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────

impl AiService {
    /// Summarize `text`: insights, key topics and sentiment.
    pub async fn analyze_text(&self, text: &str, model_id: &str) -> TextAnalysis {
        info!(model = model_id, chars = text.chars().count(), "Analyzing text");

        let request = GenerationRequest::new(model_id, analysis_prompt(text))
            .with_max_tokens(ANALYSIS_MAX_TOKENS)
            .with_temperature(ANALYSIS_TEMPERATURE);
        let response = self.process_request(&request).await;

        TextAnalysis {
            analysis: response.response,
            model_used: response.model_id,
            confidence: response.confidence,
            processing_time: response.processing_time,
        }
    }

    /// Ask for patterns, recommendations, risks and per-insight confidence over `data`.
    pub async fn generate_insights(&self, data: &Value, model_id: &str) -> Insights {
        info!(model = model_id, "Generating insights");

        let request = GenerationRequest::new(model_id, insights_prompt(data))
            .with_max_tokens(INSIGHTS_MAX_TOKENS)
            .with_temperature(INSIGHTS_TEMPERATURE);
        let response = self.process_request(&request).await;

        Insights {
            insights: response.response,
            model_used: response.model_id,
            confidence: response.confidence,
            processing_time: response.processing_time,
            metadata: response.metadata,
        }
    }

    /// Forward `query` verbatim with default sampling parameters.
    pub async fn research(&self, query: &str, model_id: &str) -> ResearchOutcome {
        info!(model = model_id, query, "Starting research");

        let result = self
            .process_request(&GenerationRequest::new(model_id, query))
            .await;

        ResearchOutcome {
            message: RESEARCH_STARTED.to_string(),
            result,
        }
    }
}
