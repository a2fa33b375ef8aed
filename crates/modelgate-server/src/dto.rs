//! Request bodies for the routes that do not take a [`GenerationRequest`]
//! directly.
//!
//! [`GenerationRequest`]: modelgate_core::GenerationRequest

use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_INSIGHTS_MODEL: &str = "gpt-4-turbo";

fn default_analysis_model() -> String {
    DEFAULT_ANALYSIS_MODEL.to_string()
}

fn default_insights_model() -> String {
    DEFAULT_INSIGHTS_MODEL.to_string()
}

/// Body of `POST /ai-models/analyze`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default = "default_analysis_model")]
    pub model_id: String,
}

/// Body of `POST /ai-models/insights`. `data` must be a JSON object.
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub data: Map<String, Value>,
    #[serde(default = "default_insights_model")]
    pub model_id: String,
}

/// Body of `POST /ai-search/`.
#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
    pub model_id: String,
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_default_model() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(req.model_id, "gpt-3.5-turbo");
    }

    #[test]
    fn test_insights_default_model() {
        let req: InsightsRequest = serde_json::from_str(r#"{"data": {"a": 1}}"#).unwrap();
        assert_eq!(req.model_id, "gpt-4-turbo");
        assert_eq!(req.data["a"], 1);
    }

    #[test]
    fn test_insights_rejects_non_object() {
        assert!(serde_json::from_str::<InsightsRequest>(r#"{"data": [1, 2]}"#).is_err());
    }

    #[test]
    fn test_research_requires_both_fields() {
        assert!(serde_json::from_str::<ResearchRequest>(r#"{"query": "x"}"#).is_err());
    }
}
