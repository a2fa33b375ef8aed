//! Dispatcher — routes a generation request to its provider adapter.
//!
//! `process_request` always produces a [`GenerationResponse`]. Lookup misses,
//! missing adapters and upstream failures are all folded into a
//! zero-confidence envelope; nothing is raised past this boundary.

use std::time::Instant;

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use modelgate_core::config::Config;
use modelgate_core::types::{GenerationRequest, GenerationResponse};
use modelgate_providers::registry::{self, ModelConfig};
use modelgate_providers::{AdapterTable, Completion};

use crate::error::DispatchError;

/// Prefix of the response text for every failed request.
pub const ERROR_PREFIX: &str = "Error processing request: ";

// ─────────────────────────────────────────────
// AiService
// ─────────────────────────────────────────────

/// The gateway's service object.
///
/// Built once at startup and shared with the transport layer. It holds only
/// the read-only adapter table, so concurrent calls never interact.
#[derive(Debug, Clone)]
pub struct AiService {
    adapters: AdapterTable,
}

/// Discovery payload for `GET /ai-models/`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AvailableModels {
    pub models: &'static [ModelConfig],
    pub total_models: usize,
    pub providers: Vec<&'static str>,
}

impl AiService {
    /// Create a service over an explicit adapter table.
    pub fn new(adapters: AdapterTable) -> Self {
        AiService { adapters }
    }

    /// Create a service with the standard adapters for `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(AdapterTable::from_config(&config.providers)?))
    }

    pub fn adapters(&self) -> &AdapterTable {
        &self.adapters
    }

    /// Route `request` to its provider and wrap the outcome.
    pub async fn process_request(&self, request: &GenerationRequest) -> GenerationResponse {
        let start = Instant::now();
        let outcome = self.dispatch(request).await;
        let processing_time = start.elapsed().as_secs_f64();

        match outcome {
            Ok((model, completion)) => {
                info!(
                    model = %request.model_id,
                    provider = model.provider,
                    tokens = completion.tokens_used,
                    elapsed_ms = (processing_time * 1000.0) as u64,
                    "Request processed"
                );
                GenerationResponse {
                    model_id: request.model_id.clone(),
                    response: completion.text,
                    tokens_used: completion.tokens_used,
                    processing_time,
                    confidence: completion.confidence,
                    metadata: Some(success_metadata(model, request)),
                }
            }
            Err(e) => {
                warn!(
                    model = %request.model_id,
                    kind = e.kind(),
                    upstream = e.provider().unwrap_or("-"),
                    error = %e,
                    "Request failed"
                );
                failure_response(request, &e, processing_time)
            }
        }
    }

    async fn dispatch(
        &self,
        request: &GenerationRequest,
    ) -> Result<(&'static ModelConfig, Completion), DispatchError> {
        let model = registry::lookup(&request.model_id)
            .ok_or_else(|| DispatchError::ModelNotFound(request.model_id.clone()))?;

        let adapter = self
            .adapters
            .get(model.provider)
            .ok_or_else(|| DispatchError::UnsupportedProvider(model.provider.to_string()))?;

        debug!(model = model.id, provider = model.provider, "Dispatching");
        let completion = adapter.generate(request, model).await?;
        Ok((model, completion))
    }

    /// Every registered model plus the distinct providers behind them.
    pub fn get_available_models(&self) -> AvailableModels {
        let models = registry::list_all();
        AvailableModels {
            models,
            total_models: models.len(),
            providers: registry::providers().into_iter().collect(),
        }
    }
}

fn success_metadata(model: &ModelConfig, request: &GenerationRequest) -> Map<String, Value> {
    let mut metadata = Map::new();
    metadata.insert(
        "model_config".to_string(),
        serde_json::to_value(model).unwrap_or(Value::Null),
    );
    metadata.insert(
        "request_params".to_string(),
        json!({
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": request.stream,
        }),
    );
    metadata
}

fn failure_response(
    request: &GenerationRequest,
    error: &DispatchError,
    processing_time: f64,
) -> GenerationResponse {
    let message = error.to_string();

    let mut metadata = Map::new();
    metadata.insert("error".to_string(), Value::String(message.clone()));
    metadata.insert(
        "error_kind".to_string(),
        Value::String(error.kind().to_string()),
    );

    GenerationResponse {
        model_id: request.model_id.clone(),
        response: format!("{ERROR_PREFIX}{message}"),
        tokens_used: 0,
        processing_time,
        confidence: 0.0,
        metadata: Some(metadata),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
