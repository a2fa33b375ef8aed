//! Route handlers.
//!
//! Each handler logs the model it routes to and runs the service call on its
//! own task, so a panic below the service surfaces as a 500 with
//! `{"detail": "<Operation> failed: <message>"}` instead of a dropped
//! connection. The task is aborted if the handler is dropped, so a client
//! disconnect also cancels the upstream call.

use std::future::Future;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

use modelgate_core::{GenerationRequest, GenerationResponse};
use modelgate_service::{AvailableModels, Insights, ResearchOutcome, TextAnalysis};

use crate::dto::{AnalyzeRequest, InsightsRequest, ResearchRequest};
use crate::error::HttpError;
use crate::state::AppState;

/// Body of `GET /status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub db_enabled: bool,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

/// Aborts the wrapped task when dropped before it finishes.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Run `task` on its own tokio task, mapping a panic to an internal error.
///
/// Dropping the returned future aborts the task.
async fn guarded<T, F>(operation: &'static str, task: F) -> Result<T, HttpError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let mut handle = AbortOnDrop(tokio::spawn(task));
    (&mut handle.0).await.map_err(|e| {
        let reason = join_failure(e);
        error!(operation, error = %reason, "Handler task failed");
        HttpError::Internal(format!("{operation} failed: {reason}"))
    })
}

fn join_failure(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "task panicked".to_string()),
        Err(err) => err.to_string(),
    }
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    info!("Health check called");
    Json(StatusResponse {
        status: "ok",
        db_enabled: false,
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
    })
}

pub async fn list_models(State(state): State<AppState>) -> Result<Json<AvailableModels>, HttpError> {
    info!("Fetching available AI models");
    let models = guarded("Model listing", async move { state.service.get_available_models() }).await?;
    Ok(Json(models))
}

pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>, HttpError> {
    let Json(request) = payload?;
    info!(model = %request.model_id, stream = request.stream, "Processing AI request");

    let response = guarded("Processing", async move {
        state.service.process_request(&request).await
    })
    .await?;
    if let Some(reason) = response.error_message() {
        warn!(model = %response.model_id, error = reason, "Request answered with error envelope");
    }
    Ok(Json(response))
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<TextAnalysis>, HttpError> {
    let Json(body) = payload?;
    info!(model = %body.model_id, "Analyzing text");

    let analysis = guarded("Analysis", async move {
        state.service.analyze_text(&body.text, &body.model_id).await
    })
    .await?;
    Ok(Json(analysis))
}

pub async fn insights(
    State(state): State<AppState>,
    payload: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<Insights>, HttpError> {
    let Json(body) = payload?;
    info!(model = %body.model_id, keys = body.data.len(), "Generating insights");

    let insights = guarded("Insight generation", async move {
        let data = Value::Object(body.data);
        state.service.generate_insights(&data, &body.model_id).await
    })
    .await?;
    Ok(Json(insights))
}

pub async fn research(
    State(state): State<AppState>,
    payload: Result<Json<ResearchRequest>, JsonRejection>,
) -> Result<Json<ResearchOutcome>, HttpError> {
    let Json(body) = payload?;
    info!(model = %body.model_id, query = %body.query, "Starting AI research");

    let outcome = guarded("AI search", async move {
        state.service.research(&body.query, &body.model_id).await
    })
    .await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_guarded_passes_value_through() {
        let value = guarded("Noop", async { 7 }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_guarded_maps_panic_to_internal() {
        let err = guarded::<(), _>("Analysis", async { panic!("adapter exploded"); })
            .await
            .unwrap_err();

        let message = err.to_string();
        assert_eq!(message, "Analysis failed: adapter exploded");
        assert!(matches!(err, HttpError::Internal(_)));
    }

    #[tokio::test]
    async fn test_guarded_aborts_task_when_dropped() {
        use std::time::Duration;
        use tokio::sync::oneshot;

        let (tx, rx) = oneshot::channel::<()>();
        let slow = async move {
            tokio::time::sleep(Duration::from_secs(30)).await;
            let _ = tx.send(());
        };

        let cut_short = tokio::time::timeout(Duration::from_millis(20), guarded("Processing", slow)).await;
        assert!(cut_short.is_err());

        // The aborted task drops its sender without sending.
        let closed = tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task was not aborted");
        assert!(closed.is_err());
    }
}
