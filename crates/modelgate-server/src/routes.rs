//! Route definitions and router construction.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Which origins may call the API from a browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CorsConfig {
    #[default]
    AllowAll,
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Allow-all for an empty list, otherwise exactly `origins`.
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(origins.to_vec())
        }
    }
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> =
                origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the full application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/status", get(handlers::status))
        .route("/ai-models/", get(handlers::list_models))
        .route("/ai-models/process", post(handlers::process))
        .route("/ai-models/analyze", post(handlers::analyze))
        .route("/ai-models/insights", post(handlers::insights))
        .route("/ai-search/", post(handlers::research))
        .with_state(state)
        .layer(build_cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_from_origins() {
        assert_eq!(CorsConfig::from_origins(&[]), CorsConfig::AllowAll);
        assert_eq!(
            CorsConfig::from_origins(&["http://localhost:5173".to_string()]),
            CorsConfig::AllowOrigins(vec!["http://localhost:5173".to_string()])
        );
    }
}
