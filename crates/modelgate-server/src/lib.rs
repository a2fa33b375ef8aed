//! Modelgate HTTP server.
//!
//! Exposes the service over axum:
//! - [`routes::create_router`] wires handlers, CORS and request tracing
//! - [`state::AppState`] carries the shared [`AiService`](modelgate_service::AiService)
//! - [`error::HttpError`] renders failures as `{"detail": ...}`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, CorsConfig};
pub use state::{AppContext, AppState};
