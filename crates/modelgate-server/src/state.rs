//! Shared application state type.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use modelgate_service::AiService;

/// Everything a handler needs: the service and when the server came up.
#[derive(Debug)]
pub struct AppContext {
    pub service: AiService,
    pub started_at: DateTime<Utc>,
}

/// Application state shared across all handlers.
pub type AppState = Arc<AppContext>;

impl AppContext {
    /// Wrap `service` into shareable state, stamping the start time now.
    pub fn new(service: AiService) -> AppState {
        Arc::new(AppContext {
            service,
            started_at: Utc::now(),
        })
    }
}
