//! Dispatch failures.
//!
//! These never leave [`AiService::process_request`](crate::AiService::process_request);
//! they are rendered into the response envelope instead.

use modelgate_providers::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The requested model id is not in the registry.
    #[error("Unsupported model: {0}")]
    ModelNotFound(String),

    /// The registry names a provider with no registered adapter.
    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The adapter ran and the upstream call failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl DispatchError {
    /// Stable tag stored under `metadata.error_kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::ModelNotFound(_) => "model_not_found",
            DispatchError::UnsupportedProvider(_) => "unsupported_provider",
            DispatchError::Provider(_) => "provider",
        }
    }

    /// Upstream provider behind the failure, when an adapter call was made.
    pub fn provider(&self) -> Option<&'static str> {
        match self {
            DispatchError::Provider(e) => Some(e.provider()),
            _ => None,
        }
    }
}
