//! Provider layer for Modelgate.
//!
//! # Architecture
//!
//! - [`registry`] — static configuration for every served model
//! - [`traits::ProviderAdapter`] — trait that all provider adapters implement
//! - [`openai::OpenAiAdapter`] — OpenAI-compatible HTTP client (streaming + non-streaming)
//! - [`placeholder::PlaceholderAdapter`] — simulated Anthropic and Google adapters
//! - [`table::AdapterTable`] — provider name → adapter dispatch table

pub mod openai;
pub mod placeholder;
pub mod registry;
pub mod sse;
pub mod table;
pub mod traits;

// Re-export main types for convenience
pub use openai::OpenAiAdapter;
pub use placeholder::PlaceholderAdapter;
pub use registry::{ModelConfig, Performance, MODELS};
pub use table::AdapterTable;
pub use traits::{Completion, ProviderAdapter, ProviderError};
