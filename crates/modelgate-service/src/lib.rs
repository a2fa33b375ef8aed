//! Modelgate service — the dispatcher and the operations built on it.
//!
//! This crate contains:
//! - **dispatcher**: [`AiService`], which routes a request to its provider adapter
//!   and always answers with a [`GenerationResponse`](modelgate_core::GenerationResponse)
//! - **derived**: text analysis, insight generation and research, as templated prompts
//! - **error**: the failure taxonomy folded into the response envelope

pub mod derived;
pub mod dispatcher;
pub mod error;

#[cfg(test)]
mod testing;

pub use derived::{Insights, ResearchOutcome, TextAnalysis};
pub use dispatcher::{AiService, AvailableModels};
pub use error::DispatchError;
