//! Core types, configuration, and utilities shared by every Modelgate crate.
//!
//! - [`types`] — generation request/response envelopes and the OpenAI wire format
//! - [`config`] — `~/.modelgate/config.json` schema, loading, and env overrides
//! - [`utils`] — paths and string helpers

pub mod config;
pub mod types;
pub mod utils;

pub use types::{GenerationRequest, GenerationResponse};
