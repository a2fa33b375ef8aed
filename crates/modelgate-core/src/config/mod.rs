//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use modelgate_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Listening on {}", cfg.server.bind_addr());
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{apply_env_overrides, get_config_path, load_config, load_config_with, save_config};
pub use schema::{Config, ProviderConfig, ProvidersConfig, ServerConfig};
