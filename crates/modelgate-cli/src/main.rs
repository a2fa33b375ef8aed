//! Modelgate CLI — entry point.
//!
//! # Commands
//!
//! - `modelgate serve [--host H] [--port P] [--config PATH] [--logs] [--json-logs]` — run the HTTP gateway
//! - `modelgate models` — list the model registry
//! - `modelgate status` — show configuration and provider status
//! - `modelgate onboard` — write a default config file

mod gateway;
mod helpers;
mod models;
mod onboard;
mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Modelgate — one HTTP front door for several AI model providers
#[derive(Parser)]
#[command(name = "modelgate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Listen address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Config file (defaults to ~/.modelgate/config.json)
        #[arg(short, long)]
        config: Option<String>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,

        /// Emit logs as JSON lines
        #[arg(long, default_value_t = false)]
        json_logs: bool,
    },

    /// List every registered model
    Models,

    /// Show configuration and provider status
    Status {
        /// Config file (defaults to ~/.modelgate/config.json)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Write a default configuration file
    Onboard,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            config,
            logs,
            json_logs,
        } => {
            init_logging(logs, json_logs);
            gateway::run(gateway::ServeOptions { host, port, config }).await
        }
        Commands::Models => models::run(),
        Commands::Status { config } => status::run(config.as_deref()),
        Commands::Onboard => onboard::run(),
    }
}

/// Filter used by `--logs`; otherwise `RUST_LOG` or `info`.
const VERBOSE_FILTER: &str = "modelgate=debug,tower_http=debug,info";

/// Initialize tracing/logging.
fn init_logging(verbose: bool, json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
