//! `modelgate serve` — builds the service and router, then serves HTTP.
//!
//! Startup sequence:
//! 1. Load config, apply command-line overrides
//! 2. Build the adapter table and `AiService`
//! 3. Build the router (CORS + request tracing)
//! 4. Bind and serve until Ctrl+C, then drain in-flight requests

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use modelgate_core::config::{load_config_with, Config, ServerConfig};
use modelgate_core::utils::expand_home;
use modelgate_server::{create_router, AppContext, CorsConfig};
use modelgate_service::AiService;

use crate::helpers;

/// Options collected from `modelgate serve`.
#[derive(Debug, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<String>,
}

impl ServeOptions {
    /// Command-line values win over the config file and environment.
    fn apply(&self, server: &mut ServerConfig) {
        if let Some(host) = &self.host {
            server.host = host.clone();
        }
        if let Some(port) = self.port {
            server.port = port;
        }
    }

    fn load_config(&self) -> Config {
        self.load_config_with(|key| std::env::var(key).ok())
    }

    /// File, then `lookup` overrides, then command-line flags.
    fn load_config_with<F>(&self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = self.config.as_deref().map(expand_home);
        let mut config = load_config_with(path.as_deref(), lookup);
        self.apply(&mut config.server);
        config
    }
}

/// Run the gateway until Ctrl+C.
pub async fn run(opts: ServeOptions) -> Result<()> {
    helpers::print_banner();
    println!("  Mode: Gateway");
    println!();

    let config = opts.load_config();

    let service = AiService::from_config(&config).context("failed to build AI service")?;
    let providers: Vec<String> = service
        .adapters()
        .provider_names()
        .into_iter()
        .map(String::from)
        .collect();
    let models = service.get_available_models().total_models;

    let cors = CorsConfig::from_origins(&config.server.cors_origins);
    let app = create_router(AppContext::new(service), &cors);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        addr = %addr,
        models,
        providers = ?providers,
        openai_key = config.providers.openai.is_configured(),
        "gateway starting"
    );

    println!("  Listening: http://{addr}");
    println!("  Models:    {models} registered");
    println!("  Providers: {}", providers.join(", "));
    println!(
        "  CORS:      {}",
        match &cors {
            CorsConfig::AllowAll => "all origins".to_string(),
            CorsConfig::AllowOrigins(origins) => origins.join(", "),
        }
    );
    if !config.providers.openai.is_configured() {
        println!();
        println!("  ⚠  No OpenAI API key configured. OpenAI models will answer");
        println!("     with an error envelope. Set OPENAI_API_KEY or edit");
        println!("     ~/.modelgate/config.json");
    }
    println!();
    println!("  Ctrl+C to stop");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("gateway stopped");
    println!("  Gateway stopped. Goodbye!");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    println!();
    println!("  Shutting down...");
    info!("received Ctrl+C, shutting down");
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
