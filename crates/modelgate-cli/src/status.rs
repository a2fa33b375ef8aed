//! `modelgate status` — show configuration and provider status.

use anyhow::Result;
use colored::Colorize;

use modelgate_core::config::{get_config_path, load_config};
use modelgate_core::utils::expand_home;

use crate::helpers::{exists_mark, key_status};

/// Run the status command.
pub fn run(config: Option<&str>) -> Result<()> {
    let config_path = config.map(expand_home).unwrap_or_else(get_config_path);
    let config = load_config(Some(&config_path));

    println!();
    println!("{}", "⚡ Modelgate Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        exists_mark(config_path.exists())
    );
    println!(
        "  {:<18} http://{}",
        "Server:".bold(),
        config.server.bind_addr()
    );
    let cors = if config.server.cors_origins.is_empty() {
        "all origins".to_string()
    } else {
        config.server.cors_origins.join(", ")
    };
    println!("  {:<18} {}", "CORS:".bold(), cors);

    println!();
    println!("  {}", "Providers:".bold());
    for (name, provider) in config.providers.entries() {
        println!("    {:<20} {}", name, key_status(provider.is_configured()));
        if let Some(base) = &provider.api_base {
            println!("    {:<20} {}", "", format!("base: {base}").dimmed());
        }
    }

    println!();

    Ok(())
}
