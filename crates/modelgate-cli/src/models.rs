//! `modelgate models` — print the model registry.

use anyhow::Result;
use colored::Colorize;

use modelgate_core::config::{load_config, ProvidersConfig};
use modelgate_providers::registry::{self, ModelConfig};

use crate::helpers::yes_no;

/// Run the models command.
pub fn run() -> Result<()> {
    let models = registry::list_all();
    let providers = load_config(None).providers;

    println!();
    println!("{}", "⚡ Modelgate Models".cyan().bold());
    println!();
    println!("  {}", header().bold());
    for model in models {
        println!("  {}", row(model, &providers));
    }
    println!();
    println!(
        "  {} models from {} providers",
        models.len(),
        registry::providers().len()
    );
    println!();

    Ok(())
}

fn header() -> String {
    format!(
        "{:<16} {:<16} {:<10} {:>10} {:>8} {:>9} {:>4}",
        "ID", "NAME", "PROVIDER", "MAX TOK", "$/1K", "STREAMING", "KEY"
    )
}

/// One table line; KEY says whether the model's provider has an API key set.
fn row(model: &ModelConfig, providers: &ProvidersConfig) -> String {
    let has_key = providers
        .get_by_name(model.provider)
        .is_some_and(|p| p.is_configured());
    format!(
        "{:<16} {:<16} {:<10} {:>10} {:>8.4} {:>9} {:>4}",
        model.id,
        model.name,
        model.provider,
        model.max_tokens,
        model.cost_per_1k_tokens,
        yes_no(model.supports_streaming),
        yes_no(has_key)
    )
}
