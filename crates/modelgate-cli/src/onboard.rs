//! `modelgate onboard` — write a default configuration file.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use modelgate_core::config::{get_config_path, save_config, Config};

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "⚡ Modelgate — Setup".cyan().bold());
    println!();

    let config_path = get_config_path();
    if write_default_config(&config_path)? {
        println!("  {} created config at {}", "✓".green(), config_path.display());
    } else {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }

    println!();
    println!(
        "{}",
        "  Setup complete! Add your OpenAI key, then run `modelgate serve`.".green()
    );
    println!();

    Ok(())
}

/// Write `Config::default()` to `path` unless a file is already there.
///
/// Environment overrides are not applied, so secrets from the shell never
/// land on disk. Returns whether a file was written.
fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelgate_core::config::load_config_with;

    #[test]
    fn writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        assert!(write_default_config(&path).unwrap());
        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"corsOrigins\""));

        assert!(!write_default_config(&path).unwrap());
    }

    #[test]
    fn keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"server": {"port": 9999}}"#).unwrap();

        assert!(!write_default_config(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("9999"));
        let config = load_config_with(Some(&path), |_| None);
        assert_eq!(config.server.port, 9999);
    }
}
