//! Config loader — reads `~/.modelgate/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.modelgate/config.json` (or an explicit path)
//! 3. Plain provider key variables: `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`,
//!    `GOOGLE_GEMINI_API_KEY`
//! 4. Environment variables `MODELGATE_<SECTION>__<FIELD>`

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::schema::{Config, ProviderConfig};

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from `path` (or the default path) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Like [`load_config`], resolving overrides through `lookup` instead of the
/// process environment.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    let config = load_config_from_path(&config_path);
    apply_env_overrides(config, lookup)
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&config_path, json)
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    debug!("Config saved to {}", config_path.display());
    Ok(config_path)
}

/// Apply environment overrides on top of a loaded config.
///
/// `lookup` resolves a variable name to its value; production passes
/// `std::env::var`, tests pass a map.
///
/// Supported overrides:
/// - `OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `GOOGLE_GEMINI_API_KEY`
/// - `MODELGATE_PROVIDERS__<NAME>__API_KEY` → `providers.<name>.api_key`
/// - `MODELGATE_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
/// - `MODELGATE_PROVIDERS__<NAME>__TIMEOUT_SECS` → `providers.<name>.timeout_secs`
/// - `MODELGATE_SERVER__HOST` → `server.host`
/// - `MODELGATE_SERVER__PORT` → `server.port`
/// - `MODELGATE_SERVER__CORS_ORIGINS` → `server.cors_origins` (comma-separated)
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    apply_provider_env(&mut config.providers.openai, "OPENAI", "OPENAI_API_KEY", &lookup);
    apply_provider_env(
        &mut config.providers.anthropic,
        "ANTHROPIC",
        "ANTHROPIC_API_KEY",
        &lookup,
    );
    apply_provider_env(
        &mut config.providers.google,
        "GOOGLE",
        "GOOGLE_GEMINI_API_KEY",
        &lookup,
    );

    if let Some(val) = lookup("MODELGATE_SERVER__HOST") {
        config.server.host = val;
    }
    if let Some(val) = lookup("MODELGATE_SERVER__PORT") {
        match val.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => warn!("Ignoring invalid MODELGATE_SERVER__PORT={}", val),
        }
    }
    if let Some(val) = lookup("MODELGATE_SERVER__CORS_ORIGINS") {
        config.server.cors_origins = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    config
}

/// Apply env var overrides for a single provider.
fn apply_provider_env<F>(provider: &mut ProviderConfig, name: &str, plain_key: &str, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(plain_key) {
        provider.api_key = val;
    }
    if let Some(val) = lookup(&format!("MODELGATE_PROVIDERS__{name}__API_KEY")) {
        provider.api_key = val;
    }
    if let Some(val) = lookup(&format!("MODELGATE_PROVIDERS__{name}__API_BASE")) {
        provider.api_base = Some(val);
    }
    if let Some(val) = lookup(&format!("MODELGATE_PROVIDERS__{name}__TIMEOUT_SECS")) {
        if let Ok(secs) = val.parse::<u64>() {
            provider.timeout_secs = Some(secs);
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.json"));
        assert_eq!(config.server.port, 8000);
        assert!(!config.providers.openai.is_configured());
    }

    #[test]
    fn test_load_valid_json() {
        let file = write_temp_json(
            r#"{
            "providers": { "openai": { "apiKey": "sk-file" } },
            "server": { "port": 9001 }
        }"#,
        );

        let config = load_config_from_path(file.path());
        assert_eq!(config.providers.openai.api_key, "sk-file");
        assert_eq!(config.server.port, 9001);
        // Default preserved
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_load_invalid_json_returns_defaults() {
        let file = write_temp_json("not valid json {{{");
        let config = load_config_from_path(file.path());
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_config_with_injected_env() {
        let file = write_temp_json(r#"{"server": {"port": 9001}}"#);

        let untouched = load_config_with(Some(file.path()), |_| None);
        assert_eq!(untouched.server.port, 9001);

        let overridden = load_config_with(
            Some(file.path()),
            env(&[("MODELGATE_SERVER__PORT", "9100"), ("OPENAI_API_KEY", "sk-env")]),
        );
        assert_eq!(overridden.server.port, 9100);
        assert_eq!(overridden.providers.openai.api_key, "sk-env");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.providers.openai.api_key = "sk-saved".to_string();
        config.server.port = 7000;

        let written = save_config(&config, Some(&path)).unwrap();
        assert_eq!(written, path);

        let reloaded = load_config_from_path(&path);
        assert_eq!(reloaded.providers.openai.api_key, "sk-saved");
        assert_eq!(reloaded.server.port, 7000);
    }

    #[test]
    fn test_plain_key_env_applies() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[
                ("OPENAI_API_KEY", "sk-plain"),
                ("GOOGLE_GEMINI_API_KEY", "gm-plain"),
            ]),
        );
        assert_eq!(config.providers.openai.api_key, "sk-plain");
        assert_eq!(config.providers.google.api_key, "gm-plain");
        assert!(!config.providers.anthropic.is_configured());
    }

    #[test]
    fn test_prefixed_env_wins_over_plain() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[
                ("OPENAI_API_KEY", "sk-plain"),
                ("MODELGATE_PROVIDERS__OPENAI__API_KEY", "sk-prefixed"),
                ("MODELGATE_PROVIDERS__OPENAI__API_BASE", "http://localhost:1234/v1"),
                ("MODELGATE_PROVIDERS__OPENAI__TIMEOUT_SECS", "45"),
            ]),
        );
        assert_eq!(config.providers.openai.api_key, "sk-prefixed");
        assert_eq!(
            config.providers.openai.api_base.as_deref(),
            Some("http://localhost:1234/v1")
        );
        assert_eq!(config.providers.openai.timeout_secs, Some(45));
    }

    #[test]
    fn test_env_overrides_file_value() {
        let mut config = Config::default();
        config.providers.anthropic.api_key = "from-file".into();

        let config = apply_env_overrides(config, env(&[("ANTHROPIC_API_KEY", "from-env")]));
        assert_eq!(config.providers.anthropic.api_key, "from-env");
    }

    #[test]
    fn test_env_override_server() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[
                ("MODELGATE_SERVER__HOST", "127.0.0.1"),
                ("MODELGATE_SERVER__PORT", "9999"),
                (
                    "MODELGATE_SERVER__CORS_ORIGINS",
                    "http://localhost:5173, http://localhost:3000,",
                ),
            ]),
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9999);
        assert_eq!(
            config.server.cors_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_env_invalid_port_ignored() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[("MODELGATE_SERVER__PORT", "not-a-port")]),
        );
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_saved_json_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.server.cors_origins = vec!["http://a".into()];
        save_config(&config, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(raw["server"].get("corsOrigins").is_some());
        assert!(raw["server"].get("cors_origins").is_none());
    }
}
