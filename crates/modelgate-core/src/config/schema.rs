//! Configuration schema.
//!
//! Hierarchy: `Config` → `ProvidersConfig`, `ServerConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.modelgate/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub server: ServerConfig,
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Credentials and endpoint for a single LLM provider.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for authentication. Not validated.
    #[serde(default)]
    pub api_key: String,
    /// Custom API base URL (overrides the provider default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Per-request timeout in seconds. `None` means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ProviderConfig {
    /// Whether this provider has a configured API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Configuration for every provider the gateway can route to.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub anthropic: ProviderConfig,
    #[serde(default)]
    pub google: ProviderConfig,
}

impl ProvidersConfig {
    /// Get a provider config by its registry name (`"OpenAI"`, `"Anthropic"`, `"Google"`).
    ///
    /// Matching is case-insensitive so lowercase config keys work too.
    pub fn get_by_name(&self, name: &str) -> Option<&ProviderConfig> {
        match name.to_ascii_lowercase().as_str() {
            "openai" => Some(&self.openai),
            "anthropic" => Some(&self.anthropic),
            "google" => Some(&self.google),
            _ => None,
        }
    }

    /// `(display name, config)` pairs in a stable order, for status output.
    pub fn entries(&self) -> [(&'static str, &ProviderConfig); 3] {
        [
            ("OpenAI", &self.openai),
            ("Anthropic", &self.anthropic),
            ("Google", &self.google),
        ]
    }
}

// ─────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Allowed CORS origins. Empty means allow every origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.cors_origins.is_empty());
        assert!(!config.providers.openai.is_configured());
        assert!(config.providers.openai.timeout_secs.is_none());
    }

    #[test]
    fn test_config_from_json_camel_case() {
        let json = serde_json::json!({
            "providers": {
                "openai": {
                    "apiKey": "sk-test",
                    "apiBase": "http://localhost:9999/v1",
                    "timeoutSecs": 30
                }
            },
            "server": {
                "host": "127.0.0.1",
                "port": 9090,
                "corsOrigins": ["http://localhost:5173"]
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.providers.openai.api_key, "sk-test");
        assert_eq!(
            config.providers.openai.api_base.as_deref(),
            Some("http://localhost:9999/v1")
        );
        assert_eq!(config.providers.openai.timeout_secs, Some(30));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        // Defaults preserved for missing fields
        assert!(!config.providers.google.is_configured());
    }

    #[test]
    fn test_config_json_uses_camel_case() {
        let mut config = Config::default();
        config.providers.openai.api_key = "sk".into();
        let json = serde_json::to_value(&config).unwrap();

        assert!(json["providers"]["openai"].get("apiKey").is_some());
        assert!(json["server"].get("corsOrigins").is_some());
        assert!(json["providers"]["openai"].get("api_key").is_none());
        // Unset optionals are omitted
        assert!(json["providers"]["openai"].get("apiBase").is_none());
    }

    #[test]
    fn test_providers_get_by_name() {
        let mut providers = ProvidersConfig::default();
        providers.anthropic.api_key = "sk-ant-123".to_string();

        assert!(providers.get_by_name("Anthropic").unwrap().is_configured());
        assert!(providers.get_by_name("anthropic").unwrap().is_configured());
        assert!(!providers.get_by_name("OpenAI").unwrap().is_configured());
        assert!(providers.get_by_name("Mistral").is_none());
    }

    #[test]
    fn test_bind_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origins: Vec::new(),
        };
        assert_eq!(server.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(!config.providers.anthropic.is_configured());
    }
}
