//! # Dashboard Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VITRINE_API_URL=http://inventory:8000/api/produtos                 │
//! │     VITRINE_TIMEOUT_SECS=5                                             │
//! │     VITRINE_BIND_ADDR=0.0.0.0                                          │
//! │     VITRINE_PORT=8080                                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $VITRINE_CONFIG, else ./vitrine.toml                               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:8000/api/produtos, 10s, 127.0.0.1:3000            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # vitrine.toml
//! [source]
//! url = "http://localhost:8000/api/produtos"
//! timeout_secs = 10
//!
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 3000
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};
use vitrine_client::SourceSettings;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "VITRINE_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

// =============================================================================
// Errors
// =============================================================================

/// Configuration failures. All of them abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Server Settings
// =============================================================================

/// Where the dashboard listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Dashboard Config
// =============================================================================

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

impl DashboardConfig {
    /// Loads defaults, then the config file (if any), then the environment,
    /// and validates the result.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            info!(?path, "Loading dashboard config from file");
            let contents = std::fs::read_to_string(&path)?;
            config = toml::from_str(&contents)?;
        } else {
            debug!(?path, "Config file not found, using defaults");
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// `$VITRINE_CONFIG`, else `./vitrine.toml`.
    pub fn default_config_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Checks the values a running dashboard depends on.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.source.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "Products URL must start with http:// or https://, got: {}",
                url
            )));
        }

        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_addr must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production). Unparseable numbers are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("VITRINE_API_URL") {
            debug!(url = %url, "Overriding products URL from environment");
            self.source.url = url;
        }

        if let Some(timeout) = lookup("VITRINE_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.source.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid VITRINE_TIMEOUT_SECS"),
            }
        }

        if let Some(addr) = lookup("VITRINE_BIND_ADDR") {
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("VITRINE_PORT") {
            match port.parse::<u16>() {
                Ok(p) => {
                    debug!(port = p, "Overriding port from environment");
                    self.server.port = p;
                }
                Err(_) => warn!(value = %port, "Ignoring invalid VITRINE_PORT"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.source.url, "http://localhost:8000/api/produtos");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [source]
            url = "https://inventory.example.com/api/produtos"

            [server]
            port = 8080
        "#;
        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.url, "https://inventory.example.com/api/produtos");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.server.bind_addr, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(lookup_from(&[
            ("VITRINE_API_URL", "http://inventory:9000/api/produtos"),
            ("VITRINE_TIMEOUT_SECS", "3"),
            ("VITRINE_BIND_ADDR", "0.0.0.0"),
            ("VITRINE_PORT", "8081"),
        ]));

        assert_eq!(config.source.url, "http://inventory:9000/api/produtos");
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_env_numbers_are_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(lookup_from(&[
            ("VITRINE_TIMEOUT_SECS", "soon"),
            ("VITRINE_PORT", "99999"),
        ]));
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validation() {
        let mut config = DashboardConfig::default();
        config.source.url = "ftp://example.com/produtos".into();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        let mut config = DashboardConfig::default();
        config.source.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("vitrine-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nport = 4010\n").unwrap();

        let config = DashboardConfig::load(Some(path.clone())).unwrap();
        assert_eq!(config.server.port, 4010);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("vitrine-broken-{}.toml", std::process::id()));
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(matches!(
            DashboardConfig::load(Some(path.clone())),
            Err(ConfigError::Parse(_))
        ));

        std::fs::remove_file(&path).ok();
    }
}
