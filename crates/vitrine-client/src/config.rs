//! # Source Settings
//!
//! Where the products come from. Embedded as the `[source]` table of the
//! dashboard's `vitrine.toml`:
//!
//! ```toml
//! [source]
//! url = "http://localhost:8000/api/produtos"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default products endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "http://localhost:8000/api/produtos";

/// Products endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Full URL of the products endpoint.
    #[serde(default = "default_url")]
    pub url: String,

    /// Whole-request timeout (seconds). A timeout is a load failure.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_PRODUCTS_URL.to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SourceSettings {
    /// Settings pointing at `url` with the default timeout.
    pub fn for_url(url: impl Into<String>) -> Self {
        SourceSettings {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SourceSettings::default();
        assert_eq!(settings.url, "http://localhost:8000/api/produtos");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: SourceSettings = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(settings.url, DEFAULT_PRODUCTS_URL);
        assert_eq!(settings.timeout_secs, 3);
    }
}
