//! # Product Sources
//!
//! The seam between the load policy and the transport.
//!
//! ```text
//! ┌───────────────────────┐        ┌─────────────────────────────────────┐
//! │  loader (policy)      │ fetch  │  ProductSource                      │
//! │  validate, sort,      │───────►│  ├── HttpProductSource (reqwest)    │
//! │  cancel, log          │        │  └── StaticSource (in-memory)       │
//! └───────────────────────┘        └─────────────────────────────────────┘
//! ```
//!
//! A source returns raw wire records; it never validates or sorts.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SourceSettings;
use crate::error::{LoadError, LoadResult};
use crate::wire::ProductRecord;

/// Something that can produce the product records once.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches the raw product records.
    async fn fetch(&self) -> LoadResult<Vec<ProductRecord>>;

    /// Human-readable origin for log fields.
    fn describe(&self) -> String;
}

// =============================================================================
// HTTP Source
// =============================================================================

/// `GET <url>` without parameters, headers or authentication.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    url: String,
}

impl HttpProductSource {
    /// Builds a source with its own reqwest client.
    pub fn new(settings: &SourceSettings) -> LoadResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| LoadError::Client(e.to_string()))?;

        Ok(HttpProductSource {
            client,
            url: settings.url.clone(),
        })
    }

    /// The endpoint this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> LoadResult<Vec<ProductRecord>> {
        debug!(url = %self.url, "Fetching products");

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<ProductRecord> = serde_json::from_slice(&body)?;

        debug!(url = %self.url, count = records.len(), bytes = body.len(), "Products body decoded");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

// =============================================================================
// Static Source
// =============================================================================

/// In-memory source, for running the dashboard against fixed data.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ProductRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        StaticSource { records }
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn fetch(&self) -> LoadResult<Vec<ProductRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_keeps_url() {
        let settings = SourceSettings::for_url("http://127.0.0.1:9/api/produtos");
        let source = HttpProductSource::new(&settings).unwrap();
        assert_eq!(source.url(), "http://127.0.0.1:9/api/produtos");
        assert_eq!(source.describe(), "http://127.0.0.1:9/api/produtos");
    }

    #[tokio::test]
    async fn test_static_source_returns_records() {
        let source = StaticSource::new(vec![ProductRecord {
            id: 1,
            name: "Mouse".to_string(),
            category: "Peripherals".to_string(),
            price: 50.0,
            quantity: 2,
        }]);
        assert_eq!(source.fetch().await.unwrap().len(), 1);
        assert_eq!(source.describe(), "static (1 records)");
    }
}
