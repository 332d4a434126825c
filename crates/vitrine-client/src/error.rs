//! # Load Error Types
//!
//! Every way the one-shot load can fail. All of them end the same way: the
//! failure is logged and the dashboard keeps its previous products.
//!
//! ## Error Mapping
//! ```text
//! reqwest timeout            → LoadError::Timeout
//! reqwest connect/transport  → LoadError::Network
//! non-2xx status             → LoadError::Status
//! body not a record array    → LoadError::Decode
//! record breaks data model   → LoadError::InvalidRecord
//! client construction        → LoadError::Client
//! ```

use thiserror::Error;
use vitrine_core::CoreError;

/// Product load failures.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The request took longer than the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The endpoint answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The body is not a JSON array of product records.
    #[error("Malformed products body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record decoded but violates the product data model.
    #[error(transparent)]
    InvalidRecord(#[from] CoreError),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Convert reqwest errors to LoadError.
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LoadError::Timeout(err.to_string())
        } else if err.is_builder() {
            LoadError::Client(err.to_string())
        } else if let Some(status) = err.status() {
            LoadError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            LoadError::Network(err.to_string())
        }
    }
}

impl LoadError {
    /// Short machine-readable category for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "network",
            LoadError::Timeout(_) => "timeout",
            LoadError::Status { .. } => "status",
            LoadError::Decode(_) => "decode",
            LoadError::InvalidRecord(_) => "invalid_record",
            LoadError::Client(_) => "client",
        }
    }
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::ValidationError;

    #[test]
    fn test_error_messages() {
        let err = LoadError::Status {
            status: 503,
            url: "http://localhost:8000/api/produtos".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 503 from http://localhost:8000/api/produtos"
        );
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_invalid_record_is_transparent() {
        let core = CoreError::invalid_product(
            3,
            ValidationError::Negative {
                field: "quantity".to_string(),
                value: "-2".to_string(),
            },
        );
        let err: LoadError = core.into();
        assert_eq!(err.to_string(), "Invalid product 3: quantity must not be negative (got -2)");
        assert_eq!(err.kind(), "invalid_record");
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: LoadError = serde_err.into();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
