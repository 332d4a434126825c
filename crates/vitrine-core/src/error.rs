//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                       │
//! │  ├── CoreError        - A record could not become a Product            │
//! │  └── ValidationError  - A field breaks the data model                  │
//! │                                                                         │
//! │  vitrine-client errors (separate crate)                                │
//! │  └── LoadError        - The one-shot load failed                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → LoadError → logged, swallowed     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering, aggregation and view construction are total functions and
//! have no error type at all.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning external records into domain products.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record with the given id breaks the data model.
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        id: i64,
        #[source]
        source: ValidationError,
    },

    /// Validation error without a product context.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Attaches a product id to a validation failure.
    pub fn invalid_product(id: i64, source: ValidationError) -> Self {
        CoreError::InvalidProduct { id, source }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level data model violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: String },

    /// Value does not fit the representable range.
    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Negative {
            field: "price".to_string(),
            value: "-1.5".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative (got -1.5)");

        let err = CoreError::invalid_product(
            7,
            ValidationError::NotFinite {
                field: "price".to_string(),
            },
        );
        assert_eq!(err.to_string(), "Invalid product 7: price must be a finite number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotFinite {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
