//! # Validation Module
//!
//! Data model checks applied to records coming from the products endpoint.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (vitrine-client)                               │
//! │  └── Shape: field names and JSON types                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── price: finite, non-negative, fits in cents                        │
//! │  ├── quantity: non-negative                                            │
//! │  ├── price × quantity: fits in cents                                   │
//! │  └── ids: duplicates reported (not rejected)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! User input (category, search text) is never validated: any string is a
//! legal search.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a decimal unit price and converts it to cents.
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_price;
///
/// assert_eq!(validate_price(49.9).unwrap().cents(), 4990);
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<Money> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: price.to_string(),
        });
    }

    Money::from_decimal(price).ok_or_else(|| ValidationError::OutOfRange {
        field: "price".to_string(),
        value: price.to_string(),
    })
}

/// Validates a stock quantity.
pub fn validate_quantity(quantity: i64) -> ValidationResult<i64> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
            value: quantity.to_string(),
        });
    }
    Ok(quantity)
}

/// Checks that a product's stock value (price × quantity) is representable.
///
/// ## Example
/// ```rust
/// use vitrine_core::money::Money;
/// use vitrine_core::validation::validate_stock_value;
///
/// assert_eq!(validate_stock_value(Money::from_cents(5000), 2).unwrap().cents(), 10000);
/// assert!(validate_stock_value(Money::from_cents(i64::MAX / 2), 3).is_err());
/// ```
pub fn validate_stock_value(price: Money, quantity: i64) -> ValidationResult<Money> {
    price
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "stock value".to_string(),
            value: format!("{} x {}", price.to_decimal_string(), quantity),
        })
}

/// Returns every id that appears more than once, in first-repeat order.
///
/// Duplicates break row identity but not the derivation pipeline, so they
/// are reported rather than rejected.
pub fn duplicate_ids(products: &[Product]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(products.len());
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for product in products {
        if !seen.insert(product.id) && reported.insert(product.id) {
            duplicates.push(product.id);
        }
    }

    duplicates
}
