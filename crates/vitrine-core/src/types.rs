//! # Domain Types
//!
//! Core domain types used throughout Vitrine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌──────────────────────────┐           │
//! │  │    Product      │            │     CategoryFilter       │           │
//! │  │  ─────────────  │            │  ──────────────────────  │           │
//! │  │  id (i64)       │            │  All                     │           │
//! │  │  name           │◄── match ──│  Only("Peripherals")     │           │
//! │  │  category       │            └──────────────────────────┘           │
//! │  │  price_cents    │                                                    │
//! │  │  quantity       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once loaded. `id` is the sort key and the row key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::ALL_CATEGORIES;

// =============================================================================
// Product
// =============================================================================

/// A product record as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, sort key and table row key.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Category, used for faceted filtering and free-text search.
    pub category: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units in stock.
    pub quantity: i64,
}

impl Product {
    /// Creates a product from already-validated parts.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category: category.into(),
            price_cents: price.cents(),
            quantity,
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Price × quantity, this product's share of the total value.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

/// Sorts products ascending by `id`, keeping the relative order of equal ids.
pub fn sort_by_id(products: &mut [Product]) {
    products.sort_by_key(|p| p.id);
}

// =============================================================================
// Category Filter
// =============================================================================

/// The category selector value.
///
/// `All` is rendered as the `"All"` option; `Only` keeps items whose
/// category is exactly equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    /// Pass every product through.
    #[default]
    All,

    /// Keep only products of this exact category.
    Only(String),
}

impl CategoryFilter {
    /// Parses a selector label. `"All"` maps to [`CategoryFilter::All`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// The label shown in the selector.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    /// True when the product passes the category stage.
    #[inline]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        CategoryFilter::from_label(&label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}
