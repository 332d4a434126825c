//! # vitrine-core: Pure Logic for the Vitrine Dashboard
//!
//! This crate is the **heart** of Vitrine. It contains the whole data
//! derivation pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser (HTML form)                          │   │
//! │  │    Category <select> ──► Search <input> ──► Cards + Table      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ GET /?category=..&q=..                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 vitrine-dashboard (axum)                        │   │
//! │  │       state store, routes, HTML renderer                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │  types   │ │  filter  │ │ metrics  │ │   view   │         │   │
//! │  │   │ Product  │ │  derive  │ │  count   │ │ cards +  │         │   │
//! │  │   │  Money   │ │ options  │ │ total/avg│ │ table    │         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │             vitrine-client (one-shot product load)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CategoryFilter)
//! - [`money`] - Money type with integer arithmetic and BRL formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Data model checks for incoming records
//! - [`filter`] - Category + search pipeline and the category option list
//! - [`metrics`] - Count, total value and average price
//! - [`state`] - Immutable dashboard state snapshot
//! - [`view`] - Render-ready view model
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::{CategoryFilter, DashboardState, Money, Product};
//!
//! let state = DashboardState::new().with_products(
//!     vec![
//!         Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
//!         Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
//!     ],
//!     None,
//! );
//!
//! let state = state.with_search("mouse");
//! let metrics = state.metrics();
//! assert_eq!(metrics.count, 1);
//! assert_eq!(metrics.total_value.cents(), 10000);
//! assert_eq!(state.selected_category(), &CategoryFilter::All);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod metrics;
pub mod money;
pub mod state;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{category_options, derive};
pub use metrics::{AveragePrice, Metrics};
pub use money::Money;
pub use state::DashboardState;
pub use types::*;
pub use view::{CategoryOption, DashboardView, MetricCards, ProductRow, ViewBody};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label of the catch-all category option.
pub const ALL_CATEGORIES: &str = "All";

/// Message rendered instead of the table when nothing passes the filters.
pub const EMPTY_MESSAGE: &str = "No products found.";
