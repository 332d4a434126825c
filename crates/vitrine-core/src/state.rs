//! # Dashboard State
//!
//! The UI state as one immutable snapshot.
//!
//! ## Snapshot Replacement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Transitions                                    │
//! │                                                                         │
//! │  Event                    Operation                 New Snapshot        │
//! │  ─────                    ─────────                 ────────────        │
//! │                                                                         │
//! │  Load succeeded ────────► with_products() ────────► products replaced  │
//! │                                                                         │
//! │  Category changed ──────► with_category() ────────► selection replaced │
//! │                                                                         │
//! │  Search typed ──────────► with_search() ──────────► search replaced    │
//! │                                                                         │
//! │  Render ────────────────► filtered() / metrics() / view() (read only)  │
//! │                                                                         │
//! │  NOTE: Snapshots are never mutated. The product list is shared through  │
//! │        an Arc, so selection updates do not copy it.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::filter::{category_options, derive};
use crate::metrics::Metrics;
use crate::types::{CategoryFilter, Product};
use crate::view::DashboardView;

/// One snapshot of the dashboard UI state.
///
/// ## Invariants
/// - `products` is ascending by id (the loader sorts before handing it over)
/// - category options are derived from `products` on demand, never stored
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    products: Arc<Vec<Product>>,
    selected_category: CategoryFilter,
    search_text: String,
    loaded_at: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// Empty, not-loaded state with `"All"` selected and no search text.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded products, ascending by id.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current category selection.
    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// When the products were loaded, `None` before the first successful load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// True once a load has been applied.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    // =========================================================================
    // Updates (each returns a new snapshot)
    // =========================================================================

    /// Replaces the product list wholesale.
    pub fn with_products(&self, products: Vec<Product>, loaded_at: Option<DateTime<Utc>>) -> Self {
        DashboardState {
            products: Arc::new(products),
            loaded_at: loaded_at.or(self.loaded_at),
            ..self.clone()
        }
    }

    /// Replaces the category selection.
    pub fn with_category(&self, category: CategoryFilter) -> Self {
        DashboardState {
            selected_category: category,
            ..self.clone()
        }
    }

    /// Replaces the selection from a selector label.
    ///
    /// A label that is not among the current options selects `"All"`, so the
    /// selection always names an option.
    pub fn with_category_label(&self, label: &str) -> Self {
        let category = if self.category_options().iter().any(|o| o == label) {
            CategoryFilter::from_label(label)
        } else {
            CategoryFilter::All
        };
        self.with_category(category)
    }

    /// Replaces the search text.
    pub fn with_search(&self, search_text: impl Into<String>) -> Self {
        DashboardState {
            search_text: search_text.into(),
            ..self.clone()
        }
    }

    // =========================================================================
    // Derivations (pure, recomputed on every call)
    // =========================================================================

    /// `"All"` plus the distinct categories of the current products.
    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.products)
    }

    /// Products passing both the category and the search stage.
    pub fn filtered(&self) -> Vec<&Product> {
        derive(&self.products, &self.selected_category, &self.search_text)
    }

    /// Metrics of the filtered list.
    pub fn metrics(&self) -> Metrics {
        Metrics::from_products(self.filtered())
    }

    /// Render-ready view of this snapshot.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(self)
    }
}
