//! # View Model
//!
//! Everything the page shows, computed from one [`DashboardState`] snapshot.
//!
//! ## Page Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ Category ▼ All ]   [ Search: ______ ]                                │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ Products: 2  │  │ Total: R$ 250,00 │  │ Avg: R$ 100.00   │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  ViewBody::Table                 OR        ViewBody::Empty              │
//! │  ┌────┬──────────┬──────────┐             "No products found."          │
//! │  │ id │ name     │ ...      │                                           │
//! │  └────┴──────────┴──────────┘                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Table and empty message are two variants of one enum, so a view can never
//! carry both.

use serde::Serialize;

use crate::metrics::Metrics;
use crate::state::DashboardState;
use crate::types::Product;
use crate::EMPTY_MESSAGE;

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub label: String,
    pub selected: bool,
}

/// The three metric cards, preformatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCards {
    /// Number of filtered products.
    pub count: usize,
    /// BRL currency, e.g. `R$ 250,00`.
    pub total_value: String,
    /// Two decimals (`100.00`) or the bare literal `0`.
    pub average_price: String,
}

impl From<Metrics> for MetricCards {
    fn from(metrics: Metrics) -> Self {
        MetricCards {
            count: metrics.count,
            total_value: metrics.total_value.to_string(),
            average_price: metrics.average_price.to_string(),
        }
    }
}

/// A table row, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// BRL currency, e.g. `R$ 50,00`.
    pub price: String,
    pub quantity: i64,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        ProductRow {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price().to_string(),
            quantity: p.quantity,
        }
    }
}

/// Either the product table or the empty-state message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewBody {
    Table { rows: Vec<ProductRow> },
    Empty { message: String },
}

impl ViewBody {
    /// True for the table variant.
    pub fn is_table(&self) -> bool {
        matches!(self, ViewBody::Table { .. })
    }
}

/// The whole rendered dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub categories: Vec<CategoryOption>,
    pub search_text: String,
    pub metrics: MetricCards,
    pub body: ViewBody,
}

impl DashboardView {
    /// Builds the view from a snapshot. Deterministic for a given snapshot.
    pub fn build(state: &DashboardState) -> Self {
        let selected = state.selected_category().label();
        let categories = state
            .category_options()
            .into_iter()
            .map(|label| CategoryOption {
                selected: label == selected,
                label,
            })
            .collect();

        let filtered = state.filtered();
        let metrics = MetricCards::from(Metrics::from_products(filtered.iter().copied()));

        let body = if filtered.is_empty() {
            ViewBody::Empty {
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            ViewBody::Table {
                rows: filtered.into_iter().map(ProductRow::from).collect(),
            }
        };

        DashboardView {
            categories,
            search_text: state.search_text().to_string(),
            metrics,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::CategoryFilter;

    fn state() -> DashboardState {
        DashboardState::new().with_products(
            vec![
                Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
                Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
            ],
            None,
        )
    }

    #[test]
    fn test_table_view() {
        let view = DashboardView::build(&state());

        assert_eq!(view.metrics.count, 2);
        assert_eq!(view.metrics.total_value, "R$ 250,00");
        assert_eq!(view.metrics.average_price, "100.00");
        match &view.body {
            ViewBody::Table { rows } => {
                let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
                assert_eq!(ids, vec![1, 2]);
                assert_eq!(rows[0].price, "R$ 50,00");
                assert_eq!(rows[1].quantity, 1);
            }
            ViewBody::Empty { .. } => panic!("expected a table"),
        }
    }

    #[test]
    fn test_search_view() {
        let view = DashboardView::build(&state().with_search("mouse"));

        assert_eq!(view.metrics.count, 1);
        assert_eq!(view.metrics.total_value, "R$ 100,00");
        assert_eq!(view.metrics.average_price, "50.00");
        assert_eq!(view.search_text, "mouse");
    }

    #[test]
    fn test_empty_view() {
        let view = DashboardView::build(&DashboardState::new());

        assert_eq!(
            view.categories,
            vec![CategoryOption {
                label: "All".to_string(),
                selected: true
            }]
        );
        assert_eq!(view.metrics.count, 0);
        assert_eq!(view.metrics.total_value, "R$ 0,00");
        assert_eq!(view.metrics.average_price, "0");
        assert_eq!(
            view.body,
            ViewBody::Empty {
                message: EMPTY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_table_iff_filtered_non_empty() {
        let base = state();
        for search in ["", "mouse", "zzz", "PERIPH"] {
            let snapshot = base.with_search(search);
            let view = snapshot.view();
            assert_eq!(view.body.is_table(), !snapshot.filtered().is_empty(), "search {search:?}");
        }
    }

    #[test]
    fn test_selected_option_is_marked() {
        let view = state()
            .with_category(CategoryFilter::Only("Peripherals".into()))
            .view();
        let selected: Vec<&str> = view
            .categories
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Peripherals"]);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(DashboardView::build(&DashboardState::new())).unwrap();
        assert_eq!(json["body"]["kind"], "empty");
        assert_eq!(json["metrics"]["averagePrice"], "0");
        assert_eq!(json["categories"][0]["label"], "All");
    }
}
