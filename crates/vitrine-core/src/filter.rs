//! # Filter Pipeline
//!
//! Pure derivation from the loaded products and the two user inputs to the
//! filtered list, plus the category option list.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products (ascending id)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Category stage: All → pass; Only(c) → category == c (exact)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Search stage: lower(name) or lower(category) contains lower(search)   │
//! │       │        (empty search matches everything)                        │
//! │       ▼                                                                 │
//! │  filtered (subsequence of products, same order)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recomputed on every render; there is no memoization.

use std::collections::HashSet;

use crate::types::{CategoryFilter, Product};
use crate::ALL_CATEGORIES;

/// Runs both filter stages and returns the surviving products in order.
///
/// ## Example
/// ```rust
/// use vitrine_core::{derive, CategoryFilter, Money, Product};
///
/// let products = vec![
///     Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
///     Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
/// ];
///
/// let filtered = derive(&products, &CategoryFilter::All, "MOUSE");
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id, 1);
/// ```
pub fn derive<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    search_text: &str,
) -> Vec<&'a Product> {
    let needle = search_text.to_lowercase();

    products
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| matches_search(p, &needle))
        .collect()
}

/// Case-insensitive, unanchored substring match over name or category.
///
/// `needle` must already be lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Builds the category selector options: `"All"` followed by each distinct
/// category in first-occurrence order.
///
/// Always derived from the current products and never stored.
///
/// ## Example
/// ```rust
/// use vitrine_core::{category_options, Money, Product};
///
/// assert_eq!(category_options(&[]), vec!["All".to_string()]);
///
/// let products = vec![
///     Product::new(1, "Mouse", "Peripherals", Money::zero(), 0),
///     Product::new(2, "Cable", "Accessories", Money::zero(), 0),
///     Product::new(3, "Keyboard", "Peripherals", Money::zero(), 0),
/// ];
/// assert_eq!(category_options(&products), vec!["All", "Peripherals", "Accessories"]);
/// ```
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_CATEGORIES);

    let mut options = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if seen.insert(product.category.as_str()) {
            options.push(product.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
            Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
            Product::new(3, "HDMI Cable", "Accessories", Money::from_cents(2990), 10),
            Product::new(4, "Mouse Pad", "Accessories", Money::from_cents(1990), 0),
            Product::new(5, "Headset", "Audio", Money::from_cents(24900), 3),
        ]
    }

    fn ids(filtered: &[&Product]) -> Vec<i64> {
        filtered.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_and_empty_search_passes_everything() {
        let products = catalog();
        let filtered = derive(&products, &CategoryFilter::All, "");
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_derive_is_pure() {
        let products = catalog();
        let category = CategoryFilter::Only("Accessories".to_string());
        let first = derive(&products, &category, "a");
        let second = derive(&products, &category, "a");
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_partition() {
        let products = catalog();
        let category = CategoryFilter::Only("Accessories".to_string());
        let filtered = derive(&products, &category, "");
        assert_eq!(ids(&filtered), vec![3, 4]);
        assert!(filtered.iter().all(|p| p.category == "Accessories"));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_category() {
        let products = catalog();

        assert_eq!(ids(&derive(&products, &CategoryFilter::All, "mOuSe")), vec![1, 4]);
        // "audio" only appears in a category
        assert_eq!(ids(&derive(&products, &CategoryFilter::All, "AUDIO")), vec![5]);
        // unanchored
        assert_eq!(ids(&derive(&products, &CategoryFilter::All, "eyboa")), vec![2]);
        assert!(derive(&products, &CategoryFilter::All, "tablet").is_empty());
    }

    #[test]
    fn test_stages_compose_with_and() {
        let products = catalog();
        let category = CategoryFilter::Only("Accessories".to_string());
        // "mouse" matches 1 and 4, only 4 is an accessory
        assert_eq!(ids(&derive(&products, &category, "mouse")), vec![4]);
    }

    #[test]
    fn test_unknown_category_yields_nothing() {
        let products = catalog();
        let category = CategoryFilter::Only("peripherals".to_string());
        assert!(derive(&products, &category, "").is_empty());
    }

    #[test]
    fn test_filtered_is_ordered_subsequence() {
        let products = catalog();
        let filtered = derive(&products, &CategoryFilter::All, "e");
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| products.iter().position(|p| std::ptr::eq(p, *f)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_duplicate_ids_do_not_break_derivation() {
        let products = vec![
            Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
            Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
        ];
        assert_eq!(derive(&products, &CategoryFilter::All, "").len(), 2);
    }

    #[test]
    fn test_category_options() {
        let products = catalog();
        assert_eq!(
            category_options(&products),
            vec!["All", "Peripherals", "Accessories", "Audio"]
        );
        assert_eq!(category_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_category_options_do_not_repeat_all() {
        let products = vec![Product::new(1, "Odd", "All", Money::zero(), 0)];
        assert_eq!(category_options(&products), vec!["All"]);
    }
}
