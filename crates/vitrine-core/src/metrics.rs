//! # Metrics
//!
//! The three summary cards computed from the filtered list.
//!
//! ```text
//! count         = |filtered|
//! total value   = Σ price × quantity          → "R$ 250,00"
//! average price = Σ price / count  (count>0)  → "100.00"
//!               = literal 0        (count=0)  → "0"
//! ```
//!
//! The zero case of the average renders `0`, not `0.00`. That asymmetry is
//! kept on purpose and covered by tests.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::money::Money;
use crate::types::Product;

/// Average unit price of the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AveragePrice {
    /// Nothing passed the filters.
    Zero,
    /// Mean price, rounded to the cent.
    Value(Money),
}

impl AveragePrice {
    /// The mean price, or zero money for an empty list.
    pub fn amount(&self) -> Money {
        match self {
            AveragePrice::Zero => Money::zero(),
            AveragePrice::Value(money) => *money,
        }
    }
}

/// `Value` renders two fractional digits, `Zero` renders the bare literal `0`.
impl fmt::Display for AveragePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AveragePrice::Zero => f.write_str("0"),
            AveragePrice::Value(money) => f.write_str(&money.to_decimal_string()),
        }
    }
}

impl Serialize for AveragePrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Summary metrics over a filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Number of products that passed the filters.
    pub count: usize,
    /// Σ price × quantity.
    pub total_value: Money,
    /// Mean unit price, or the zero literal.
    pub average_price: AveragePrice,
}

impl Metrics {
    /// Reduces a filtered list to its metrics in one pass.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::{Metrics, Money, Product};
    ///
    /// let products = vec![
    ///     Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
    ///     Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
    /// ];
    /// let metrics = Metrics::from_products(&products);
    ///
    /// assert_eq!(metrics.count, 2);
    /// assert_eq!(metrics.total_value.to_string(), "R$ 250,00");
    /// assert_eq!(metrics.average_price.to_string(), "100.00");
    /// ```
    pub fn from_products<'a, I>(products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut count = 0usize;
        let mut total_value = Money::zero();
        let mut price_sum = Money::zero();

        for product in products {
            count += 1;
            total_value += product.stock_value();
            price_sum += product.price();
        }

        // divide_rounded is None exactly when count == 0
        let average_price = match price_sum.divide_rounded(count as i64) {
            Some(mean) => AveragePrice::Value(mean),
            None => AveragePrice::Zero,
        };

        Metrics {
            count,
            total_value,
            average_price,
        }
    }

    /// Metrics of an empty list.
    pub fn empty() -> Self {
        Metrics {
            count: 0,
            total_value: Money::zero(),
            average_price: AveragePrice::Zero,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::derive;
    use crate::types::CategoryFilter;

    fn peripherals() -> Vec<Product> {
        vec![
            Product::new(1, "Mouse", "Peripherals", Money::from_cents(5000), 2),
            Product::new(2, "Keyboard", "Peripherals", Money::from_cents(15000), 1),
        ]
    }

    #[test]
    fn test_all_products() {
        let products = peripherals();
        let filtered = derive(&products, &CategoryFilter::All, "");
        let metrics = Metrics::from_products(filtered);

        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.total_value, Money::from_cents(25000));
        assert_eq!(metrics.average_price, AveragePrice::Value(Money::from_cents(10000)));
        assert_eq!(metrics.total_value.to_decimal_string(), "250.00");
        assert_eq!(metrics.average_price.to_string(), "100.00");
    }

    #[test]
    fn test_search_narrows_metrics() {
        let products = peripherals();
        let filtered = derive(&products, &CategoryFilter::All, "mouse");
        let metrics = Metrics::from_products(filtered);

        assert_eq!(metrics.count, 1);
        assert_eq!(metrics.total_value.to_decimal_string(), "100.00");
        assert_eq!(metrics.average_price.to_string(), "50.00");
    }

    #[test]
    fn test_empty_list_uses_zero_literal() {
        let metrics = Metrics::from_products(std::iter::empty::<&Product>());

        assert_eq!(metrics, Metrics::empty());
        assert_eq!(metrics.total_value.to_decimal_string(), "0.00");
        assert_eq!(metrics.total_value.to_string(), "R$ 0,00");
        // bare 0, not 0.00
        assert_eq!(metrics.average_price.to_string(), "0");
        assert_eq!(metrics.average_price.amount(), Money::zero());
    }

    #[test]
    fn test_total_weights_by_quantity() {
        let products = vec![
            Product::new(1, "Cable", "Accessories", Money::from_cents(2990), 10),
            Product::new(2, "Pad", "Accessories", Money::from_cents(1990), 0),
        ];
        let metrics = Metrics::from_products(&products);

        assert_eq!(metrics.total_value, Money::from_cents(29900));
        // average ignores quantity: (29.90 + 19.90) / 2 = 24.90
        assert_eq!(metrics.average_price.to_string(), "24.90");
    }

    #[test]
    fn test_average_rounds_to_cent() {
        let products = vec![
            Product::new(1, "a", "x", Money::from_cents(100), 1),
            Product::new(2, "b", "x", Money::from_cents(100), 1),
            Product::new(3, "c", "x", Money::from_cents(101), 1),
        ];
        // 3.01 / 3 = 1.00333...
        assert_eq!(Metrics::from_products(&products).average_price.to_string(), "1.00");
    }

    #[test]
    fn test_huge_products_never_overflow() {
        // each one is individually representable, their sums are not
        let products = vec![
            Product::new(1, "Vault", "Safes", Money::from_cents(i64::MAX / 2), 1),
            Product::new(2, "Vault", "Safes", Money::from_cents(i64::MAX / 2), 1),
            Product::new(3, "Vault", "Safes", Money::from_cents(i64::MAX / 2), 1),
        ];
        let metrics = Metrics::from_products(&products);

        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.total_value.cents(), i64::MAX);
        assert_eq!(metrics.average_price.amount().cents(), i64::MAX / 3);
    }

    #[test]
    fn test_serializes_display_strings_for_average() {
        let json = serde_json::to_value(Metrics::empty()).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["averagePrice"], "0");
    }
}
