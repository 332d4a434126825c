//! # Wire Records
//!
//! Product records exactly as the endpoint serves them:
//!
//! ```json
//! [
//!   { "id": 1, "nome": "Mouse", "categoria": "Peripherals", "preco": 50.0, "quantidade": 2 }
//! ]
//! ```
//!
//! Field names stay on the wire; the domain [`Product`] uses its own names.
//! A record only becomes a `Product` through [`ProductRecord::into_product`],
//! which applies the data model checks.

use serde::{Deserialize, Serialize};
use vitrine_core::validation::{validate_price, validate_quantity, validate_stock_value};
use vitrine_core::{CoreError, CoreResult, Product};

/// One element of the products array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "categoria")]
    pub category: String,

    /// Decimal unit price.
    #[serde(rename = "preco")]
    pub price: f64,

    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

impl ProductRecord {
    /// Validates the record and converts it to a domain product.
    pub fn into_product(self) -> CoreResult<Product> {
        let price = validate_price(self.price).map_err(|e| CoreError::invalid_product(self.id, e))?;
        let quantity =
            validate_quantity(self.quantity).map_err(|e| CoreError::invalid_product(self.id, e))?;
        validate_stock_value(price, quantity).map_err(|e| CoreError::invalid_product(self.id, e))?;

        Ok(Product::new(self.id, self.name, self.category, price, quantity))
    }
}

/// Converts a product back to its wire shape (used by fixtures).
impl From<&Product> for ProductRecord {
    fn from(p: &Product) -> Self {
        ProductRecord {
            id: p.id,
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price_cents as f64 / 100.0,
            quantity: p.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::Money;

    #[test]
    fn test_decodes_wire_names() {
        let json = r#"[
            {"id": 2, "nome": "Keyboard", "categoria": "Peripherals", "preco": 150, "quantidade": 1},
            {"id": 1, "nome": "Mouse", "categoria": "Peripherals", "preco": 49.9, "quantidade": 2}
        ]"#;
        let records: Vec<ProductRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Keyboard");
        assert_eq!(records[0].price, 150.0);

        let mouse = records[1].clone().into_product().unwrap();
        assert_eq!(mouse.price(), Money::from_cents(4990));
        assert_eq!(mouse.category, "Peripherals");
    }

    #[test]
    fn test_missing_field_is_a_decode_error() {
        let json = r#"[{"id": 1, "nome": "Mouse", "categoria": "Peripherals", "preco": 50}]"#;
        assert!(serde_json::from_str::<Vec<ProductRecord>>(json).is_err());
    }

    #[test]
    fn test_wrong_type_is_a_decode_error() {
        let json = r#"[{"id": "1", "nome": "Mouse", "categoria": "P", "preco": 50, "quantidade": 1}]"#;
        assert!(serde_json::from_str::<Vec<ProductRecord>>(json).is_err());
        // fractional quantity
        let json = r#"[{"id": 1, "nome": "Mouse", "categoria": "P", "preco": 50, "quantidade": 1.5}]"#;
        assert!(serde_json::from_str::<Vec<ProductRecord>>(json).is_err());
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let record = ProductRecord {
            id: 9,
            name: "Broken".to_string(),
            category: "X".to_string(),
            price: -10.0,
            quantity: 1,
        };
        let err = record.into_product().unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { id: 9, .. }));

        let record = ProductRecord {
            id: 10,
            name: "Broken".to_string(),
            category: "X".to_string(),
            price: 10.0,
            quantity: -1,
        };
        assert!(record.into_product().is_err());
    }

    #[test]
    fn test_unrepresentable_stock_value_is_rejected() {
        let record = ProductRecord {
            id: 11,
            name: "Vault".to_string(),
            category: "X".to_string(),
            price: 1e12,
            quantity: 1_000_000,
        };
        let err = record.into_product().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidProduct {
                id: 11,
                source: vitrine_core::ValidationError::OutOfRange { .. }
            }
        ));
    }

    #[test]
    fn test_round_trips_through_domain() {
        let product = Product::new(4, "Cable", "Accessories", Money::from_cents(2990), 10);
        let record = ProductRecord::from(&product);
        assert_eq!(record.price, 29.9);
        assert_eq!(record.into_product().unwrap(), product);
    }
}
