//! Product catalog records for the inventory dashboard.
//!
//! These types mirror the catalog service's JSON wire format (camelCase
//! field names). The dashboard consumes `id`, `name`, `supplier.name`,
//! `stock_quantity`, and `min_stock_level`; the remaining fields are
//! available to richer views.

use serde::{Deserialize, Serialize};

/// A supplier as embedded in a product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
}

/// One product record from the catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    pub stock_quantity: i64,
    pub min_stock_level: i64,
    pub supplier: Supplier,
}

impl Product {
    /// Whether the product is below its restock threshold.
    ///
    /// A pure function of `stock_quantity` and `min_stock_level`; equal
    /// stock counts as healthy.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity < self.min_stock_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock_quantity: i64, min_stock_level: i64) -> Product {
        Product {
            id: 1,
            name: "Standing Desk Pro".to_string(),
            sku: Some("FURN-002".to_string()),
            price: Some(450.0),
            description: None,
            stock_quantity,
            min_stock_level,
            supplier: Supplier {
                name: "Apex Furniture".to_string(),
                email: None,
                contact_info: None,
            },
        }
    }

    #[test]
    fn test_low_stock_below_threshold() {
        assert!(product(5, 10).is_low_stock());
    }

    #[test]
    fn test_low_stock_at_threshold_is_healthy() {
        assert!(!product(10, 10).is_low_stock());
    }

    #[test]
    fn test_low_stock_above_threshold_is_healthy() {
        assert!(!product(50, 10).is_low_stock());
    }

    #[test]
    fn test_predicate_independent_of_ordering() {
        // Two products, one low, one healthy -- the predicate depends only
        // on each product's own fields.
        let low = product(5, 10);
        let healthy = product(50, 10);
        for pair in [[&low, &healthy], [&healthy, &low]] {
            let flags: Vec<bool> = pair.iter().map(|p| p.is_low_stock()).collect();
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{
            "id": 2,
            "name": "Standing Desk Pro",
            "sku": "FURN-002",
            "price": 450.0,
            "description": "Dual motor electric standing desk.",
            "stockQuantity": 5,
            "minStockLevel": 10,
            "supplier": {"name": "Apex Furniture", "email": "apex_orders@example.com"}
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.stock_quantity, 5);
        assert_eq!(p.min_stock_level, 10);
        assert_eq!(p.supplier.name, "Apex Furniture");
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 7,
            "name": "4K Monitor 27-inch",
            "stockQuantity": 30,
            "minStockLevel": 15,
            "supplier": {"name": "TechGadget Inc"}
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.sku.is_none());
        assert!(!p.is_low_stock());
    }
}
