use serde::{Deserialize, Serialize};

use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub qty: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        description: String,
        cost: f64,
        qty: i32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            cost,
            qty,
        }
    }
}

/// Payload for a catalog insert. Handed to the repository as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub qty: Option<i32>,
}

impl NewProduct {
    pub fn qty_or_default(&self) -> i32 {
        self.qty.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_fields_when_loaded_from_repository() {
        let product = Product::from_repository(
            ProductId::new(3),
            "Espresso Beans".to_string(),
            "1kg bag, dark roast".to_string(),
            18.5,
            12,
        );

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.name, "Espresso Beans");
        assert_eq!(product.qty, 12);
    }

    #[test]
    fn should_not_reject_negative_qty_at_construction() {
        let product = Product::from_repository(
            ProductId::new(4),
            "Returned Mug".to_string(),
            String::new(),
            6.0,
            -2,
        );

        assert_eq!(product.qty, -2);
    }

    #[test]
    fn should_default_qty_to_zero_when_absent() {
        let new_product = NewProduct {
            id: None,
            name: "Milk Frother".to_string(),
            description: "Handheld".to_string(),
            cost: 14.99,
            qty: None,
        };

        assert_eq!(new_product.qty_or_default(), 0);
    }

    #[test]
    fn should_deserialize_payload_without_id_and_qty() {
        let json = r#"{"name":"Tamper","description":"58mm","cost":22.0}"#;
        let new_product: NewProduct = serde_json::from_str(json).unwrap();

        assert!(new_product.id.is_none());
        assert_eq!(new_product.qty_or_default(), 0);
    }
}
