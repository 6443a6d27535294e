use poem_openapi::Object;

use business::domain::product::model::Product;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Product to add; added again to increase its count
    pub product_id: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Owner of the cart
    pub username: String,
    /// Products in insertion order, repeated once per unit
    pub items: Vec<ProductResponse>,
}

impl CartResponse {
    pub fn new(username: String, products: Vec<Product>) -> Self {
        Self {
            username,
            items: products.into_iter().map(|p| p.into()).collect(),
        }
    }
}
