use poem_openapi::Object;

use business::domain::product::model::{NewProduct, Product};
use business::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Explicit product id; generated by the store when omitted
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit cost
    pub cost: f64,
    /// Units in stock (default: 0)
    #[oai(skip_serializing_if_is_none)]
    pub qty: Option<i32>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            id: request.id.map(ProductId::new),
            name: request.name,
            description: request.description,
            cost: request.cost,
            qty: request.qty,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New stock level (must not be negative)
    pub qty: i32,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit cost
    pub cost: f64,
    /// Units in stock
    pub qty: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name,
            description: product.description,
            cost: product.cost,
            qty: product.qty,
        }
    }
}
