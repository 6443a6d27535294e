use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductId;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in the store's native order.
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
    /// `Ok(None)` when no product has this id.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    async fn add_product(&self, product: &NewProduct) -> Result<(), RepositoryError>;
    /// Returns `RepositoryError::NotFound` when no row matched.
    async fn update_qty(&self, id: ProductId, qty: i32) -> Result<(), RepositoryError>;
}
