use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Username;

pub struct GetCartParams {
    pub username: Username,
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<Product>, CartError>;
}
