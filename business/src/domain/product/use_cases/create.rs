use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::NewProduct;

pub struct CreateProductParams {
    pub product: NewProduct,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<(), ProductError>;
}
