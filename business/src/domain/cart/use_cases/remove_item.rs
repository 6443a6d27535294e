use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::value_objects::Username;

pub struct RemoveFromCartParams {
    pub username: Username,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<(), CartError>;
}
