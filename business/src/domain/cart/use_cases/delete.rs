use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::Username;

pub struct DeleteCartParams {
    pub username: Username,
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError>;
}
