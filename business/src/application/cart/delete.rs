use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Deleting cart of user: {}", params.username));

        self.repository.delete_cart(&params.username).await?;

        self.logger
            .info(&format!("Cart deleted for user: {}", params.username));
        Ok(())
    }
}
