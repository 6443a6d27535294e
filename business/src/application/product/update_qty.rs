use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update_qty::{UpdateQuantityParams, UpdateQuantityUseCase};

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Updating quantity of product {} to {}",
            params.id, params.qty
        ));

        if params.qty < 0 {
            self.logger.warn(&format!(
                "Rejected negative quantity {} for product {}",
                params.qty, params.id
            ));
            return Err(ProductError::NegativeQuantity);
        }

        self.repository
            .update_qty(params.id, params.qty)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Quantity updated for product {}", params.id));
        Ok(())
    }
}
