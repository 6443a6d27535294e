use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of user: {}",
            params.product_id, params.username
        ));

        // The catalog is not consulted; unknown ids surface when the cart is read.
        self.repository
            .add_to_cart(&params.username, params.product_id)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartDetail;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductId;
    use crate::domain::shared::value_objects::Username;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_cart(&self, username: &Username) -> Result<Vec<CartDetail>, RepositoryError>;
            async fn add_to_cart(&self, username: &Username, product_id: ProductId) -> Result<(), RepositoryError>;
            async fn remove_from_cart(&self, username: &Username, product_id: ProductId) -> Result<(), RepositoryError>;
            async fn delete_cart(&self, username: &Username) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delegate_add_to_repository() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_add_to_cart()
            .withf(|username, product_id| {
                username.as_str() == "alice" && *product_id == ProductId::new(3)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                username: Username::new("alice"),
                product_id: ProductId::new(3),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_add_to_cart()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToCartParams {
                username: Username::new("alice"),
                product_id: ProductId::new(3),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
