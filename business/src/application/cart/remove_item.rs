use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of user: {}",
            params.product_id, params.username
        ));

        self.repository
            .remove_from_cart(&params.username, params.product_id)
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
    async fn should_delegate_remove_to_repository() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_remove_from_cart()
            .withf(|username, product_id| {
                username.as_str() == "bob" && *product_id == ProductId::new(11)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = RemoveFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromCartParams {
                username: Username::new("bob"),
                product_id: ProductId::new(11),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_remove_from_cart()
            .returning(|_, _| Err(RepositoryError::CorruptedRecord));

        let use_case = RemoveFromCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveFromCartParams {
                username: Username::new("bob"),
                product_id: ProductId::new(11),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Repository(RepositoryError::CorruptedRecord)
        ));
    }
}
