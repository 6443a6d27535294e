use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Adding product: {}", params.product.name));

        // Stored as given; the catalog does not validate new products.
        self.repository.add_product(&params.product).await?;

        self.logger
            .info(&format!("Product added: {}", params.product.name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product};
    use crate::domain::product::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn list_products(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
            async fn add_product(&self, product: &NewProduct) -> Result<(), RepositoryError>;
            async fn update_qty(&self, id: ProductId, qty: i32) -> Result<(), RepositoryError>;
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
    async fn should_pass_payload_to_repository_unchanged() {
        let payload = NewProduct {
            id: Some(ProductId::new(40)),
            name: "Burr Grinder".to_string(),
            description: "Conical burrs".to_string(),
            cost: 129.0,
            qty: Some(4),
        };
        let expected = payload.clone();

        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add_product()
            .withf(move |product| *product == expected)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams { product: payload })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_validate_before_storing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_add_product().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                product: NewProduct {
                    id: None,
                    name: String::new(),
                    description: String::new(),
                    cost: -1.0,
                    qty: Some(-3),
                },
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_add_product()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                product: NewProduct {
                    id: None,
                    name: "Dripper".to_string(),
                    description: "Ceramic".to_string(),
                    cost: 25.0,
                    qty: None,
                },
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
