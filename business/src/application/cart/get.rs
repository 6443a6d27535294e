use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::product::value_objects::ProductId;

/// Resolves a user's stored cart into full product records.
///
/// Each distinct product id is looked up once, however many times it appears
/// across the user's cart-detail records. The result keeps the stored order
/// and repeats a product once per reference.
pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub get_product: Arc<dyn GetProductByIdUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Vec<Product>, CartError> {
        self.logger
            .info(&format!("Fetching cart for user: {}", params.username));

        let details = self.repository.get_cart(&params.username).await?;
        if details.is_empty() {
            self.logger
                .info(&format!("No cart stored for user: {}", params.username));
            return Ok(Vec::new());
        }

        let mut items: Vec<ProductId> = Vec::new();
        for detail in &details {
            let contents = detail.decode_contents().inspect_err(|_| {
                self.logger.error(&format!(
                    "Cart detail {} of user {} has malformed contents",
                    detail.id, params.username
                ));
            })?;
            items.extend(contents.into_inner());
        }

        let distinct: BTreeSet<ProductId> = items.iter().copied().collect();
        let mut resolved: BTreeMap<ProductId, Product> = BTreeMap::new();
        for id in distinct {
            let product = self
                .get_product
                .execute(GetProductByIdParams { id })
                .await
                .map_err(|e| match e {
                    ProductError::NotFound => CartError::ProductNotFound(id),
                    ProductError::Repository(inner) => CartError::Repository(inner),
                    other => CartError::Catalog(other),
                })?;
            resolved.insert(id, product);
        }

        let mut products = Vec::with_capacity(items.len());
        for id in &items {
            let product = resolved.get(id).ok_or(CartError::ProductNotFound(*id))?;
            products.push(product.clone());
        }

        self.logger.info(&format!(
            "Resolved {} items ({} distinct) for user: {}",
            products.len(),
            resolved.len(),
            params.username
        ));
        Ok(products)
    }
}
