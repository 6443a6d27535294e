use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound(ProductId),
    #[error("cart.malformed_contents")]
    MalformedContents,
    #[error("cart.catalog")]
    Catalog(ProductError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
