#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.not_found")]
    NotFound,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
