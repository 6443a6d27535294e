use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::value_objects::Username;

use super::model::CartDetail;

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Every stored cart-detail record for the user; empty when the user has no cart.
    async fn get_cart(&self, username: &Username) -> Result<Vec<CartDetail>, RepositoryError>;
    async fn add_to_cart(
        &self,
        username: &Username,
        product_id: ProductId,
    ) -> Result<(), RepositoryError>;
    /// Removing a product that is not in the cart is a no-op.
    async fn remove_from_cart(
        &self,
        username: &Username,
        product_id: ProductId,
    ) -> Result<(), RepositoryError>;
    async fn delete_cart(&self, username: &Username) -> Result<(), RepositoryError>;
}
