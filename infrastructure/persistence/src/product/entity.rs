use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub cost: BigDecimal,
    pub qty: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let cost = self.cost.to_f64().ok_or_else(|| {
            tracing::warn!("Product {} has a cost that does not fit f64", self.id);
            RepositoryError::CorruptedRecord
        })?;

        Ok(Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.description,
            cost,
            self.qty,
        ))
    }
}
