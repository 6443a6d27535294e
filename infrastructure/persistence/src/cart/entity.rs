use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;

use business::domain::cart::model::CartDetail;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Username;

#[derive(Debug, FromRow)]
pub struct CartDetailEntity {
    pub id: i64,
    pub username: String,
    pub contents: String,
    pub cost: BigDecimal,
}

impl CartDetailEntity {
    pub fn into_domain(self) -> Result<CartDetail, RepositoryError> {
        let cost = self.cost.to_f64().ok_or_else(|| {
            tracing::warn!("Cart detail {} has a cost that does not fit f64", self.id);
            RepositoryError::CorruptedRecord
        })?;

        Ok(CartDetail::from_repository(
            self.id,
            Username::new(self.username),
            self.contents,
            cost,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_keep_contents_as_stored_text() {
        let entity = CartDetailEntity {
            id: 3,
            username: "alice".to_string(),
            contents: "[1,2,1]".to_string(),
            cost: BigDecimal::from_str("12.00").unwrap(),
        };

        let detail = entity.into_domain().unwrap();

        assert_eq!(detail.username.as_str(), "alice");
        assert_eq!(detail.contents, "[1,2,1]");
        assert!((detail.cost - 12.0).abs() < 1e-9);
    }
}
