use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::contents::CartContents;
use business::domain::cart::model::CartDetail;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::Username;

use super::entity::CartDetailEntity;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_row(id: i64, raw: &str) -> Result<CartContents, RepositoryError> {
    CartContents::decode(raw).map_err(|_| {
        tracing::warn!("Cart detail {} holds undecodable contents: {}", id, raw);
        RepositoryError::CorruptedRecord
    })
}

/// Removes the first reference to `product_id`, scanning rows in the given order.
/// Returns the id of the row that changed, or `None` when no row references it.
fn remove_first_reference(
    rows: &mut [(i64, CartContents)],
    product_id: ProductId,
) -> Option<i64> {
    rows.iter_mut()
        .find_map(|(id, contents)| contents.remove_first(product_id).then_some(*id))
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_cart(&self, username: &Username) -> Result<Vec<CartDetail>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartDetailEntity>(
            "SELECT id, username, contents, cost FROM cart_details WHERE username = $1 ORDER BY id",
        )
        .bind(username.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn add_to_cart(
        &self,
        username: &Username,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let latest = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, contents FROM cart_details WHERE username = $1 ORDER BY id DESC LIMIT 1 FOR UPDATE",
        )
        .bind(username.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        match latest {
            Some((id, raw)) => {
                let mut contents = decode_row(id, &raw)?;
                contents.push(product_id);

                sqlx::query(
                    r#"UPDATE cart_details SET
                        contents = $2,
                        cost = cost + COALESCE((SELECT cost FROM products WHERE id = $3), 0)
                    WHERE id = $1"#,
                )
                .bind(id)
                .bind(contents.encode())
                .bind(product_id.value())
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
            }
            None => {
                let contents = CartContents::new(vec![product_id]);

                sqlx::query(
                    r#"INSERT INTO cart_details (username, contents, cost)
                    VALUES ($1, $2, COALESCE((SELECT cost FROM products WHERE id = $3), 0))"#,
                )
                .bind(username.as_str())
                .bind(contents.encode())
                .bind(product_id.value())
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
            }
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn remove_from_cart(
        &self,
        username: &Username,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, contents FROM cart_details WHERE username = $1 ORDER BY id FOR UPDATE",
        )
        .bind(username.as_str())
        .fetch_all(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut decoded = rows
            .iter()
            .map(|(id, raw)| decode_row(*id, raw).map(|contents| (*id, contents)))
            .collect::<Result<Vec<_>, _>>()?;

        let Some(changed) = remove_first_reference(&mut decoded, product_id) else {
            tracing::debug!(
                "Product {} not in cart of {}, nothing to remove",
                product_id,
                username
            );
            return Ok(());
        };

        let contents = decoded
            .iter()
            .find(|(id, _)| *id == changed)
            .map(|(_, contents)| contents.encode())
            .ok_or(RepositoryError::CorruptedRecord)?;

        sqlx::query(
            r#"UPDATE cart_details SET
                contents = $2,
                cost = GREATEST(cost - COALESCE((SELECT cost FROM products WHERE id = $3), 0), 0)
            WHERE id = $1"#,
        )
        .bind(changed)
        .bind(contents)
        .bind(product_id.value())
        .execute(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete_cart(&self, username: &Username) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_details WHERE username = $1")
            .bind(username.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
