use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => RepositoryError::DatabaseError,
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, cost, qty FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, cost, qty FROM products WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).transpose()
    }

    async fn add_product(&self, product: &NewProduct) -> Result<(), RepositoryError> {
        match product.id {
            Some(id) => {
                let mut tx = self
                    .pool
                    .begin()
                    .await
                    .map_err(|_| RepositoryError::DatabaseError)?;

                sqlx::query(
                    "INSERT INTO products (id, name, description, cost, qty) VALUES ($1, $2, $3, $4::numeric, $5)",
                )
                .bind(id.value())
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.cost)
                .bind(product.qty_or_default())
                .execute(&mut *tx)
                .await
                .map_err(map_insert_error)?;

                // Explicit ids bypass the sequence; move it past them.
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('products', 'id'), (SELECT MAX(id) FROM products))",
                )
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

                tx.commit()
                    .await
                    .map_err(|_| RepositoryError::DatabaseError)?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO products (name, description, cost, qty) VALUES ($1, $2, $3::numeric, $4)",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.cost)
                .bind(product.qty_or_default())
                .execute(&self.pool)
                .await
                .map_err(map_insert_error)?;
            }
        }

        Ok(())
    }

    async fn update_qty(&self, id: ProductId, qty: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET qty = $2 WHERE id = $1")
            .bind(id.value())
            .bind(qty)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
