use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::errors::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: directory of SQL migrations
    ///   (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;
        let max_connections = env::var("DATABASE_MAX_CONNECTIONS").ok();
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Self::from_parts(url, max_connections.as_deref(), migrations_path)
    }

    fn from_parts(
        url: String,
        max_connections: Option<&str>,
        migrations_path: String,
    ) -> Result<Self, ConfigError> {
        let max_connections = max_connections
            .map(|raw| {
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"))
            })
            .transpose()?;

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }

    fn pool_config(&self) -> DatabaseConfig {
        let config = DatabaseConfig::new(self.url.clone());
        match self.max_connections {
            Some(max) => config.with_max_connections(max),
            None => config,
        }
    }
}

/// Initialize database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if DATABASE_URL is not set, connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let settings = DatabaseSettings::from_env()?;
    let pool = create_postgres_pool(&settings.pool_config()).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database ready, migrations applied from {}", settings.migrations_path);
    Ok(pool)
}
