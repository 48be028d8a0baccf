pub mod country;
pub mod fixture;
pub mod league;
pub mod league_config;
pub mod slug;
pub mod standings;
pub mod team;
pub mod user;

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

use crate::{config::AppConfig, errors::AppError};

pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to database: {}", e)))?;

    tracing::info!(
        "Connected to database (max {} connections)",
        config.db_max_connections
    );

    Ok(pool)
}

pub async fn run_migrations(postgres: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(postgres).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
