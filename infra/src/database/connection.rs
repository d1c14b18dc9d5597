//! MySQL connection pool management

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;
use tracing::info;

use ripple_shared::config::database::DatabaseConfig;

use crate::InfrastructureError;

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        "Creating MySQL pool with max connections: {}",
        config.max_connections
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    info!("MySQL pool created successfully");
    Ok(pool)
}
