//! Database connection pool management.
//!
//! One bounded pool is created at startup and shared by every request.
//! Tasks waiting for a connection are suspended, not the process, and each
//! query hands its connection back when it finishes.

use std::time::Duration;

use log::{error, info};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes and returns the database connection pool.
///
/// The backend is picked from the URL scheme (`postgres://` in production,
/// `sqlite:` for local runs and tests). Connecting eagerly means a missing
/// database stops the server at startup instead of failing every request.
pub async fn init_db_pool(config: &Config) -> Result<AnyPool, InitializationError> {
    let url = config.connection_url()?;
    init_db_pool_with_url(&url, config.max_connections, config.idle_timeout_secs).await
}

/// Initializes a pool for an explicit URL.
pub async fn init_db_pool_with_url(
    url: &str,
    max_connections: u32,
    idle_timeout_secs: u64,
) -> Result<AnyPool, InitializationError> {
    // Safe to call repeatedly; the driver list is installed once per process
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(Duration::from_secs(idle_timeout_secs))
        .connect(url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            InitializationError::PoolError(e)
        })?;

    info!("Database pool ready (max {max_connections} connections)");

    Ok(pool)
}
