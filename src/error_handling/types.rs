//! Error type definitions.

use log::SetLoggerError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Error types for startup failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The database URL could not be assembled from the configuration.
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    /// The connection pool could not reach the database.
    #[error("Database pool error: {0}")]
    PoolError(#[source] sqlx::Error),

    /// The bundled migrations failed to apply.
    #[error("Migration error: {0}")]
    MigrationError(#[from] MigrateError),
}

/// Errors returned by the data-access layer.
///
/// Unique-constraint violations are classified as [`StoreError::Conflict`]
/// whatever the backend, so callers never inspect vendor error codes.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An insert collided with an existing row.
    #[error("Unique constraint violation: {0}")]
    Conflict(String),

    /// Any other failure: connectivity, pool closed, unexpected SQL error.
    #[error("SQL error: {0}")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                StoreError::Conflict(db_error.message().to_string())
            }
            other => StoreError::Sql(other),
        }
    }
}

impl StoreError {
    /// Whether this error means the row already exists.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict(_))
    }
}
