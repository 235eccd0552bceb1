//! Bundled schema.
//!
//! The tables are normally managed outside the app; these migrations exist
//! for fresh environments and tests and only run when asked to.

use sqlx::migrate::Migrator;
use sqlx::AnyPool;

use crate::error_handling::InitializationError;

/// Runs the SQLx migrations located in the `migrations/` directory.
pub async fn run_migrations(pool: &AnyPool) -> Result<(), InitializationError> {
    let migrations_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let migrator = Migrator::new(migrations_dir.as_path()).await?;
    migrator.run(pool).await?;
    Ok(())
}
