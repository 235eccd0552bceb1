//! Reads and writes on the `visited_countries` table.

use log::debug;
use sqlx::AnyPool;

use crate::error_handling::StoreError;

/// Records a visit for an already resolved country code.
///
/// Returns `StoreError::Conflict` when the code is already recorded; the
/// table's unique constraint is the only duplicate check.
pub async fn record_visit(pool: &AnyPool, country_code: &str) -> Result<(), StoreError> {
    sqlx::query("INSERT INTO visited_countries (country_code) VALUES ($1)")
        .bind(country_code)
        .execute(pool)
        .await?;
    Ok(())
}

/// Returns every recorded country code, sorted by code.
pub async fn visited_country_codes(pool: &AnyPool) -> Result<Vec<String>, StoreError> {
    let codes = sqlx::query_scalar::<_, String>(
        "SELECT CAST(country_code AS TEXT) FROM visited_countries ORDER BY country_code",
    )
    .fetch_all(pool)
    .await?;

    debug!("Visited countries: {codes:?}");

    Ok(codes)
}
