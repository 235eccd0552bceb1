//! Shared test helpers for storage module tests.

#[cfg(test)]
use sqlx::any::{install_default_drivers, AnyPoolOptions};
#[cfg(test)]
use sqlx::AnyPool;

#[cfg(test)]
use crate::storage::run_migrations;

/// Reference rows loaded into every test database.
#[cfg(test)]
pub const TEST_COUNTRIES: &[(&str, &str)] = &[
    ("AX", "Åland Islands"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("US", "United States of America"),
];

/// Creates an in-memory test database with migrations applied and
/// [`TEST_COUNTRIES`] loaded.
///
/// A single connection that never expires: every connection to
/// `sqlite::memory:` opens its own empty database.
#[cfg(test)]
pub async fn create_test_pool() -> AnyPool {
    install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    for (code, name) in TEST_COUNTRIES {
        sqlx::query("INSERT INTO countries (country_code, country_name) VALUES ($1, $2)")
            .bind(*code)
            .bind(*name)
            .execute(&pool)
            .await
            .expect("Failed to insert test country");
    }

    pool
}

/// Counts rows in `visited_countries`.
#[cfg(test)]
pub async fn count_visits(pool: &AnyPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visited_countries")
        .fetch_one(pool)
        .await
        .expect("Failed to count visits")
}
