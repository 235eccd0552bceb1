// Shared test helpers for database setup and running the app.
//
// This module provides common utilities used across multiple test files to reduce duplication.
#![allow(dead_code)]

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use visited_countries::{run_migrations, serve, AppState};

/// Reference rows loaded into every test database.
pub const TEST_COUNTRIES: &[(&str, &str)] = &[
    ("AX", "Åland Islands"),
    ("DE", "Germany"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("IN", "India"),
    ("JP", "Japan"),
    ("US", "United States of America"),
];

/// Creates an in-memory database with migrations applied and the test
/// countries loaded.
///
/// One connection that never expires, since each `sqlite::memory:`
/// connection is a separate database.
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
pub async fn count_visits(pool: &AnyPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM visited_countries")
        .fetch_one(pool)
        .await
        .expect("Failed to count visits")
}

/// A running app bound to a random local port.
pub struct TestApp {
    pub base_url: String,
    pub pool: AnyPool,
    pub client: reqwest::Client,
    shutdown: CancellationToken,
}

impl TestApp {
    /// Starts the app on `127.0.0.1:0` backed by a fresh test database.
    pub async fn spawn() -> Self {
        let pool = create_test_pool().await;

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");

        let shutdown = CancellationToken::new();
        let state = AppState::new(pool.clone());
        let server_shutdown = shutdown.clone();
        tokio::spawn(async move {
            serve(listener, state, server_shutdown)
                .await
                .expect("Server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            pool,
            client: reqwest::Client::new(),
            shutdown,
        }
    }

    /// `GET /`, returning status and body.
    pub async fn get_index(&self) -> (u16, String) {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("GET / failed");
        let status = response.status().as_u16();
        (status, response.text().await.expect("Failed to read body"))
    }

    /// `POST /add` with the given form fields, returning status and body.
    pub async fn post_add(&self, fields: &[(&str, &str)]) -> (u16, String) {
        let response = self
            .client
            .post(format!("{}/add", self.base_url))
            .form(fields)
            .send()
            .await
            .expect("POST /add failed");
        let status = response.status().as_u16();
        (status, response.text().await.expect("Failed to read body"))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
