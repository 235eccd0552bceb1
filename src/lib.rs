//! visited_countries library: a small travel tracker web app
//!
//! Users type a country name into a form; the name is resolved against a
//! reference table of countries, the visit is recorded, and the page shows
//! every visited country code with a count and a status banner.
//!
//! # Example
//!
//! ```no_run
//! use visited_countries::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     db_pass: "secret".to_string(),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime and a database holding the
//! `countries` and `visited_countries` tables (see `migrations/`).

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
mod server;
mod storage;
mod view;

// Re-export public API
pub use app::{add_visit, AddVisitOutcome};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, StoreError};
pub use run::run_server;
pub use server::{build_router, serve, AppError, AppState};
pub use storage::{
    find_country_code, init_db_pool, init_db_pool_with_url, record_visit, run_migrations,
    visited_country_codes,
};
pub use view::{render_index, IndexPage, Notification, NotificationKind};

// Internal run module (process lifecycle around the server)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use tokio::net::TcpListener;
    use tokio_util::sync::CancellationToken;

    use crate::app::listen_for_shutdown;
    use crate::config::Config;
    use crate::server::{serve, AppState};
    use crate::storage::{init_db_pool, run_migrations};

    /// Runs the web server until Ctrl+C or SIGTERM.
    ///
    /// Opens the pool, optionally applies the bundled migrations, binds
    /// `0.0.0.0:<port>`, serves, and closes the pool on the way out.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The database is unreachable or the URL is invalid
    /// - Migrations were requested and failed
    /// - The port cannot be bound
    pub async fn run_server(config: Config) -> Result<()> {
        let pool = init_db_pool(&config)
            .await
            .context("Failed to initialize database pool")?;

        if config.run_migrations {
            run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            info!("Migrations applied");
        }

        let address = format!("0.0.0.0:{}", config.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;
        info!("Server is running on http://localhost:{}", config.port);

        let shutdown = CancellationToken::new();
        let signals = tokio::spawn(listen_for_shutdown(shutdown.clone()));

        let result = serve(listener, AppState::new(pool.clone()), shutdown.clone()).await;

        // Stop the signal listener if the server ended on its own
        shutdown.cancel();
        let _ = signals.await;

        pool.close().await;
        info!("Database pool closed");

        result
    }
}
