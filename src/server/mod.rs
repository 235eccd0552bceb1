//! HTTP server.
//!
//! Provides two endpoints:
//! - `GET /` - the list of visited countries and their count
//! - `POST /add` - record a visit from the `country` form field
//!
//! Each request runs as its own task; the database pool in [`AppState`] is
//! the only thing they share.

mod error;
mod handlers;
mod types;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use handlers::{add_visit_handler, index_handler};
pub use error::AppError;
pub use types::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/add", post(add_visit_handler))
        .with_state(state)
}

/// Serves the app on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("Server error")?;

    info!("Server stopped accepting connections");

    Ok(())
}
