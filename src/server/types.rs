//! Server data structures.

use serde::Deserialize;
use sqlx::AnyPool;

/// Shared state for the handlers.
///
/// The pool is the only shared resource; cloning the state clones a handle
/// to the same pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

/// Form body of `POST /add`.
///
/// A missing field is treated like a blank one.
#[derive(Debug, Deserialize)]
pub struct AddVisitForm {
    #[serde(default)]
    pub country: Option<String>,
}
