//! Error handling.
//!
//! Errors are split by where they can occur:
//! - **Initialization**: logger, database URL, pool, migrations
//! - **Store**: data-access failures, with duplicates classified as conflicts
//!
//! HTTP-facing errors live next to the handlers in `server::error`.

mod types;

pub use types::{InitializationError, StoreError};
