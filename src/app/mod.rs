//! Main application modules.
//!
//! This module provides the add-visit pipeline, input normalization and
//! shutdown handling used by the server.

pub mod add_visit;
pub mod input;
pub mod shutdown;

// Re-export public API
pub use add_visit::{add_visit, AddVisitOutcome};
pub use shutdown::listen_for_shutdown;
