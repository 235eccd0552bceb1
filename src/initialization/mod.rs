//! Application initialization.
//!
//! Process-wide setup that has to happen once, before the server starts.
//! The database pool is created by `storage::init_db_pool`.

mod logger;

pub use logger::init_logger_with;
