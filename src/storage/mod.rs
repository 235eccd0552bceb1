// storage/mod.rs
// Database operations module

pub mod countries;
pub mod migrations;
pub mod pool;
pub mod visits;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use countries::find_country_code;
pub use migrations::run_migrations;
pub use pool::{init_db_pool, init_db_pool_with_url};
pub use visits::{record_visit, visited_country_codes};
