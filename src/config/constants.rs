//! Configuration constants.
//!
//! Defaults for the HTTP listener and the store connection, plus the fixed
//! texts shown to the user.

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 3000;

// Store connection defaults
/// The store always runs on the same machine as the app
pub const DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "world";

/// Upper bound on pooled store connections shared by all requests
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;
/// Idle pooled connections are closed after this many seconds
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

// Notification texts
pub const MISSING_INPUT_MESSAGE: &str = "Please enter a country name!";
pub const COUNTRY_NOT_FOUND_MESSAGE: &str = "Country not found, try again.";

// Fixed bodies for 500 responses; internal details never reach the client
pub const DISPLAY_FAILURE_BODY: &str = "Internal Server Error";
pub const ADD_VISIT_FAILURE_BODY: &str = "Server Error";
