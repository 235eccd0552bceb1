//! Configuration types and CLI options.
//!
//! Every option can be given as a flag or through the environment variable
//! named next to it, so a `.env` file is enough to run the app.

use clap::{Parser, ValueEnum};
use url::Url;

use crate::config::constants::{
    DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_IDLE_TIMEOUT_SECS,
    DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
};
use crate::error_handling::InitializationError;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server configuration.
///
/// # Examples
///
/// ```bash
/// # Everything from the environment (or a .env file)
/// PORT=3000 DB_USER=postgres DB_PASS=secret DB_NAME=world visited_countries
///
/// # Point at any database sqlx understands
/// visited_countries --database-url postgres://app@localhost/world --run-migrations
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "visited_countries",
    about = "Records the countries you have visited and shows the list."
)]
pub struct Config {
    /// HTTP listen port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database port (the host is always localhost)
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_DB_PORT)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = DEFAULT_DB_USER)]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASS", default_value = "", hide_env_values = true)]
    pub db_pass: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DB_NAME)]
    pub db_name: String,

    /// Full database URL; takes precedence over the DB_* parts
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds before an idle pooled connection is closed
    #[arg(long, env = "DB_IDLE_TIMEOUT_SECS", default_value_t = DEFAULT_IDLE_TIMEOUT_SECS)]
    pub idle_timeout_secs: u64,

    /// Create the tables from the bundled migrations on startup
    #[arg(long, env = "RUN_MIGRATIONS")]
    pub run_migrations: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_port: DEFAULT_DB_PORT,
            db_user: DEFAULT_DB_USER.to_string(),
            db_pass: String::new(),
            db_name: DEFAULT_DB_NAME.to_string(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT_SECS,
            run_migrations: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Returns the URL used to open the connection pool.
    ///
    /// `database_url` wins when set. Otherwise a PostgreSQL URL is assembled
    /// from the `db_*` fields against [`DB_HOST`], with the user and password
    /// percent-encoded.
    pub fn connection_url(&self) -> Result<String, InitializationError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let invalid = |part: &str| InitializationError::InvalidDatabaseUrl(part.to_string());

        let mut url = Url::parse(&format!("postgres://{DB_HOST}"))
            .map_err(|e| InitializationError::InvalidDatabaseUrl(e.to_string()))?;
        url.set_port(Some(self.db_port))
            .map_err(|_| invalid("port"))?;
        url.set_username(&self.db_user)
            .map_err(|_| invalid("user"))?;
        if !self.db_pass.is_empty() {
            url.set_password(Some(&self.db_pass))
                .map_err(|_| invalid("password"))?;
        }
        url.set_path(&self.db_name);

        Ok(url.into())
    }
}
