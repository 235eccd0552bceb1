//! Application configuration and constants.
//!
//! This module provides:
//! - Defaults and fixed user-facing texts
//! - CLI/environment option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
