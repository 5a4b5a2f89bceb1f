//! Configuration management for the rolodex application.
//!
//! This module handles loading configuration from environment variables,
//! with `.env` file support and defaults for every knob.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the contact store, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Configuration for the rolodex application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON contact store
    pub contacts_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_CONTACTS_FILE`: path of the contact store (default: "contacts.json")
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let contacts_file =
            env::var("ROLODEX_CONTACTS_FILE").unwrap_or_else(|_| DEFAULT_CONTACTS_FILE.to_string());

        if contacts_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ROLODEX_CONTACTS_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: "warn".to_string(),
        }
    }
}
