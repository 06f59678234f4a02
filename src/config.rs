//! Configuration management for the contact assistant.
//!
//! This module handles loading configuration from environment variables.
//! The storage path is carried in the config and handed explicitly to the
//! persistence layer; there is no module-level path constant.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default file the address book is persisted to.
const DEFAULT_STORAGE_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book file, loaded at startup and saved on exit
    pub storage_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: address book file path (default: "addressbook.json")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ADDRESS_BOOK_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: "error".to_string(),
        }
    }
}
