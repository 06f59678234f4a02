//! Error types for the contact assistant.
//!
//! This module defines the application error types using `thiserror`.
//! Domain validation errors live in [`crate::domain`] and are wrapped by
//! [`CommandError`] at the command boundary.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by command handlers.
///
/// Each variant renders as the exact one-line reply shown to the user;
/// dispatch converts errors to text, so none propagate past the command
/// boundary.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong argument count for a command
    #[error("Invalid command format. Please use: {0}")]
    Usage(&'static str),

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound,

    /// The targeted phone number does not exist on the contact
    #[error("Phone number not found for this contact.")]
    PhoneNotFound,

    /// A name, phone, or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the address book file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file exists but could not be read
    #[error("Failed to read address book from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file could not be written
    #[error("Failed to write address book to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file contents are not a valid address book
    #[error("Failed to parse address book file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The in-memory book could not be serialized
    #[error("Failed to serialize address book: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
