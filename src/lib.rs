//! Console contact-management assistant.
//!
//! A line-oriented assistant bot that keeps contacts (validated name,
//! 10-digit phone numbers, `DD.MM.YYYY` birthday) in an insertion-ordered
//! address book, persists the book to a JSON file between runs, and
//! answers a fixed set of commands, including a query for birthdays in
//! the upcoming week with weekend-aware congratulation dates.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone number, birthday)
//! - **models**: the contact record aggregate
//! - **book**: the insertion-ordered store and the birthday-window query
//! - **commands**: line parsing, dispatch, and per-command handlers
//! - **storage**: whole-store JSON persistence
//! - **config**: environment-driven configuration
//! - **error**: application error types
//! - **repl**: the interactive loop wiring it all together

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::{AddressBook, BirthdayReminder};
pub use commands::{dispatch, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::Record;
