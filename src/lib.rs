//! Rolodex - a command-line assistant bot for keeping a personal address book.
//!
//! The bot holds contact records (validated names, phone numbers, and
//! birthdays) in an in-memory address book and drives them through a small
//! interactive command loop on stdin/stdout.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, and birthdays
//! - **models**: The contact record built from domain values
//! - **book**: The insertion-ordered address book and birthday scheduling
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repl**: Command parsing, handlers, and the interactive session loop

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use config::Config;
pub use error::{CommandError, ConfigError};
pub use models::Record;
pub use repl::Command;
