//! Error types for the rolodex assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a user command.
///
/// These are the only failure kinds the command layer produces. All of them
/// are synchronous and non-retryable; the REPL translates each kind into one
/// fixed user-facing sentence instead of letting it terminate the process.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A name, phone number, or birthday failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact with the given name exists in the address book
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact exists but does not hold the given phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// Too few arguments were supplied to a command
    #[error("Not enough arguments, usage: {usage}")]
    MissingArguments {
        /// Short usage line for the command, e.g. `add <name> <phone>`
        usage: &'static str,
    },
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

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
