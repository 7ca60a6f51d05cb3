//! Command-line parsing for the interactive session.
//!
//! A raw input line is split on whitespace; the first token selects the
//! command and the rest are its arguments. Only the command keyword is
//! case-insensitive, argument text is taken verbatim so contact names keep
//! their spelling.

use crate::error::{CommandError, CommandResult};

const USAGE_ADD: &str = "add <name> <phone>";
const USAGE_CHANGE: &str = "change <name> <old phone> <new phone>";
const USAGE_PHONE: &str = "phone <name>";
const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";
const USAGE_DELETE: &str = "delete <name>";

/// A fully parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greet the user.
    Hello,
    /// Add a phone to a contact, creating the contact if needed.
    Add { name: String, phone: String },
    /// Replace one of a contact's phone numbers.
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// Show a single contact.
    Phone { name: String },
    /// List every contact.
    All,
    /// Set a contact's birthday.
    AddBirthday { name: String, date: String },
    /// Show a contact's birthday.
    ShowBirthday { name: String },
    /// List birthdays coming up within the configured window.
    Birthdays,
    /// Remove a contact entirely.
    Delete { name: String },
    /// End the session (`close` or `exit`).
    Exit,
    /// Anything that is not a known keyword. Carries the raw token.
    Unknown(String),
}

/// Parse one input line into a command.
///
/// Returns `Ok(None)` for blank input. Unrecognized keywords parse
/// successfully as [`Command::Unknown`] so the session can answer them
/// without treating them as failures.
///
/// # Errors
///
/// Returns `CommandError::MissingArguments` when a known command has fewer
/// arguments than it needs. Surplus arguments are ignored.
pub fn parse(line: &str) -> CommandResult<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => Command::Add {
            name: next_argument(&mut tokens, USAGE_ADD)?,
            phone: next_argument(&mut tokens, USAGE_ADD)?,
        },
        "change" => Command::Change {
            name: next_argument(&mut tokens, USAGE_CHANGE)?,
            old_phone: next_argument(&mut tokens, USAGE_CHANGE)?,
            new_phone: next_argument(&mut tokens, USAGE_CHANGE)?,
        },
        "phone" => Command::Phone {
            name: next_argument(&mut tokens, USAGE_PHONE)?,
        },
        "all" => Command::All,
        "add-birthday" => Command::AddBirthday {
            name: next_argument(&mut tokens, USAGE_ADD_BIRTHDAY)?,
            date: next_argument(&mut tokens, USAGE_ADD_BIRTHDAY)?,
        },
        "show-birthday" => Command::ShowBirthday {
            name: next_argument(&mut tokens, USAGE_SHOW_BIRTHDAY)?,
        },
        "birthdays" => Command::Birthdays,
        "delete" => Command::Delete {
            name: next_argument(&mut tokens, USAGE_DELETE)?,
        },
        "close" | "exit" => Command::Exit,
        _ => Command::Unknown(keyword.to_string()),
    };

    Ok(Some(command))
}

fn next_argument<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> CommandResult<String> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(CommandError::MissingArguments { usage })
}
