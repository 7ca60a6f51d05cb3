//! Command handlers for the interactive session.
//!
//! Each handler applies one command to the address book and produces the
//! reply text. Failures surface as [`CommandError`] values; turning those
//! into user-facing sentences is the session loop's job.

use crate::book::AddressBook;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repl::command::Command;
use chrono::Local;

pub(crate) const GOODBYE: &str = "Good bye!";

/// Apply `command` to the book and return the reply text.
///
/// `window_days` sets how far ahead the `birthdays` command looks.
///
/// # Errors
///
/// Propagates validation and lookup failures from the underlying
/// operations.
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    window_days: u32,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => show_contact(book, &name),
        Command::All => Ok(list_contacts(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(list_upcoming_birthdays(book, window_days)),
        Command::Delete { name } => delete_contact(book, &name),
        Command::Exit => Ok(GOODBYE.to_string()),
        Command::Unknown(keyword) => {
            tracing::debug!("Unknown command keyword: {}", keyword);
            Ok("Invalid command.".to_string())
        }
    }
}

/// Add a phone to the named contact, creating the contact on first use.
///
/// A brand-new record is inserted only after both the name and the phone
/// validate, so a rejected phone never leaves an empty contact behind.
fn add_contact(book: &mut AddressBook, name: String, phone: &str) -> CommandResult<String> {
    if let Some(record) = book.find_mut(&name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.upsert(record);
    Ok("Contact added.".to_string())
}

fn change_phone(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

fn show_contact(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(record.to_string())
}

fn list_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        "There are no contacts in the address book.".to_string()
    } else {
        book.to_string()
    }
}

fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not set.".to_string(),
    })
}

fn list_upcoming_birthdays(book: &AddressBook, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays_from(Local::now().date_naive(), window_days);
    if upcoming.is_empty() {
        "No upcoming birthdays.".to_string()
    } else {
        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    book.remove(name)?;
    Ok("Contact deleted.".to_string())
}
