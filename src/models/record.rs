//! Contact record: one person's name, phone numbers, and birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// A record is created with a name only; phone numbers and the birthday are
/// attached afterwards through the mutating operations. Phones keep their
/// insertion order and duplicates are permitted unless replaced via
/// [`edit_phone`](Record::edit_phone). At most one birthday is stored;
/// setting it again overwrites the previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record holding only a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name. Its text is the record's key in the address book.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// All phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate `phone` and append it to the phone list.
    ///
    /// Duplicates are allowed; the list keeps insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not exactly
    /// ten digits. The record is not mutated on failure.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Find the first phone entry equal to `phone`.
    ///
    /// Returns `None` when no entry matches; this is a lookup, not an error.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the first phone entry equal to `old` with `new`.
    ///
    /// The replacement happens in place, preserving the entry's position;
    /// every other entry is untouched. A failed edit mutates nothing.
    ///
    /// # Errors
    ///
    /// - `CommandError::Validation` if `new` is not a valid phone number
    /// - `CommandError::PhoneNotFound` if `old` is not among the phones
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let new = Phone::new(new)?;
        let position = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;
        self.phones[position] = new;
        Ok(())
    }

    /// Remove every phone entry equal to `phone`.
    ///
    /// Removing a number that is not present is not an error; the call is
    /// idempotent.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Parse `text` as a `DD.MM.YYYY` date and set it as the birthday,
    /// overwriting any previously set value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on malformed text; the
    /// previous birthday (if any) is kept.
    pub fn set_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }
}

// Display support - the one-line rendering used by the `phone` and `all` commands
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "not set"),
        }
    }
}
