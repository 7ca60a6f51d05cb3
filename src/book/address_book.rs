//! The address book: an insertion-ordered collection of contact records.

use crate::book::upcoming::{self, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::fmt;

/// An in-memory collection of contact records, keyed by name text.
///
/// Names are unique: inserting a record under an existing name replaces the
/// previous record while keeping its original position. Iteration, the
/// rendered listing, and the upcoming-birthday query all follow insertion
/// order.
///
/// The book exclusively owns its records; lookups hand out borrows only.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create a new empty AddressBook.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert a record, or replace the record already stored under the same
    /// name.
    ///
    /// Replacement is silent and keeps the entry's original insertion
    /// position.
    pub fn upsert(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name match.
    ///
    /// Returns `None` when no contact has that name; this is a lookup, not
    /// an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Look up a record by exact name match, for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactNotFound` if no contact has that name.
    pub fn remove(&mut self, name: &str) -> CommandResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within the default seven-day
    /// window starting today.
    ///
    /// Equivalent to [`upcoming_birthdays_from`](Self::upcoming_birthdays_from)
    /// with the current local date and
    /// [`DEFAULT_BIRTHDAY_WINDOW_DAYS`].
    pub fn upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }

    /// Contacts whose next birthday falls within `window_days` days of
    /// `reference` (inclusive on both ends: a birthday today counts).
    ///
    /// For every contact with a birthday set, the next occurrence of its
    /// month/day on or after `reference` is computed; occurrences that have
    /// already passed this year wrap into the following year. Included
    /// entries carry the weekday-adjusted congratulation date (weekend
    /// occurrences shift to the following Monday). Results are in the
    /// book's insertion order.
    pub fn upcoming_birthdays_from(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        tracing::debug!(
            "Upcoming birthday scan: {} contacts, reference {}, window {} days",
            self.records.len(),
            reference,
            window_days
        );

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = upcoming::next_occurrence(birthday, reference)?;
                let gap = (occurrence - reference).num_days();
                if gap <= i64::from(window_days) {
                    Some(UpcomingBirthday {
                        name: record.name().clone(),
                        congratulation_date: upcoming::congratulation_date(occurrence),
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

// Display support - the full listing printed by the `all` command
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&text)
    }
}
