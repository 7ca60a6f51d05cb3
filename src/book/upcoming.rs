//! Upcoming-birthday date arithmetic.
//!
//! Pure calendar functions behind the address book's upcoming-birthday
//! query: computing the next occurrence of a birthday relative to a
//! reference date and shifting weekend occurrences to the following Monday.

use crate::domain::{Birthday, Name};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Default lookahead window for the upcoming-birthday query, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// One entry of the upcoming-birthday query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact to congratulate.
    pub name: Name,

    /// The date to congratulate on. Birthdays falling on a Saturday or
    /// Sunday are shifted to the following Monday, so this can be up to
    /// two days after the actual occurrence.
    pub congratulation_date: NaiveDate,
}

// Display support - the `birthdays` command prints one of these per line
impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(Birthday::FORMAT)
        )
    }
}

/// The birthday's occurrence in `year`.
///
/// Only Feb 29 can be missing from a given year; it resolves to Mar 1.
fn occurrence_in_year(birthday: Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// The next occurrence of `birthday` on or after `reference`.
///
/// If this year's occurrence has already passed, the result wraps into the
/// following year, so the gap to the reference date is never negative.
/// `None` only for dates outside chrono's representable range.
pub(crate) fn next_occurrence(birthday: Birthday, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, reference.year())?;
    if this_year >= reference {
        Some(this_year)
    } else {
        occurrence_in_year(birthday, reference.year() + 1)
    }
}

/// The date a birthday occurrence is congratulated on.
///
/// Weekend occurrences shift forward to the following Monday; weekday
/// occurrences are returned unchanged.
pub(crate) fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}
