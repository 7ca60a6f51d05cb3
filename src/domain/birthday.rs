//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for birthday dates.
///
/// This ensures that birthdays are parsed and validated at construction
/// time. The accepted text format is `DD.MM.YYYY`; the wrapped value is a
/// real calendar date, so impossible dates like `31.02.2000` are rejected.
/// There is no plausibility check on the year.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::parse("24.04.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.04.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// The `strftime` pattern behind the `DD.MM.YYYY` wire format.
    pub(crate) const FORMAT: &'static str = "%d.%m.%Y";

    /// Parse a Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not in the
    /// expected format or does not name a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(text, Self::FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the wrapped calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month of the birthday (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month of the birthday (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as DD.MM.YYYY text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from DD.MM.YYYY text with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - always zero-padded DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
