//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual pattern birthdays are parsed from and rendered to.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthday dates.
///
/// Parsed from the literal `DD.MM.YYYY` pattern at construction time.
/// Stores the calendar date rather than the source text, so impossible
/// dates (month 13, Feb 30) are rejected up front.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("13.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "13.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the text matches
    /// the pattern and denotes a real calendar date.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Next calendar occurrence of this birthday on or after `reference`.
    ///
    /// The month and day are projected into `reference`'s year; when that
    /// date has already passed, the occurrence wraps forward exactly one
    /// year. A Feb 29 birthday falls on Mar 1 in years without a leap day.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(reference.year());
        if this_year < reference {
            self.occurrence_in(reference.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            // Only reachable for Feb 29 in a year without one.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
        })
    }
}

// Serde support - serialize as the canonical DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
