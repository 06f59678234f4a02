//! The address book store and the upcoming-birthday query.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Upcoming window in days, inclusive on both ends.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The in-memory collection of contact records, keyed by name text.
///
/// Wraps an insertion-ordered map; iterating records follows the order in
/// which they were added, and the raw map is never exposed. Persisted as
/// the ordered sequence of records, so the name/key invariant and the
/// insertion order survive a save/load round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

/// A single hit from the upcoming-birthday query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// Name of the contact whose birthday is coming up.
    pub name: String,

    /// The day to greet them: the birthday's next occurrence, shifted to
    /// the following Monday when it lands on a weekend.
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name text.
    ///
    /// An existing record under the same name is overwritten; rejecting
    /// duplicate names is the command layer's responsibility.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name. No partial or case-insensitive
    /// matching.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name, preserving the order of the remaining
    /// entries. Returns whether a record was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.shift_remove(name).is_some()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday falls within the upcoming window.
    ///
    /// For every record with a birthday set, the next occurrence on or
    /// after `reference` is computed; the record is included when that
    /// occurrence is at most seven days away. Weekend
    /// occurrences shift the congratulation date to the following Monday.
    /// Result order follows the store's insertion order.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<BirthdayReminder> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let birthday = match record.birthday() {
                Some(birthday) => birthday,
                None => continue,
            };
            let occurrence = birthday.next_occurrence(reference);
            let days_until = (occurrence - reference).num_days();
            if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                continue;
            }
            upcoming.push(BirthdayReminder {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation_date(occurrence),
            });
        }
        upcoming
    }
}

/// Shift a weekend occurrence to the following Monday; weekdays pass
/// through unchanged.
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}
