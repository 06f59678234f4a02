//! Contact record aggregating a name, phone numbers, and a birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact stored in the address book.
///
/// Owns one validated name, an ordered list of phone numbers (duplicates
/// permitted), and an optional birthday. Mutators return explicit results
/// instead of swallowing validation failures; the command layer decides
/// what to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phone numbers, in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// On error the phone list is unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone whose canonical text equals `phone`.
    ///
    /// Returns whether a match was found; absent numbers are a no-op.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with a validated `new`
    /// value, preserving its position.
    ///
    /// Returns `Ok(false)` without mutating when no phone matches `old`.
    /// When `new` fails validation the old value is retained.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let index = match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => index,
            None => return Ok(false),
        };
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(true)
    }

    /// Find a stored phone by its canonical text.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and set the birthday.
    ///
    /// On error any existing birthday is untouched.
    pub fn set_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.map(|b| b.to_string()).unwrap_or_default();
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
