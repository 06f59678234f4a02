//! Handlers for the contact commands: `add`, `change`, `phone`, `all`.

use crate::book::AddressBook;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

/// `add [name] [phone]`: create a contact with one phone number.
///
/// An existing name is reported and left untouched. An invalid phone
/// rejects the whole add; no record is created.
pub(super) fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone] => (*name, *phone),
        _ => return Err(CommandError::Usage("add [name] [phone]")),
    };

    if book.find(name).is_some() {
        return Ok(format!("Contact with name '{}' already exists.", name));
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change [name] [new_phone]`: replace the contact's first phone number
/// in place.
pub(super) fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, new_phone) = match args {
        [name, new_phone] => (*name, *new_phone),
        _ => return Err(CommandError::Usage("change [name] [new_phone]")),
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    let old_phone = match record.phones().first() {
        Some(phone) => phone.as_str().to_string(),
        None => return Err(CommandError::PhoneNotFound),
    };
    if !record.edit_phone(&old_phone, new_phone)? {
        return Err(CommandError::PhoneNotFound);
    }
    Ok("Contact updated.".to_string())
}

/// `phone [name]`: list the contact's phone numbers.
pub(super) fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => *name,
        _ => return Err(CommandError::Usage("phone [name]")),
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    if record.phones().is_empty() {
        return Ok("No phone numbers found for this contact.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

/// `all`: one description line per contact, in insertion order.
pub(super) fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved yet.".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
