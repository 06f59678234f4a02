//! Handlers for the birthday commands: `add-birthday`, `show-birthday`,
//! `birthdays`.

use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use chrono::Local;

/// `add-birthday [name] [DD.MM.YYYY]`: set a birthday on an existing
/// contact. A date that fails to parse is surfaced as the reply; the
/// success line is only printed when the birthday was actually stored.
pub(super) fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, date) = match args {
        [name, date] => (*name, *date),
        _ => return Err(CommandError::Usage("add-birthday [name] [DD.MM.YYYY]")),
    };

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.set_birthday(date)?;
    Ok(format!("Birthday {} added to contact {}", date, name))
}

/// `show-birthday [name]`: show the contact's birthday.
pub(super) fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => *name,
        _ => return Err(CommandError::Usage("show-birthday [name]")),
    };

    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("Date of birthday {}", birthday)),
        None => Ok("Birthday not found for this contact.".to_string()),
    }
}

/// `birthdays`: contacts with a birthday in the next seven days, one
/// `name: congratulation date` line per hit.
pub(super) fn upcoming_birthdays(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    if !args.is_empty() {
        return Err(CommandError::Usage("birthdays"));
    }

    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays found.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|r| format!("{}: {}", r.name, r.congratulation_date.format("%Y.%m.%d")))
        .collect::<Vec<_>>()
        .join("\n"))
}
