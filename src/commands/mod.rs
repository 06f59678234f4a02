//! Command parsing and dispatch.
//!
//! Each line of user input is split on whitespace into a command keyword
//! plus arguments; the keyword (matched case-insensitively) selects a
//! handler. Handler errors never escape this layer: every
//! [`crate::error::CommandError`] is rendered as its one-line reply text.

mod birthdays;
mod contacts;

use crate::book::AddressBook;
use crate::error::CommandResult;
use tracing::debug;

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A response to print for the user.
    Message(String),

    /// The user asked to close the session.
    Exit,
}

/// Parse and execute a single input line against the book.
///
/// Returns `None` for blank input. Unknown keywords yield the literal
/// `Invalid command.` reply.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Option<Reply> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();

    debug!(command = %keyword, args = args.len(), "dispatching command");

    let result: CommandResult<String> = match keyword.as_str() {
        "hello" => Ok("How can I help you?".to_string()),
        "add" => contacts::add_contact(&args, book),
        "change" => contacts::change_contact(&args, book),
        "phone" => contacts::show_phone(&args, book),
        "all" => Ok(contacts::show_all(book)),
        "add-birthday" => birthdays::add_birthday(&args, book),
        "show-birthday" => birthdays::show_birthday(&args, book),
        "birthdays" => birthdays::upcoming_birthdays(&args, book),
        "close" | "exit" => return Some(Reply::Exit),
        _ => Ok("Invalid command.".to_string()),
    };

    Some(Reply::Message(result.unwrap_or_else(|e| e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(book: &mut AddressBook, line: &str) -> String {
        match dispatch(line, book) {
            Some(Reply::Message(message)) => message,
            other => panic!("expected a message for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_hello() {
        let mut book = AddressBook::new();
        assert_eq!(reply(&mut book, "hello"), "How can I help you?");
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let mut book = AddressBook::new();
        assert_eq!(reply(&mut book, "HELLO"), "How can I help you?");
        assert_eq!(reply(&mut book, "Add John 1234567890"), "Contact added.");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut book = AddressBook::new();
        reply(&mut book, "add John 1234567890");
        assert_eq!(reply(&mut book, "phone john"), "Contact not found.");
    }

    #[test]
    fn test_unknown_keyword() {
        let mut book = AddressBook::new();
        assert_eq!(reply(&mut book, "frobnicate"), "Invalid command.");
    }

    #[test]
    fn test_blank_input_is_skipped() {
        let mut book = AddressBook::new();
        assert_eq!(dispatch("", &mut book), None);
        assert_eq!(dispatch("   ", &mut book), None);
    }

    #[test]
    fn test_close_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(dispatch("close", &mut book), Some(Reply::Exit));
        assert_eq!(dispatch("exit", &mut book), Some(Reply::Exit));
        assert_eq!(dispatch("EXIT", &mut book), Some(Reply::Exit));
    }

    #[test]
    fn test_errors_become_replies() {
        let mut book = AddressBook::new();
        assert_eq!(
            reply(&mut book, "add John"),
            "Invalid command format. Please use: add [name] [phone]"
        );
        assert_eq!(reply(&mut book, "phone John"), "Contact not found.");
    }
}
