//! End-to-end tests for scripted command sessions.
//!
//! These tests drive whole conversations through `dispatch`, asserting
//! the exact reply lines a user would see.

use contact_assistant::{dispatch, AddressBook, Reply};

/// Dispatch one line and expect a printable reply.
fn reply(book: &mut AddressBook, line: &str) -> String {
    match dispatch(line, book) {
        Some(Reply::Message(message)) => message,
        other => panic!("expected a message for {:?}, got {:?}", line, other),
    }
}

#[test]
fn test_full_contact_session() {
    let mut book = AddressBook::new();

    assert_eq!(reply(&mut book, "hello"), "How can I help you?");
    assert_eq!(reply(&mut book, "all"), "No contacts saved yet.");

    assert_eq!(reply(&mut book, "add John 1234567890"), "Contact added.");
    assert_eq!(reply(&mut book, "add Jane 0987654321"), "Contact added.");
    assert_eq!(reply(&mut book, "phone John"), "1234567890");

    assert_eq!(
        reply(&mut book, "add John 5555555555"),
        "Contact with name 'John' already exists."
    );

    assert_eq!(reply(&mut book, "change John 1112223333"), "Contact updated.");
    assert_eq!(reply(&mut book, "phone John"), "1112223333");

    assert_eq!(
        reply(&mut book, "add-birthday John 13.06.1990"),
        "Birthday 13.06.1990 added to contact John"
    );
    assert_eq!(
        reply(&mut book, "show-birthday John"),
        "Date of birthday 13.06.1990"
    );
    assert_eq!(
        reply(&mut book, "show-birthday Jane"),
        "Birthday not found for this contact."
    );

    assert_eq!(
        reply(&mut book, "all"),
        "Contact name: John, phones: 1112223333, birthday: 13.06.1990\n\
         Contact name: Jane, phones: 0987654321, birthday: "
    );

    assert_eq!(dispatch("exit", &mut book), Some(Reply::Exit));
}

#[test]
fn test_usage_messages() {
    let mut book = AddressBook::new();

    assert_eq!(
        reply(&mut book, "add John"),
        "Invalid command format. Please use: add [name] [phone]"
    );
    assert_eq!(
        reply(&mut book, "change John"),
        "Invalid command format. Please use: change [name] [new_phone]"
    );
    assert_eq!(
        reply(&mut book, "phone"),
        "Invalid command format. Please use: phone [name]"
    );
    assert_eq!(
        reply(&mut book, "add-birthday John"),
        "Invalid command format. Please use: add-birthday [name] [DD.MM.YYYY]"
    );
    assert_eq!(
        reply(&mut book, "show-birthday"),
        "Invalid command format. Please use: show-birthday [name]"
    );
    assert_eq!(
        reply(&mut book, "birthdays now"),
        "Invalid command format. Please use: birthdays"
    );
}

#[test]
fn test_validation_failures_are_replies_and_noops() {
    let mut book = AddressBook::new();

    assert_eq!(
        reply(&mut book, "add John 12345"),
        "Invalid phone number '12345': must contain exactly 10 digits"
    );
    assert_eq!(reply(&mut book, "all"), "No contacts saved yet.");

    reply(&mut book, "add John 1234567890");
    assert_eq!(
        reply(&mut book, "change John phone"),
        "Invalid phone number 'phone': must contain exactly 10 digits"
    );
    assert_eq!(reply(&mut book, "phone John"), "1234567890");

    assert_eq!(
        reply(&mut book, "add-birthday John 31.04.2020"),
        "Invalid date '31.04.2020': use DD.MM.YYYY"
    );
    assert_eq!(
        reply(&mut book, "show-birthday John"),
        "Birthday not found for this contact."
    );
}

#[test]
fn test_missing_contact_replies() {
    let mut book = AddressBook::new();

    assert_eq!(reply(&mut book, "phone Ghost"), "Contact not found.");
    assert_eq!(
        reply(&mut book, "change Ghost 1234567890"),
        "Contact not found."
    );
    assert_eq!(
        reply(&mut book, "add-birthday Ghost 13.06.1990"),
        "Contact not found."
    );
    assert_eq!(reply(&mut book, "show-birthday Ghost"), "Contact not found.");
}

#[test]
fn test_unknown_and_blank_input() {
    let mut book = AddressBook::new();

    assert_eq!(reply(&mut book, "remind John tomorrow"), "Invalid command.");
    assert_eq!(dispatch("", &mut book), None);
    assert_eq!(dispatch("   \t ", &mut book), None);
}

#[test]
fn test_birthdays_empty_book() {
    let mut book = AddressBook::new();
    assert_eq!(reply(&mut book, "birthdays"), "No upcoming birthdays found.");
}
