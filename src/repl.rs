//! Interactive read-evaluate-print loop.
//!
//! Single-threaded and synchronous: each command runs to completion
//! before the next line is read. The loop owns the session lifecycle:
//! load the book, serve commands, save the book on the way out.

use crate::book::AddressBook;
use crate::commands::{self, Reply};
use crate::config::Config;
use crate::storage;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the assistant until the user closes the session.
///
/// The book is loaded from `config.storage_path` (missing file means an
/// empty book) and saved back when the user types `close`/`exit` or the
/// input stream ends.
pub fn run(config: &Config) -> Result<()> {
    let mut book = storage::load(&config.storage_path)?;
    info!(records = book.len(), "session started");

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an explicit exit.
            break;
        }

        match commands::dispatch(line.trim(), &mut book) {
            Some(Reply::Message(reply)) => println!("{}", reply),
            Some(Reply::Exit) => break,
            None => continue,
        }
    }

    storage::save(&book, &config.storage_path)?;
    println!("Good bye!");
    info!("session closed");
    Ok(())
}
