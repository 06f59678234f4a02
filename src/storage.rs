//! Whole-store persistence of the address book.
//!
//! The book is serialized as a single JSON document, read in one blocking
//! call at startup and written back in one blocking call on exit. The file
//! path always arrives as an argument. A missing file on load is not an
//! error: the assistant starts with an empty book on first run.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load the address book from `path`.
///
/// Returns an empty book when the file does not exist yet.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no address book file, starting empty");
            return Ok(AddressBook::new());
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let book: AddressBook = serde_json::from_str(&contents).map_err(|source| {
        StorageError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), records = book.len(), "address book loaded");
    Ok(book)
}

/// Save the whole address book to `path`, replacing any previous contents.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), records = book.len(), "address book saved");
    Ok(())
}
