//! Persistence - reading and writing the whole student collection.
//!
//! A `RecordFile` is the storage target a `RecordStore` loads from and saves
//! to. The collection is written as a single JSON document: an array of
//! students, each with its nested grades. Derived fields are never written.
//!
//! ## Example
//!
//! ```ignore
//! use gradebook::{JsonFile, RecordStore};
//!
//! let file = JsonFile::new("students.json");
//! let mut store = RecordStore::default();
//! store.load_from(&file)?;
//! store.add_student(1, "Ada", "Lovelace")?;
//! store.save_to(&file)?;
//! ```

mod codec;
mod in_memory;
mod json_file;

use std::fmt;

use crate::record::Student;

/// Storage target for the persisted student collection.
pub trait RecordFile {
    /// Read every persisted student. Returns `Ok(None)` if nothing has been
    /// persisted yet.
    fn read(&self) -> Result<Option<Vec<Student>>, PersistError>;

    /// Replace the persisted collection with `students`.
    fn write(&self, students: &[Student]) -> Result<(), PersistError>;

    /// Human-readable location, used in logs and errors.
    fn location(&self) -> String;
}

/// Result of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and this many students were loaded.
    Loaded(usize),
    /// There was no file to load. Not a failure.
    Absent,
}

/// Error type for persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The file could not be read or written.
    Io { path: String, message: String },
    /// The file was read but its content is not a valid student collection.
    Format { path: String, message: String },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io { path, message } => {
                write!(f, "i/o error on {}: {}", path, message)
            }
            PersistError::Format { path, message } => {
                write!(f, "invalid record file {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for PersistError {}

pub use in_memory::InMemoryFile;
pub use json_file::JsonFile;
