//! InMemoryFile - a record file held in memory, for testing and embedding.

use std::sync::{Arc, RwLock};

use super::{codec, PersistError, RecordFile};
use crate::record::Student;

const LOCATION: &str = "memory";

/// In-memory record file holding the encoded JSON bytes.
///
/// Clone-friendly via Arc; clones share the same contents.
#[derive(Clone, Default)]
pub struct InMemoryFile {
    contents: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryFile {
    /// Create an empty file (nothing persisted yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file with the given raw contents.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(bytes.into()))),
        }
    }

    /// The raw persisted bytes, if anything has been written.
    pub fn contents(&self) -> Result<Option<Vec<u8>>, PersistError> {
        let contents = self.contents.read().map_err(|_| poisoned())?;
        Ok(contents.clone())
    }
}

fn poisoned() -> PersistError {
    PersistError::Io {
        path: LOCATION.to_string(),
        message: "lock poisoned".to_string(),
    }
}

impl RecordFile for InMemoryFile {
    fn read(&self) -> Result<Option<Vec<Student>>, PersistError> {
        let contents = self.contents.read().map_err(|_| poisoned())?;
        match contents.as_deref() {
            Some(bytes) => codec::decode(bytes)
                .map(Some)
                .map_err(|message| PersistError::Format {
                    path: LOCATION.to_string(),
                    message,
                }),
            None => Ok(None),
        }
    }

    fn write(&self, students: &[Student]) -> Result<(), PersistError> {
        let bytes = codec::encode(students).map_err(|message| PersistError::Format {
            path: LOCATION.to_string(),
            message,
        })?;
        let mut contents = self.contents.write().map_err(|_| poisoned())?;
        *contents = Some(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_string()
    }
}
