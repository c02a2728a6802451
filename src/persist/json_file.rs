//! JsonFile - path-backed record file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{codec, PersistError, RecordFile};
use crate::record::Student;

/// A JSON record file on disk.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so a failed save never leaves a half-written file behind.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.location(),
            message: err.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl RecordFile for JsonFile {
    fn read(&self) -> Result<Option<Vec<Student>>, PersistError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let students = codec::decode(&bytes).map_err(|message| PersistError::Format {
            path: self.location(),
            message,
        })?;
        Ok(Some(students))
    }

    fn write(&self, students: &[Student]) -> Result<(), PersistError> {
        let bytes = codec::encode(students).map_err(|message| PersistError::Format {
            path: self.location(),
            message,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.temp_path();
        debug!(tmp = %tmp.display(), bytes = bytes.len(), "writing record file");
        let written = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
