mod config;
mod persist;
mod record;
mod store;

pub use config::{Config, ConfigError, DEFAULT_DATA_FILE};
pub use persist::{InMemoryFile, JsonFile, LoadOutcome, PersistError, RecordFile};
pub use record::{Grade, PassStatus, Student, MAX_SCORE, MIN_SCORE};
pub use store::{DuplicateCoursePolicy, RecordStore, StoreConfig, StoreError};
