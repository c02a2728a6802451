//! Record store - the in-memory authority over all students and grades.
//!
//! The store exclusively owns every `Student` and `Grade`. Queries hand out
//! shared references; mutation only happens through the store's operations,
//! and a failed operation never leaves a partial change behind.

mod record_store;

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::persist::PersistError;

pub use record_store::RecordStore;

/// What `add_grade` does when the student already has a grade for the same
/// course code (compared case-insensitively).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCoursePolicy {
    /// Append the grade anyway. Deletion removes the first match.
    #[default]
    Allow,
    /// Refuse with `StoreError::DuplicateCourse`.
    Reject,
}

/// Behaviour switches for a `RecordStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub duplicate_courses: DuplicateCoursePolicy,
    /// Re-check that scores lie in 0..=100 before storing a grade.
    #[serde(default = "default_validate_scores")]
    pub validate_scores: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            duplicate_courses: DuplicateCoursePolicy::default(),
            validate_scores: default_validate_scores(),
        }
    }
}

fn default_validate_scores() -> bool {
    true
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A student with this id already exists.
    Conflict { id: i32 },
    /// No student with this id.
    StudentNotFound { id: i32 },
    /// The student has no grade for this course code.
    GradeNotFound { student_id: i32, course_code: String },
    /// The student already has a grade for this course code.
    DuplicateCourse { student_id: i32, course_code: String },
    /// A score outside 0..=100.
    InvalidScore { field: &'static str, value: i32 },
    /// Loading or saving failed.
    Persist(PersistError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Conflict { id } => write!(f, "student {} already exists", id),
            StoreError::StudentNotFound { id } => write!(f, "student {} not found", id),
            StoreError::GradeNotFound {
                student_id,
                course_code,
            } => write!(
                f,
                "student {} has no grade for course {}",
                student_id, course_code
            ),
            StoreError::DuplicateCourse {
                student_id,
                course_code,
            } => write!(
                f,
                "student {} already has a grade for course {}",
                student_id, course_code
            ),
            StoreError::InvalidScore { field, value } => {
                write!(f, "{} score {} is outside 0-100", field, value)
            }
            StoreError::Persist(e) => write!(f, "persistence error: {}", e),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Persist(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PersistError> for StoreError {
    fn from(err: PersistError) -> Self {
        StoreError::Persist(err)
    }
}
