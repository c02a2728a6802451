//! Records - the student and grade data owned by a `RecordStore`.
//!
//! Only the raw scores are stored. The weighted average and pass status are
//! derived on every read and never persisted.

mod grade;
mod student;

pub use grade::{Grade, PassStatus, MAX_SCORE, MIN_SCORE};
pub use student::Student;

/// Case folding for name and course code comparisons. Uppercasing maps the
/// dotless `ı` onto `I`, so Turkish names match either spelling.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_uppercase()
}
