use std::fmt;

use serde::{Deserialize, Serialize};

use super::fold_case;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Weighted total (in tenths of a point) needed to pass.
const PASS_THRESHOLD: i64 = 600;

/// Outcome of a grade, derived from its average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStatus {
    Pass,
    Fail,
}

impl PassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassStatus::Pass => "PASS",
            PassStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course result: midterm and final scores for one course code.
///
/// The average weighs the midterm at 40% and the final at 60%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    #[serde(alias = "CourseCode")]
    course_code: String,
    #[serde(alias = "MidtermScore", alias = "Vize")]
    midterm_score: i32,
    #[serde(alias = "FinalScore", alias = "Final")]
    final_score: i32,
}

impl Grade {
    pub fn new(course_code: impl Into<String>, midterm_score: i32, final_score: i32) -> Self {
        Self {
            course_code: course_code.into(),
            midterm_score,
            final_score,
        }
    }

    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    pub fn midterm_score(&self) -> i32 {
        self.midterm_score
    }

    pub fn final_score(&self) -> i32 {
        self.final_score
    }

    /// `midterm * 0.4 + final * 0.6`.
    ///
    /// Computed from the integer weighted total so values such as 62.0 and
    /// 60.0 come out exact.
    pub fn average(&self) -> f64 {
        self.weighted_total() as f64 / 10.0
    }

    /// PASS when the average is at least 60.
    pub fn pass_status(&self) -> PassStatus {
        if self.weighted_total() >= PASS_THRESHOLD {
            PassStatus::Pass
        } else {
            PassStatus::Fail
        }
    }

    /// Case-insensitive course code comparison.
    pub fn is_course(&self, course_code: &str) -> bool {
        fold_case(&self.course_code) == fold_case(course_code)
    }

    fn weighted_total(&self) -> i64 {
        4 * i64::from(self.midterm_score) + 6 * i64::from(self.final_score)
    }
}
