use serde::{Deserialize, Serialize};

use super::{fold_case, Grade};

/// A student and the grades they own, in insertion order.
///
/// Grades can only be added or removed through the owning `RecordStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "StudentId")]
    student_id: i32,
    #[serde(alias = "FirstName")]
    first_name: String,
    #[serde(alias = "LastName")]
    last_name: String,
    #[serde(alias = "Grades", default)]
    grades: Vec<Grade>,
}

impl Student {
    pub fn new(student_id: i32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            student_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            grades: Vec::new(),
        }
    }

    pub fn student_id(&self) -> i32 {
        self.student_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Grades in the order they were added.
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Grades ordered by average, highest first. Equal averages keep their
    /// insertion order.
    pub fn grades_by_average(&self) -> Vec<&Grade> {
        let mut grades: Vec<&Grade> = self.grades.iter().collect();
        grades.sort_by(|a, b| b.average().total_cmp(&a.average()));
        grades
    }

    pub fn find_grade(&self, course_code: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.is_course(course_code))
    }

    /// True if the first or last name contains `keyword`, ignoring case.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = fold_case(keyword);
        fold_case(&self.first_name).contains(&keyword)
            || fold_case(&self.last_name).contains(&keyword)
    }

    pub(crate) fn push_grade(&mut self, grade: Grade) -> &Grade {
        self.grades.push(grade);
        &self.grades[self.grades.len() - 1]
    }

    /// Remove the first grade matching `course_code`.
    pub(crate) fn remove_grade(&mut self, course_code: &str) -> Option<Grade> {
        let index = self.grades.iter().position(|g| g.is_course(course_code))?;
        Some(self.grades.remove(index))
    }
}
