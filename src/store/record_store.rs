//! RecordStore - CRUD, search, sorting and load/save over the student collection.

use std::path::Path;

use tracing::{debug, info, warn};

use super::{DuplicateCoursePolicy, StoreConfig, StoreError};
use crate::persist::{JsonFile, LoadOutcome, RecordFile};
use crate::record::{Grade, Student, MAX_SCORE, MIN_SCORE};

/// The collection of students, in insertion order, unique by student id.
///
/// Lookups are linear scans; the store is sized for a single operator.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    config: StoreConfig,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            students: Vec::new(),
            config,
        }
    }

    /// Create a store and immediately hydrate it from `file`.
    ///
    /// A failed load is returned alongside the (empty) store rather than
    /// aborting, so the caller can report it and carry on.
    pub fn open<F>(config: StoreConfig, file: &F) -> (Self, Result<LoadOutcome, StoreError>)
    where
        F: RecordFile + ?Sized,
    {
        let mut store = Self::new(config);
        let outcome = store.load_from(file);
        (store, outcome)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn contains_student(&self, id: i32) -> bool {
        self.position(id).is_some()
    }

    pub fn get_student(&self, id: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id() == id)
    }

    /// Add a student with no grades. Fails with `Conflict` if the id is taken.
    pub fn add_student(
        &mut self,
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<&Student, StoreError> {
        if self.contains_student(id) {
            return Err(StoreError::Conflict { id });
        }

        self.students.push(Student::new(id, first_name, last_name));
        debug!(student_id = id, "student added");
        Ok(&self.students[self.students.len() - 1])
    }

    /// Remove a student together with all of their grades.
    pub fn delete_student(&mut self, id: i32) -> Result<Student, StoreError> {
        let index = self
            .position(id)
            .ok_or(StoreError::StudentNotFound { id })?;

        let removed = self.students.remove(index);
        debug!(
            student_id = id,
            grades = removed.grades().len(),
            "student deleted"
        );
        Ok(removed)
    }

    /// Append a grade to a student's grades.
    ///
    /// Scores are range-checked when `validate_scores` is on, and an existing
    /// grade for the same course is refused under `DuplicateCoursePolicy::Reject`.
    /// Nothing is stored unless every check passes.
    pub fn add_grade(
        &mut self,
        student_id: i32,
        course_code: impl Into<String>,
        midterm_score: i32,
        final_score: i32,
    ) -> Result<&Grade, StoreError> {
        let index = self
            .position(student_id)
            .ok_or(StoreError::StudentNotFound { id: student_id })?;

        if self.config.validate_scores {
            check_score("midterm", midterm_score)?;
            check_score("final", final_score)?;
        }

        let course_code: String = course_code.into();
        if self.config.duplicate_courses == DuplicateCoursePolicy::Reject
            && self.students[index].find_grade(&course_code).is_some()
        {
            return Err(StoreError::DuplicateCourse {
                student_id,
                course_code,
            });
        }

        debug!(student_id, course_code = %course_code, "grade added");
        let grade = Grade::new(course_code, midterm_score, final_score);
        Ok(self.students[index].push_grade(grade))
    }

    /// Remove the first grade whose course code matches, ignoring case.
    pub fn delete_grade(&mut self, student_id: i32, course_code: &str) -> Result<Grade, StoreError> {
        let index = self
            .position(student_id)
            .ok_or(StoreError::StudentNotFound { id: student_id })?;

        let removed = self.students[index].remove_grade(course_code).ok_or_else(|| {
            StoreError::GradeNotFound {
                student_id,
                course_code: course_code.to_string(),
            }
        })?;
        debug!(student_id, course_code, "grade deleted");
        Ok(removed)
    }

    /// All students, in insertion order or sorted by last name then first
    /// name. Sorting is case-sensitive and stable.
    pub fn list_students(&self, sorted: bool) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students.iter().collect();
        if sorted {
            students.sort_by(|a, b| {
                a.last_name()
                    .cmp(b.last_name())
                    .then_with(|| a.first_name().cmp(b.first_name()))
            });
        }
        students
    }

    /// Students whose first or last name contains `keyword`, ignoring case.
    pub fn search_students(&self, keyword: &str) -> Vec<&Student> {
        self.students.iter().filter(|s| s.matches(keyword)).collect()
    }

    /// A student's grades, highest average first.
    pub fn student_grades(&self, student_id: i32) -> Result<Vec<&Grade>, StoreError> {
        self.get_student(student_id)
            .map(Student::grades_by_average)
            .ok_or(StoreError::StudentNotFound { id: student_id })
    }

    /// Write the whole collection to the JSON file at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        self.save_to(&JsonFile::new(path.as_ref()))
    }

    /// Write the whole collection to `file`. The store is never modified.
    pub fn save_to<F>(&self, file: &F) -> Result<(), StoreError>
    where
        F: RecordFile + ?Sized,
    {
        file.write(&self.students)?;
        info!(
            location = %file.location(),
            students = self.students.len(),
            "records saved"
        );
        Ok(())
    }

    /// Replace the collection with the contents of the JSON file at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, StoreError> {
        self.load_from(&JsonFile::new(path.as_ref()))
    }

    /// Replace the collection with the contents of `file`.
    ///
    /// A missing file is `LoadOutcome::Absent` and leaves the store as it is.
    /// An unreadable or invalid file empties the store before the error is
    /// returned.
    pub fn load_from<F>(&mut self, file: &F) -> Result<LoadOutcome, StoreError>
    where
        F: RecordFile + ?Sized,
    {
        match file.read() {
            Ok(Some(students)) => {
                self.students = students;
                info!(
                    location = %file.location(),
                    students = self.students.len(),
                    "records loaded"
                );
                Ok(LoadOutcome::Loaded(self.students.len()))
            }
            Ok(None) => {
                debug!(location = %file.location(), "no record file to load");
                Ok(LoadOutcome::Absent)
            }
            Err(e) => {
                warn!(location = %file.location(), error = %e, "load failed, starting empty");
                self.students.clear();
                Err(e.into())
            }
        }
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.students.iter().position(|s| s.student_id() == id)
    }
}

fn check_score(field: &'static str, value: i32) -> Result<(), StoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&value) {
        Ok(())
    } else {
        Err(StoreError::InvalidScore { field, value })
    }
}
