#![allow(dead_code)]

use gradebook::{RecordStore, StoreConfig};

/// Flattened student data for comparing collections.
pub type StudentRow = (i32, String, String, Vec<(String, i32, i32)>);

/// Three students, two with grades, in a known insertion order.
pub fn seeded_store() -> RecordStore {
    let mut store = RecordStore::new(StoreConfig::default());
    store.add_student(104, "Zed", "Ann").unwrap();
    store.add_student(101, "Abel", "Zoe").unwrap();
    store.add_student(102, "Ayşe", "Yılmaz").unwrap();

    store.add_grade(104, "MAT101", 50, 70).unwrap();
    store.add_grade(104, "PHY101", 40, 50).unwrap();
    store.add_grade(102, "CHEM1", 90, 95).unwrap();
    store
}

pub fn rows(store: &RecordStore) -> Vec<StudentRow> {
    store
        .list_students(false)
        .into_iter()
        .map(|s| {
            let grades = s
                .grades()
                .iter()
                .map(|g| (g.course_code().to_string(), g.midterm_score(), g.final_score()))
                .collect();
            (
                s.student_id(),
                s.first_name().to_string(),
                s.last_name().to_string(),
                grades,
            )
        })
        .collect()
}
