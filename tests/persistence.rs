mod support;

use std::fs;

use gradebook::{
    InMemoryFile, JsonFile, LoadOutcome, PersistError, RecordFile, RecordStore, StoreConfig,
    StoreError,
};
use support::{rows, seeded_store};
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    let store = seeded_store();

    store.save(&path).unwrap();

    let mut loaded = RecordStore::default();
    assert_eq!(loaded.load(&path).unwrap(), LoadOutcome::Loaded(3));
    assert_eq!(rows(&loaded), rows(&store));

    let grades = loaded.student_grades(104).unwrap();
    assert_eq!(grades[0].average(), 62.0);
    assert_eq!(grades[1].average(), 46.0);
}

#[test]
fn saved_file_is_readable_json_without_derived_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    seeded_store().save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n  {"));
    assert!(!text.contains("average"));
    assert!(!text.contains("passStatus"));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &value[0];
    assert_eq!(first["studentId"], 104);
    assert_eq!(first["firstName"], "Zed");
    assert_eq!(first["lastName"], "Ann");
    assert_eq!(first["grades"][0]["courseCode"], "MAT101");
    assert_eq!(first["grades"][0]["midtermScore"], 50);
    assert_eq!(first["grades"][0]["finalScore"], 70);
}

#[test]
fn load_absent_file_is_not_a_failure() {
    let dir = TempDir::new().unwrap();
    let mut store = RecordStore::default();

    let outcome = store.load(dir.path().join("missing.json")).unwrap();
    assert_eq!(outcome, LoadOutcome::Absent);
    assert!(store.is_empty());
}

#[test]
fn load_corrupt_file_fails_and_empties_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    fs::write(&path, "[{\"studentId\": 7, \"firstName\": \"Half\"").unwrap();

    let mut store = seeded_store();
    let err = store.load(&path).unwrap_err();

    assert!(matches!(err, StoreError::Persist(PersistError::Format { .. })));
    assert!(store.is_empty());
}

#[test]
fn load_file_with_duplicate_ids_is_rejected() {
    let file = InMemoryFile::with_contents(
        r#"[
            {"studentId": 1, "firstName": "Ada", "lastName": "Lovelace", "grades": []},
            {"studentId": 1, "firstName": "Alan", "lastName": "Turing", "grades": []}
        ]"#,
    );

    let (store, outcome) = RecordStore::open(StoreConfig::default(), &file);
    assert!(matches!(
        outcome,
        Err(StoreError::Persist(PersistError::Format { .. }))
    ));
    assert!(store.is_empty());
}

#[test]
fn save_failure_reports_io_error_and_keeps_store() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let store = seeded_store();
    let before = rows(&store);

    let err = store.save(blocker.join("students.json")).unwrap_err();
    assert!(matches!(err, StoreError::Persist(PersistError::Io { .. })));
    assert_eq!(rows(&store), before);
}

#[test]
fn save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let file = JsonFile::new(dir.path().join("students.json"));

    let mut store = seeded_store();
    store.save_to(&file).unwrap();
    store.delete_student(104).unwrap();
    store.delete_student(101).unwrap();
    store.save_to(&file).unwrap();

    let persisted = file.read().unwrap().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].student_id(), 102);
}

#[test]
fn loads_files_written_by_the_legacy_tool() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.json");
    fs::write(
        &path,
        r#"[
  {
    "StudentId": 1,
    "FirstName": "Mehmet",
    "LastName": "Demir",
    "Grades": [
      { "CourseCode": "MAT101", "Vize": 40, "Final": 50, "Average": 46, "PassStatus": "KALDI" },
      { "CourseCode": "FIZ102", "Vize": 100, "Final": 90, "Average": 94, "PassStatus": "GEÇTİ" }
    ]
  }
]"#,
    )
    .unwrap();

    let mut store = RecordStore::default();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded(1));

    let codes: Vec<&str> = store
        .student_grades(1)
        .unwrap()
        .into_iter()
        .map(|g| g.course_code())
        .collect();
    assert_eq!(codes, vec!["FIZ102", "MAT101"]);

    // Re-saving migrates to the current key names.
    store.save(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"midtermScore\": 40"));
    assert!(!text.contains("Vize"));
}

#[test]
fn in_memory_and_json_files_are_interchangeable() {
    let dir = TempDir::new().unwrap();
    let memory = InMemoryFile::new();
    let disk = JsonFile::new(dir.path().join("students.json"));

    let store = seeded_store();
    store.save_to(&memory).unwrap();
    store.save_to(&disk).unwrap();

    let from_disk = fs::read(disk.path()).unwrap();
    assert_eq!(memory.contents().unwrap(), Some(from_disk));
}
