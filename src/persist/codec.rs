//! JSON encoding of the student collection.

use std::collections::HashSet;

use crate::record::Student;

pub(crate) fn encode(students: &[Student]) -> Result<Vec<u8>, String> {
    let mut bytes = serde_json::to_vec_pretty(students).map_err(|e| e.to_string())?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode a student collection, rejecting duplicate student ids.
pub(crate) fn decode(bytes: &[u8]) -> Result<Vec<Student>, String> {
    let students: Vec<Student> = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;

    let mut seen = HashSet::with_capacity(students.len());
    for student in &students {
        if !seen.insert(student.student_id()) {
            return Err(format!("duplicate student id {}", student.student_id()));
        }
    }

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_camel_case_without_derived_fields() {
        let students = decode(
            br#"[{"studentId":1,"firstName":"Ada","lastName":"Lovelace",
                 "grades":[{"courseCode":"MAT101","midtermScore":50,"finalScore":70}]}]"#,
        )
        .unwrap();

        let text = String::from_utf8(encode(&students).unwrap()).unwrap();
        assert!(text.contains("\"studentId\": 1"));
        assert!(text.contains("\"midtermScore\": 50"));
        assert!(!text.contains("average"));
        assert!(!text.contains("passStatus"));
        assert_eq!(decode(text.as_bytes()).unwrap(), students);
    }

    #[test]
    fn decode_accepts_legacy_pascal_case_files() {
        let legacy = r#"[
          {
            "StudentId": 42,
            "FirstName": "Ayşe",
            "LastName": "Yılmaz",
            "Grades": [
              { "CourseCode": "MAT101", "Vize": 50, "Final": 70, "Average": 62, "PassStatus": "GEÇTİ" }
            ]
          }
        ]"#;

        let students = decode(legacy.as_bytes()).unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].student_id(), 42);
        assert_eq!(students[0].first_name(), "Ayşe");
        let grade = &students[0].grades()[0];
        assert_eq!(grade.course_code(), "MAT101");
        assert_eq!(grade.midterm_score(), 50);
        assert_eq!(grade.final_score(), 70);
        assert_eq!(grade.average(), 62.0);
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let err = decode(
            br#"[{"studentId":1,"firstName":"A","lastName":"B"},
                 {"studentId":1,"firstName":"C","lastName":"D"}]"#,
        )
        .unwrap_err();
        assert!(err.contains("duplicate student id 1"));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode(b"{\"students\": []}").is_err());
        assert!(decode(b"not json").is_err());
        assert!(decode(br#"[{"studentId":"one","firstName":"A","lastName":"B"}]"#).is_err());
    }
}
