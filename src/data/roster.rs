//! Built-in student roster and class list
//!
//! The prototype works on a fixed in-memory dataset; nothing is persisted.

use crate::core::{ClassInfo, Student};

fn student(student_id: &str, name: &str, email: &str) -> Student {
    Student {
        student_id: student_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub(crate) fn sample_students() -> Vec<Student> {
    vec![
        student("STU001", "John Doe", "john.doe@school.edu"),
        student("STU002", "Jane Smith", "jane.smith@school.edu"),
        student("STU003", "Robert Johnson", "robert.johnson@school.edu"),
        student("STU004", "Emily Davis", "emily.davis@school.edu"),
        student("STU005", "Michael Wilson", "michael.wilson@school.edu"),
        student("STU006", "Sarah Brown", "sarah.brown@school.edu"),
        student("STU007", "David Miller", "david.miller@school.edu"),
        student("STU008", "Lisa Taylor", "lisa.taylor@school.edu"),
        student("STU009", "James Anderson", "james.anderson@school.edu"),
        student("STU010", "Jennifer Thomas", "jennifer.thomas@school.edu"),
    ]
}

pub(crate) fn sample_classes() -> Vec<ClassInfo> {
    vec![
        ClassInfo {
            id: 1,
            name: "Mathematics 101".to_string(),
            teacher: "Mr. Johnson".to_string(),
        },
        ClassInfo {
            id: 2,
            name: "Science 201".to_string(),
            teacher: "Dr. Smith".to_string(),
        },
        ClassInfo {
            id: 3,
            name: "History 301".to_string(),
            teacher: "Ms. Williams".to_string(),
        },
        ClassInfo {
            id: 4,
            name: "English 101".to_string(),
            teacher: "Mrs. Davis".to_string(),
        },
    ]
}

/// Resolve a class selector: a numeric id or a case-insensitive name match.
pub(crate) fn find_class<'a>(classes: &'a [ClassInfo], selector: &str) -> Option<&'a ClassInfo> {
    let selector = selector.trim();
    if let Ok(id) = selector.parse::<u32>() {
        return classes.iter().find(|c| c.id == id);
    }
    let lower = selector.to_lowercase();
    classes
        .iter()
        .find(|c| c.name.to_lowercase() == lower)
        .or_else(|| classes.iter().find(|c| c.name.to_lowercase().starts_with(&lower)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_ten_students_with_unique_ids() {
        let students = sample_students();
        assert_eq!(students.len(), 10);
        let mut ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn four_sample_classes() {
        assert_eq!(sample_classes().len(), 4);
    }

    #[test]
    fn find_class_by_id() {
        let classes = sample_classes();
        assert_eq!(find_class(&classes, "2").map(|c| c.name.as_str()), Some("Science 201"));
        assert!(find_class(&classes, "9").is_none());
    }

    #[test]
    fn find_class_by_name_case_insensitive() {
        let classes = sample_classes();
        assert_eq!(find_class(&classes, "mathematics 101").map(|c| c.id), Some(1));
    }

    #[test]
    fn find_class_by_name_prefix() {
        let classes = sample_classes();
        assert_eq!(find_class(&classes, "history").map(|c| c.id), Some(3));
        assert!(find_class(&classes, "alchemy").is_none());
    }
}
