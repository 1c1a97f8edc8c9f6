//! Built-in sample roster used by the demo driver.

use crate::roster::Roster;
use crate::student::StudentRecord;

/// Sample students and their grades, in roster order.
pub const SAMPLE_STUDENTS: &[(&str, &[i32])] = &[
    ("Alice", &[90, 80, 100]),
    ("Bob", &[70, 75, 85]),
    ("Cara", &[95, 92]),
];

/// Build a fresh roster from [`SAMPLE_STUDENTS`].
pub fn sample_roster() -> Roster {
    SAMPLE_STUDENTS
        .iter()
        .map(|(name, grades)| {
            let mut student = StudentRecord::new(*name);
            for &grade in grades.iter() {
                student.add_grade(grade);
            }
            student
        })
        .collect()
}
