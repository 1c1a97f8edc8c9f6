//! Student record: a name plus an ordered grade sequence

use std::fmt;

use gradebook_stats::{mean, median, stdev, GradeSummary};
use serde::{Deserialize, Serialize};

/// A single student's name and grades.
///
/// Grades keep insertion order. Cloning a record copies its grades; records
/// never share grade storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    name: String,
    grades: Vec<i32>,
}

impl StudentRecord {
    /// Create a record with no grades
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Create a record with an initial set of grades, kept in the given order
    pub fn with_grades(name: impl Into<String>, grades: impl IntoIterator<Item = i32>) -> Self {
        Self {
            name: name.into(),
            grades: grades.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Grades in stored order
    pub fn grades(&self) -> &[i32] {
        &self.grades
    }

    /// Append a grade. Any value is accepted.
    pub fn add_grade(&mut self, grade: i32) {
        self.grades.push(grade);
    }

    /// Remove the first occurrence of the lowest grade.
    ///
    /// Returns the removed grade, or `None` when there were no grades to drop.
    /// The remaining grades keep their relative order.
    pub fn drop_lowest_grade(&mut self) -> Option<i32> {
        let Some((index, _)) = self.grades.iter().enumerate().min_by_key(|&(_, &g)| g) else {
            tracing::warn!("Cannot drop lowest grade for {}: no grades recorded", self.name);
            return None;
        };
        let dropped = self.grades.remove(index);
        tracing::debug!("Dropped grade {} from {}", dropped, self.name);
        Some(dropped)
    }

    /// Mean of the grades, `0.0` when there are none
    pub fn average(&self) -> f64 {
        mean(&self.grades)
    }

    pub fn median(&self) -> f64 {
        median(&self.grades)
    }

    /// Sample standard deviation of the grades
    pub fn stdev(&self) -> f64 {
        stdev(&self.grades)
    }

    /// Full statistics over this student's grades
    pub fn summary(&self) -> GradeSummary {
        GradeSummary::from_grades(&self.grades)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s grades are: ", self.name)?;
        for (i, grade) in self.grades.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", grade)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let student = StudentRecord::new("Alice");
        assert_eq!(student.name(), "Alice");
        assert!(student.grades().is_empty());
        assert_eq!(student.average(), 0.0);
        assert_eq!(student.median(), 0.0);
        assert_eq!(student.stdev(), 0.0);
    }

    #[test]
    fn test_set_name() {
        let mut student = StudentRecord::new("Alice");
        student.set_name("Alicia");
        assert_eq!(student.name(), "Alicia");
    }

    #[test]
    fn test_add_grade_keeps_order() {
        let mut student = StudentRecord::new("Alice");
        student.add_grade(90);
        student.add_grade(80);
        student.add_grade(100);
        student.add_grade(-3);
        assert_eq!(student.grades(), &[90, 80, 100, -3]);
    }

    #[test]
    fn test_drop_lowest_grade() {
        let mut student = StudentRecord::with_grades("Alice", [90, 80, 100]);
        assert_eq!(student.drop_lowest_grade(), Some(80));
        assert_eq!(student.grades(), &[90, 100]);
    }

    #[test]
    fn test_drop_lowest_grade_removes_one_duplicate() {
        let mut student = StudentRecord::with_grades("Bob", [70, 60, 85, 60]);
        assert_eq!(student.drop_lowest_grade(), Some(60));
        assert_eq!(student.grades(), &[70, 85, 60]);
    }

    #[test]
    fn test_drop_lowest_grade_empty_is_noop() {
        let mut student = StudentRecord::new("Cara");
        assert_eq!(student.drop_lowest_grade(), None);
        assert!(student.grades().is_empty());
    }

    #[test]
    fn test_statistics_delegate() {
        let student = StudentRecord::with_grades("Bob", [70, 75, 85]);
        assert!((student.average() - 76.6667).abs() < 1e-4);
        assert_eq!(student.median(), 75.0);
        assert!((student.stdev() - 7.6376).abs() < 1e-4);

        let summary = student.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, Some(70));
    }

    #[test]
    fn test_median_leaves_stored_order() {
        let student = StudentRecord::with_grades("Alice", [90, 80, 100]);
        assert_eq!(student.median(), 90.0);
        assert_eq!(student.grades(), &[90, 80, 100]);
    }

    #[test]
    fn test_clone_copies_grades() {
        let original = StudentRecord::with_grades("Alice", [90]);
        let mut copy = original.clone();
        copy.add_grade(50);
        assert_eq!(original.grades(), &[90]);
        assert_eq!(copy.grades(), &[90, 50]);
    }

    #[test]
    fn test_display_lists_grades() {
        let student = StudentRecord::with_grades("Alice", [90, 80, 100]);
        assert_eq!(student.to_string(), "Alice's grades are: 90, 80, 100");
        assert_eq!(StudentRecord::new("Bob").to_string(), "Bob's grades are: ");
    }
}
