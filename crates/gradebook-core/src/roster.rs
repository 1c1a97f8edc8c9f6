//! Roster: an ordered, owned collection of student records

use gradebook_stats::GradeSummary;
use serde::{Deserialize, Serialize};

use crate::sort::{comparator_sort_by_average, partition_sort_by_average, SortStrategy};
use crate::student::StudentRecord;

/// Ordered collection of student records.
///
/// No ordering is maintained automatically; the order is whatever the last
/// insertion, removal, or sort left behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the roster
    pub fn add_student(&mut self, student: StudentRecord) {
        tracing::debug!("Adding student {}", student.name());
        self.students.push(student);
    }

    /// Remove the first record whose name matches exactly.
    ///
    /// Returns the removed record, or `None` if no record matched, in which
    /// case the roster is unchanged.
    pub fn remove_student(&mut self, name: &str) -> Option<StudentRecord> {
        let Some(index) = self.students.iter().position(|s| s.name() == name) else {
            tracing::debug!("No student named {} to remove", name);
            return None;
        };
        tracing::info!("Removing student {}", name);
        Some(self.students.remove(index))
    }

    /// Every record whose name matches exactly, in roster order.
    ///
    /// An empty result means no match.
    pub fn search_by_name(&self, name: &str) -> Vec<&StudentRecord> {
        self.students.iter().filter(|s| s.name() == name).collect()
    }

    /// First record whose name matches exactly, for in-place edits
    pub fn find_mut(&mut self, name: &str) -> Option<&mut StudentRecord> {
        self.students.iter_mut().find(|s| s.name() == name)
    }

    /// Student names in current roster order
    pub fn list_students(&self) -> Vec<&str> {
        self.students.iter().map(StudentRecord::name).collect()
    }

    /// Sort ascending by average with the partition-based quicksort
    pub fn sort_by_average_partition(&mut self) {
        tracing::debug!("Partition sort over {} students", self.students.len());
        partition_sort_by_average(&mut self.students);
    }

    /// Sort by average with a comparison sort
    pub fn sort_by_average_comparator(&mut self, descending: bool) {
        tracing::debug!(
            "Comparator sort over {} students (descending: {})",
            self.students.len(),
            descending
        );
        comparator_sort_by_average(&mut self.students, descending);
    }

    /// Sort by average using the chosen algorithm.
    ///
    /// The partition sort only orders ascending, so a descending request
    /// reverses its result.
    pub fn sort_by_average(&mut self, strategy: SortStrategy, descending: bool) {
        match strategy {
            SortStrategy::Partition => {
                self.sort_by_average_partition();
                if descending {
                    self.students.reverse();
                }
            }
            SortStrategy::Comparator => self.sort_by_average_comparator(descending),
        }
    }

    /// Statistics over every grade in the roster, taken in roster order
    pub fn class_statistics(&self) -> ClassStatistics {
        let grades: Vec<i32> = self
            .students
            .iter()
            .flat_map(|s| s.grades().iter().copied())
            .collect();
        ClassStatistics::from_grades(grades)
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl Extend<StudentRecord> for Roster {
    fn extend<I: IntoIterator<Item = StudentRecord>>(&mut self, iter: I) {
        for student in iter {
            self.add_student(student);
        }
    }
}

impl IntoIterator for Roster {
    type Item = StudentRecord;
    type IntoIter = std::vec::IntoIter<StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

/// Class-wide statistics over the concatenated grades of a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    /// Every grade, in roster order then stored order
    pub grades: Vec<i32>,
    pub summary: GradeSummary,
}

impl ClassStatistics {
    fn from_grades(grades: Vec<i32>) -> Self {
        let summary = GradeSummary::from_grades(&grades);
        Self { grades, summary }
    }

    pub fn count(&self) -> usize {
        self.summary.count
    }

    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    pub fn median(&self) -> f64 {
        self.summary.median
    }

    /// Sample standard deviation
    pub fn stdev(&self) -> f64 {
        self.summary.std_dev
    }
}
