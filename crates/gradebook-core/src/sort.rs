//! Sorting student records by average grade.
//!
//! Two independent algorithms are provided:
//!
//! - [`partition_sort_by_average`]: quicksort with a Lomuto partition around
//!   the last record's average. Unstable, in place, worst case O(n²).
//! - [`comparator_sort_by_average`]: the standard library's comparison sort,
//!   ascending or descending.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::student::StudentRecord;

/// Which algorithm to use when sorting a roster by average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Partition-based quicksort
    Partition,
    /// Comparison sort from the standard library
    #[default]
    Comparator,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Partition => "partition",
            SortStrategy::Comparator => "comparator",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort strategy name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort strategy: {0} (expected \"partition\" or \"comparator\")")]
pub struct ParseSortStrategyError(String);

impl FromStr for SortStrategy {
    type Err = ParseSortStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "partition" | "quick" | "quicksort" => Ok(SortStrategy::Partition),
            "comparator" | "std" => Ok(SortStrategy::Comparator),
            other => Err(ParseSortStrategyError(other.to_string())),
        }
    }
}

/// Sort ascending by average using partition-based quicksort.
///
/// Pending ranges live on an explicit stack instead of the call stack. The
/// larger side of each partition is pushed first so the smaller side is
/// processed next, which keeps the stack at O(log n) entries.
pub fn partition_sort_by_average(students: &mut [StudentRecord]) {
    // Half-open ranges still to be sorted
    let mut pending = vec![(0, students.len())];

    while let Some((low, high)) = pending.pop() {
        if high - low < 2 {
            continue;
        }

        let pivot = low + partition_by_average(&mut students[low..high]);
        let left = (low, pivot);
        let right = (pivot + 1, high);

        if left.1 - left.0 > right.1 - right.0 {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}

/// Lomuto partition around the last record's average.
///
/// Records with an average no greater than the pivot end up before it.
/// Returns the pivot's final index within `students`.
fn partition_by_average(students: &mut [StudentRecord]) -> usize {
    let last = students.len() - 1;
    let pivot = students[last].average();
    let mut store = 0;

    for j in 0..last {
        if students[j].average() <= pivot {
            students.swap(store, j);
            store += 1;
        }
    }

    students.swap(store, last);
    store
}

/// Sort by average with a comparison sort, descending when requested.
pub fn comparator_sort_by_average(students: &mut [StudentRecord], descending: bool) {
    students.sort_by(|a, b| {
        let ordering = compare_averages(a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare_averages(a: &StudentRecord, b: &StudentRecord) -> Ordering {
    a.average().total_cmp(&b.average())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn roster_of(averages: &[i32]) -> Vec<StudentRecord> {
        averages
            .iter()
            .enumerate()
            .map(|(i, &grade)| StudentRecord::with_grades(format!("s{}", i), [grade]))
            .collect()
    }

    fn averages(students: &[StudentRecord]) -> Vec<f64> {
        students.iter().map(StudentRecord::average).collect()
    }

    fn names(students: &[StudentRecord]) -> Vec<String> {
        let mut names: Vec<String> = students.iter().map(|s| s.name().to_string()).collect();
        names.sort();
        names
    }

    fn is_non_decreasing(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[42])]
    #[case::sorted(&[1, 2, 3, 4, 5])]
    #[case::reversed(&[5, 4, 3, 2, 1])]
    #[case::all_equal(&[7, 7, 7, 7])]
    #[case::mixed(&[50, 10, 90, 10, 70, 30, 90])]
    fn test_partition_sort_orders_ascending(#[case] input: &[i32]) {
        let mut students = roster_of(input);
        let before = names(&students);

        partition_sort_by_average(&mut students);

        assert!(is_non_decreasing(&averages(&students)));
        assert_eq!(names(&students), before);
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::single(&[42])]
    #[case::reversed(&[5, 4, 3, 2, 1])]
    #[case::mixed(&[50, 10, 90, 10, 70, 30, 90])]
    fn test_comparator_sort_both_directions(#[case] input: &[i32]) {
        let mut students = roster_of(input);
        comparator_sort_by_average(&mut students, false);
        assert!(is_non_decreasing(&averages(&students)));

        comparator_sort_by_average(&mut students, true);
        let mut descending = averages(&students);
        descending.reverse();
        assert!(is_non_decreasing(&descending));
        assert_eq!(students.len(), input.len());
    }

    #[test]
    fn test_partition_sort_large_sorted_input() {
        let input: Vec<i32> = (0..2_000).collect();
        let mut students = roster_of(&input);
        partition_sort_by_average(&mut students);
        assert!(is_non_decreasing(&averages(&students)));
    }

    #[test]
    fn test_partition_returns_pivot_position() {
        let mut students = roster_of(&[30, 10, 40, 20]);
        let pivot = partition_by_average(&mut students);
        assert_eq!(pivot, 1);
        assert_eq!(students[pivot].average(), 20.0);
        assert!(students[..pivot].iter().all(|s| s.average() <= 20.0));
        assert!(students[pivot + 1..].iter().all(|s| s.average() > 20.0));
    }

    #[rstest]
    #[case("partition", SortStrategy::Partition)]
    #[case("Quicksort", SortStrategy::Partition)]
    #[case("comparator", SortStrategy::Comparator)]
    #[case(" std ", SortStrategy::Comparator)]
    fn test_parse_strategy(#[case] input: &str, #[case] expected: SortStrategy) {
        assert_eq!(input.parse::<SortStrategy>().unwrap(), expected);
    }

    #[test]
    fn test_parse_strategy_rejects_unknown() {
        let err = "bubble".parse::<SortStrategy>().unwrap_err();
        assert!(err.to_string().contains("bubble"));
    }

    #[test]
    fn test_strategy_round_trips_through_display() {
        for strategy in [SortStrategy::Partition, SortStrategy::Comparator] {
            assert_eq!(strategy.to_string().parse::<SortStrategy>().unwrap(), strategy);
        }
    }
}
