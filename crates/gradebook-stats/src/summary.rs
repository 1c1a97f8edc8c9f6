//! Summary statistics for grade sequences
//!
//! Provides the descriptive statistics reported per student and per class:
//! - Mean, median
//! - Sample variance and standard deviation (n - 1 denominator)
//! - Min, max, range
//!
//! Empty input is a valid case: every floating-point statistic is `0.0`.

use serde::{Deserialize, Serialize};

/// Arithmetic mean of the grades, `0.0` when empty.
pub fn mean(grades: &[i32]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let sum: f64 = grades.iter().map(|&g| f64::from(g)).sum();
    sum / grades.len() as f64
}

/// Median of the grades, `0.0` when empty.
///
/// Sorts a private copy; the input order is left untouched. For an even
/// count the two central values are averaged.
pub fn median(grades: &[i32]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let mut sorted = grades.to_vec();
    sorted.sort_unstable();
    median_of_sorted(&sorted)
}

/// Sample variance (Bessel-corrected), `0.0` for fewer than two grades.
pub fn variance(grades: &[i32]) -> f64 {
    if grades.len() < 2 {
        return 0.0;
    }
    let m = mean(grades);
    let sum_sq: f64 = grades
        .iter()
        .map(|&g| (f64::from(g) - m).powi(2))
        .sum();
    sum_sq / (grades.len() - 1) as f64
}

/// Sample standard deviation, `0.0` for fewer than two grades.
pub fn stdev(grades: &[i32]) -> f64 {
    variance(grades).sqrt()
}

fn median_of_sorted(sorted: &[i32]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        f64::from(sorted[n / 2])
    } else {
        (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
    }
}

/// Summary statistics for a grade sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Number of grades
    pub count: usize,
    /// Mean (average)
    pub mean: f64,
    /// Median (50th percentile)
    pub median: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Lowest grade, if any
    pub min: Option<i32>,
    /// Highest grade, if any
    pub max: Option<i32>,
}

impl GradeSummary {
    /// Compute summary statistics from grades
    pub fn from_grades(grades: &[i32]) -> Self {
        if grades.is_empty() {
            return Self::empty();
        }

        let mut sorted = grades.to_vec();
        sorted.sort_unstable();

        Self {
            count: grades.len(),
            mean: mean(grades),
            median: median_of_sorted(&sorted),
            std_dev: stdev(grades),
            min: sorted.first().copied(),
            max: sorted.last().copied(),
        }
    }

    /// Statistics of an empty sequence
    fn empty() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: None,
            max: None,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<i64> {
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => Some(i64::from(hi) - i64::from(lo)),
            _ => None,
        }
    }

    /// True when no grades were summarized
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for GradeSummary {
    fn default() -> Self {
        Self::empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mean_lies_between_min_and_max(grades in prop::collection::vec(-1000i32..1000, 1..64)) {
            let m = mean(&grades);
            let lo = f64::from(*grades.iter().min().unwrap());
            let hi = f64::from(*grades.iter().max().unwrap());
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
        }

        #[test]
        fn median_matches_sorted_middle(grades in prop::collection::vec(0i32..=100, 1..64)) {
            let mut sorted = grades.clone();
            sorted.sort();
            let n = sorted.len();
            let expected = if n % 2 == 1 {
                f64::from(sorted[n / 2])
            } else {
                (f64::from(sorted[n / 2 - 1]) + f64::from(sorted[n / 2])) / 2.0
            };
            prop_assert_eq!(median(&grades), expected);
        }

        #[test]
        fn stdev_is_non_negative_and_order_independent(
            grades in prop::collection::vec(0i32..=100, 0..64),
        ) {
            let sd = stdev(&grades);
            prop_assert!(sd >= 0.0);
            let mut reversed = grades.clone();
            reversed.reverse();
            prop_assert!((stdev(&reversed) - sd).abs() < 1e-9);
        }
    }
}
