//! Plain-text rendering of roster and statistics results

use gradebook_core::{ClassStatistics, GradeSummary, Roster, StudentRecord};

/// Text renderer with a fixed number of decimal places
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub precision: usize,
}

impl Renderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// One name per line
    pub fn names(&self, roster: &Roster) -> String {
        let mut out = String::new();
        for name in roster.list_students() {
            out.push_str(name);
            out.push('\n');
        }
        out
    }

    /// `name avg=..` per line
    pub fn averages(&self, roster: &Roster) -> String {
        roster
            .iter()
            .map(|s| format!("{} avg={}\n", s.name(), self.num(s.average())))
            .collect()
    }

    /// `min..max (range)`, absent when there are no grades
    fn spread(summary: &GradeSummary) -> Option<String> {
        let (min, max, range) = (summary.min?, summary.max?, summary.range()?);
        Some(format!("{}..{} ({})", min, max, range))
    }

    /// Grade listing followed by the student's statistics
    pub fn student(&self, student: &StudentRecord) -> String {
        let summary = student.summary();
        let mut out = format!(
            "{}\nMean: {}  Median: {}  StdDev: {}\n",
            student,
            self.num(summary.mean),
            self.num(summary.median),
            self.num(summary.std_dev)
        );
        if let Some(spread) = Self::spread(&summary) {
            out.push_str(&format!("Range: {}\n", spread));
        }
        out
    }

    pub fn class_statistics(&self, stats: &ClassStatistics) -> String {
        let mut out = format!(
            "Class grade count: {}\nClass mean: {}\nClass median: {}\nClass stdev: {}\n",
            stats.count(),
            self.num(stats.mean()),
            self.num(stats.median()),
            self.num(stats.stdev())
        );
        if let Some(spread) = Self::spread(&stats.summary) {
            out.push_str(&format!("Class range: {}\n", spread));
        }
        out
    }

    /// `Found: name` per match, or the no-match line
    pub fn search(&self, needle: &str, matches: &[&StudentRecord]) -> String {
        if matches.is_empty() {
            return format!("No match for \"{}\"\n", needle);
        }
        matches
            .iter()
            .map(|s| format!("Found: {}\n", s.name()))
            .collect()
    }
}
