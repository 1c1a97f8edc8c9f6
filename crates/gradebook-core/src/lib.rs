//! gradebook-core: Student records and the roster engine.
//!
//! A [`StudentRecord`] owns a name and its grades and answers statistics
//! queries through `gradebook-stats`. A [`Roster`] is an ordered collection
//! of records supporting add, remove, search, list, class-wide statistics
//! and two sorts by average (partition-based and comparator-based).

pub mod roster;
pub mod sample;
pub mod sort;
pub mod student;

pub use roster::*;
pub use sample::*;
pub use sort::*;
pub use student::*;

pub use gradebook_stats::GradeSummary;
