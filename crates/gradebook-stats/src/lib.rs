//! gradebook-stats - Descriptive statistics over integer grades
//!
//! This crate provides the aggregate functions used by the gradebook:
//!
//! - **mean**: arithmetic average
//! - **median**: middle value of a sorted copy (average of the central pair for even counts)
//! - **stdev**: sample standard deviation (Bessel-corrected)
//!
//! Every function is defined for empty and single-element input and returns
//! `0.0` where the statistic would otherwise be undefined.

pub mod summary;

pub use summary::*;
