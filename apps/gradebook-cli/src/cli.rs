//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use gradebook_core::SortStrategy;

/// Student roster and grade statistics demo
#[derive(Parser, Debug)]
#[command(name = "gradebook", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List, sort, remove Bob, then show class statistics
    Demo,
    /// List student names in roster order
    List,
    /// Show every student's grades and statistics
    Grades,
    /// Sort the roster by average grade
    Sort {
        /// Sorting algorithm: partition or comparator
        #[arg(long)]
        strategy: Option<SortStrategy>,
        /// Highest average first; `--descending=false` forces ascending
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        descending: Option<bool>,
    },
    /// Find students by exact name
    Search { name: String },
    /// Remove the first student with this name
    Remove { name: String },
    /// Drop the lowest grade of the first student with this name
    DropLowest { name: String },
    /// Statistics over every grade in the roster
    Stats,
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
