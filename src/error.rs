//! Error types for covplot
//!
//! Every variant names what went wrong and, where a log file is involved,
//! where in the file it happened.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// covplot error types
#[derive(Error, Debug)]
pub enum Error {
    /// Log file could not be opened
    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenLog {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },

    /// Row has the wrong shape or a non-numeric field
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number within the log file
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// Timestamp column could not be parsed
    #[error("Unparsable timestamp '{value}' at line {line}\nExpected YYYY-MM-DD_HH:MM:SS[.fff]")]
    InvalidTimestamp {
        /// 1-based line number within the log file
        line: usize,
        /// Raw timestamp text
        value: String,
    },

    /// No usable rows remain after parsing
    #[error("Log contains no usable rows")]
    EmptyLog,

    /// Sample points violate the run record invariants
    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    /// Nothing to aggregate
    #[error("No valid data files were loaded")]
    NoRuns,

    /// Number of `--file` and `--name` arguments differ
    #[error("Number of files and names must be the same (got {files} files and {names} names)")]
    ArgumentMismatch {
        /// Count of `--file` arguments
        files: usize,
        /// Count of `--name` arguments
        names: usize,
    },

    /// Chart backend failure
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
