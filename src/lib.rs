//! # covplot: Coverage and Validation Log Charts
//!
//! Reads measurement logs from repeated fuzzing runs, aligns them on a
//! common time axis and renders comparison charts.
//!
//! ## Pipeline
//!
//! ```text
//! CLI args ─> loader (per file) ─> GroupedRuns ─> aggregate ─> chart ─> image
//!                 │                                   │
//!                 └─> SkippedRun (logged)             └─> compare (optional)
//! ```
//!
//! - [`loader`]: parses coverage CSV and validation logs into [`RunRecord`]s
//!   and groups them by name. Unreadable coverage logs are skipped.
//! - [`aggregate`]: resamples every run onto one 500-point axis and takes the
//!   per-group mean and population standard deviation.
//! - [`chart`]: draws one line per group with an optional `mean ± std` band.
//! - [`compare`]: final values and largest gaps between two groups.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use covplot::aggregate::aggregate;
//! use covplot::chart::{render, ChartSpec, COVERAGE_TITLE};
//! use covplot::loader::{load_coverage, load_groups, InputFile};
//!
//! let inputs = vec![
//!     InputFile::new("afl-1.csv", "afl"),
//!     InputFile::new("afl-2.csv", "afl"),
//!     InputFile::new("libfuzzer-1.csv", "libfuzzer"),
//! ];
//! let report = load_groups(&inputs, |path| load_coverage(path));
//! let aggregation = aggregate(report.groups())?;
//! render(&ChartSpec::coverage(COVERAGE_TITLE, &aggregation), "coverage.png")?;
//! # Ok::<(), covplot::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod compare;
pub mod error;
pub mod loader;
pub mod logging;
pub mod record;
pub mod stats;

pub use error::{Error, Result};
pub use record::{RunRecord, SamplePoint};
