//! Log loading and grouping
//!
//! Two log formats are supported:
//!
//! - [`coverage`]: timestamped CSV from the coverage sampler
//! - [`validation`]: space-separated packet counters
//!
//! [`load_groups`] is the first pipeline phase: it turns `(path, name)`
//! inputs into named groups of runs. A file that fails to load is reported
//! as a [`SkippedRun`] and left out; it never aborts the other files.
//!
//! ```rust
//! use covplot::loader::{load_groups, InputFile};
//! use covplot::record::RunRecord;
//!
//! let inputs = vec![
//!     InputFile::new("a.csv", "fuzzer"),
//!     InputFile::new("b.csv", "fuzzer"),
//! ];
//! let report = load_groups(&inputs, |_| RunRecord::from_pairs([(0.0, 1.0)]));
//! assert_eq!(report.groups().run_count(), 2);
//! ```

mod coverage;
mod validation;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::record::RunRecord;
use crate::{Error, Result};

pub use coverage::{
    load_coverage, parse_coverage, parse_timestamp, CoverageRow, COVERAGE_COLUMNS,
    TIMESTAMP_FORMAT,
};
pub use validation::{load_validation, parse_validation, VALIDATION_COLUMNS};

/// One `--file` / `--name` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
    name: String,
}

impl InputFile {
    /// Pair a log path with its group name.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Log file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Named groups of runs, in order of first appearance.
///
/// Order matters: it fixes legend order and line colours.
#[derive(Debug, Clone, Default)]
pub struct GroupedRuns {
    groups: Vec<(String, Vec<RunRecord>)>,
}

impl GroupedRuns {
    /// Create an empty set of groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `run` to the group called `name`, creating it if needed.
    pub fn push(&mut self, name: &str, run: RunRecord) {
        match self.groups.iter_mut().find(|(n, _)| n == name) {
            Some((_, runs)) => runs.push(run),
            None => self.groups.push((name.to_string(), vec![run])),
        }
    }

    /// Runs belonging to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[RunRecord]> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, runs)| runs.as_slice())
    }

    /// Iterate `(name, runs)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RunRecord])> {
        self.groups
            .iter()
            .map(|(name, runs)| (name.as_str(), runs.as_slice()))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no run has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of runs across all groups.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.groups.iter().map(|(_, runs)| runs.len()).sum()
    }

    /// Largest elapsed time over every run of every group.
    #[must_use]
    pub fn max_elapsed(&self) -> Option<f64> {
        self.groups
            .iter()
            .flat_map(|(_, runs)| runs.iter())
            .map(RunRecord::max_elapsed)
            .reduce(f64::max)
    }
}

/// A file left out of its group, with the reason.
#[derive(Debug)]
pub struct SkippedRun {
    /// Input that failed
    pub input: InputFile,
    /// Why it failed
    pub reason: Error,
}

/// Outcome of loading every input.
#[derive(Debug, Default)]
pub struct LoadReport {
    groups: GroupedRuns,
    skipped: Vec<SkippedRun>,
}

impl LoadReport {
    /// Successfully loaded runs, grouped by name.
    #[must_use]
    pub const fn groups(&self) -> &GroupedRuns {
        &self.groups
    }

    /// Inputs that failed to load.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedRun] {
        &self.skipped
    }

    /// Consume the report, keeping only the groups.
    #[must_use]
    pub fn into_groups(self) -> GroupedRuns {
        self.groups
    }
}

/// Load every input with `load` and group the successes by name.
///
/// Inputs are processed in order. Failures are logged at `warn` level and
/// collected in [`LoadReport::skipped`].
pub fn load_groups<F>(inputs: &[InputFile], mut load: F) -> LoadReport
where
    F: FnMut(&Path) -> Result<RunRecord>,
{
    let mut report = LoadReport::default();
    for input in inputs {
        match load(input.path()) {
            Ok(run) => report.groups.push(input.name(), run),
            Err(reason) => {
                warn!(
                    path = %input.path().display(),
                    group = input.name(),
                    "skipping log: {reason}"
                );
                report.skipped.push(SkippedRun {
                    input: input.clone(),
                    reason,
                });
            }
        }
    }
    info!(
        groups = report.groups.len(),
        runs = report.groups.run_count(),
        skipped = report.skipped.len(),
        "loaded logs"
    );
    report
}
