//! Run Record - one parsed log file as an (elapsed, value) series
//!
//! A `RunRecord` is built once per input file and never mutated. The
//! constructor enforces the invariants every later stage relies on:
//!
//! - at least one sample
//! - the first sample sits at elapsed time `0.0`
//! - elapsed times never decrease
//! - every coordinate is finite

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single (elapsed time, metric value) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Elapsed time since the first sample (minutes, or row index)
    pub elapsed: f64,
    /// Metric value at that time
    pub value: f64,
}

impl SamplePoint {
    /// Create a new sample point.
    #[must_use]
    pub const fn new(elapsed: f64, value: f64) -> Self {
        Self { elapsed, value }
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((elapsed, value): (f64, f64)) -> Self {
        Self { elapsed, value }
    }
}

/// Run Record represents the time series of a single log file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    points: Vec<SamplePoint>,
}

impl RunRecord {
    /// Create a run record from ordered sample points.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyLog` when `points` is empty and
    /// `Error::InvalidSeries` when the series does not start at zero,
    /// goes backwards in time, or contains non-finite numbers.
    pub fn new(points: Vec<SamplePoint>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(Error::EmptyLog);
        };
        if first.elapsed != 0.0 {
            return Err(Error::InvalidSeries(format!(
                "first sample must be at elapsed 0, found {}",
                first.elapsed
            )));
        }
        if let Some((idx, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.elapsed.is_finite() || !p.value.is_finite())
        {
            return Err(Error::InvalidSeries(format!(
                "non-finite sample ({}, {}) at index {idx}",
                p.elapsed, p.value
            )));
        }
        if let Some(idx) = points.windows(2).position(|w| w[1].elapsed < w[0].elapsed) {
            return Err(Error::InvalidSeries(format!(
                "elapsed time goes backwards at index {}: {} < {}",
                idx + 1,
                points[idx + 1].elapsed,
                points[idx].elapsed
            )));
        }
        Ok(Self { points })
    }

    /// Build a run record from a `(elapsed, value)` iterator.
    ///
    /// # Errors
    ///
    /// Same as [`RunRecord::new`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(pairs.into_iter().map(SamplePoint::from).collect())
    }

    /// All sample points, ordered by elapsed time.
    #[must_use]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    /// Number of samples (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the run holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First sample (elapsed time `0.0`).
    #[must_use]
    pub fn first(&self) -> SamplePoint {
        self.points[0]
    }

    /// Last recorded sample.
    #[must_use]
    pub fn last(&self) -> SamplePoint {
        self.points[self.points.len() - 1]
    }

    /// Largest elapsed time in the run.
    #[must_use]
    pub fn max_elapsed(&self) -> f64 {
        self.last().elapsed
    }

    /// Iterate the series as `(elapsed, value)` tuples.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.elapsed, p.value))
    }
}
