//! Series alignment and aggregation
//!
//! Second pipeline phase. Every run of every group is resampled onto one
//! [`TimeAxis`] spanning `[0, global max elapsed]`, then mean and
//! population standard deviation are taken per group at each axis point.
//! Curves of different groups therefore line up point for point.
//!
//! ```rust
//! use covplot::aggregate::aggregate;
//! use covplot::loader::GroupedRuns;
//! use covplot::record::RunRecord;
//!
//! let mut groups = GroupedRuns::new();
//! groups.push("A", RunRecord::from_pairs([(0.0, 10.0), (1.0, 20.0)])?);
//! groups.push("B", RunRecord::from_pairs([(0.0, 5.0), (2.0, 15.0)])?);
//!
//! let aggregation = aggregate(&groups)?;
//! assert_eq!(aggregation.axis().max(), 2.0);
//! assert_eq!(aggregation.curve("A").unwrap().mean().last(), Some(&20.0));
//! # Ok::<(), covplot::Error>(())
//! ```

mod time_axis;

use serde::Serialize;
use tracing::debug;

use crate::loader::GroupedRuns;
use crate::stats::column_stats;
use crate::{Error, Result};

pub use time_axis::{interpolate, TimeAxis, AXIS_POINTS};

/// Mean and standard deviation of one group over the common axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateCurve {
    name: String,
    runs: usize,
    mean: Vec<f64>,
    std_dev: Vec<f64>,
}

impl AggregateCurve {
    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of runs averaged.
    #[must_use]
    pub const fn runs(&self) -> usize {
        self.runs
    }

    /// Mean value per axis point.
    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Population standard deviation per axis point.
    #[must_use]
    pub fn std_dev(&self) -> &[f64] {
        &self.std_dev
    }

    /// Mean at the last axis point.
    #[must_use]
    pub fn final_mean(&self) -> f64 {
        self.mean.last().copied().unwrap_or(0.0)
    }

    /// `(mean - std, mean + std)` per axis point.
    pub fn band(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mean
            .iter()
            .zip(&self.std_dev)
            .map(|(m, s)| (m - s, m + s))
    }
}

/// Aggregated curves of every group on a shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    axis: TimeAxis,
    curves: Vec<AggregateCurve>,
}

impl Aggregation {
    /// Common time axis.
    #[must_use]
    pub const fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Curves in group order.
    #[must_use]
    pub fn curves(&self) -> &[AggregateCurve] {
        &self.curves
    }

    /// Curve for the group called `name`.
    #[must_use]
    pub fn curve(&self, name: &str) -> Option<&AggregateCurve> {
        self.curves.iter().find(|c| c.name == name)
    }
}

/// Resample every run onto the common axis and aggregate per group.
///
/// # Errors
///
/// Returns `Error::NoRuns` when `groups` holds no run at all.
pub fn aggregate(groups: &GroupedRuns) -> Result<Aggregation> {
    let axis = TimeAxis::for_groups(groups).ok_or(Error::NoRuns)?;
    debug!(max = axis.max(), points = axis.len(), "common time axis");

    let curves = groups
        .iter()
        .map(|(name, runs)| {
            let resampled: Vec<Vec<f64>> = runs.iter().map(|run| run.resample(&axis)).collect();
            let stats = column_stats(&resampled);
            debug!(group = name, runs = runs.len(), "aggregated group");
            AggregateCurve {
                name: name.to_string(),
                runs: runs.len(),
                mean: stats.mean,
                std_dev: stats.std_dev,
            }
        })
        .collect();

    Ok(Aggregation { axis, curves })
}
