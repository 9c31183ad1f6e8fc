//! Common time axis and flat-hold resampling

use crate::loader::GroupedRuns;
use crate::record::RunRecord;

/// Number of points on the common time axis.
pub const AXIS_POINTS: usize = 500;

/// Uniformly spaced time points from 0 to a maximum, shared by every group.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    points: Vec<f64>,
}

impl TimeAxis {
    /// Build `points` evenly spaced values over `[0, max]`.
    ///
    /// The first value is exactly `0.0` and the last exactly `max`. Fewer
    /// than two points yields `[0.0]`.
    #[must_use]
    pub fn spanning(max: f64, points: usize) -> Self {
        if points < 2 {
            return Self { points: vec![0.0] };
        }
        let last = points - 1;
        #[allow(clippy::cast_precision_loss)]
        let step = max / last as f64;
        #[allow(clippy::cast_precision_loss)]
        let points = (0..points)
            .map(|i| if i == last { max } else { i as f64 * step })
            .collect();
        Self { points }
    }

    /// Axis over `[0, global max elapsed]` with [`AXIS_POINTS`] points.
    ///
    /// Returns `None` when `groups` holds no run.
    #[must_use]
    pub fn for_groups(groups: &GroupedRuns) -> Option<Self> {
        groups
            .max_elapsed()
            .map(|max| Self::spanning(max, AXIS_POINTS))
    }

    /// Time values.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of time values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the axis has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Upper end of the axis.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.points.last().copied().unwrap_or(0.0)
    }
}

/// Value of `run` at time `t` by piecewise-linear interpolation.
///
/// Before the first sample the first value is returned; at or after the
/// last sample the last recorded value is held. Where elapsed times repeat,
/// the later sample wins.
#[must_use]
pub fn interpolate(run: &RunRecord, t: f64) -> f64 {
    let first = run.first();
    if t <= first.elapsed {
        return first.value;
    }
    let last = run.last();
    if t >= last.elapsed {
        return last.value;
    }

    let points = run.points();
    // first.elapsed < t < last.elapsed, so 1 <= idx < len.
    let idx = points.partition_point(|p| p.elapsed <= t);
    let lo = points[idx - 1];
    let hi = points[idx];
    let span = hi.elapsed - lo.elapsed;
    lo.value + (hi.value - lo.value) * (t - lo.elapsed) / span
}

impl RunRecord {
    /// Resample this run onto `axis`.
    #[must_use]
    pub fn resample(&self, axis: &TimeAxis) -> Vec<f64> {
        axis.points().iter().map(|&t| interpolate(self, t)).collect()
    }
}
