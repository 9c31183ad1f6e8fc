//! Two-group comparison report
//!
//! When exactly two groups are aggregated, reports each group's final mean
//! and the axis points where the mean curves are furthest apart.

use std::fmt;

use serde::Serialize;

use crate::aggregate::{AggregateCurve, Aggregation};

/// Default number of gap rows in the report.
pub const DEFAULT_TOP_GAPS: usize = 5;

/// Summary of one compared group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Group name
    pub name: String,
    /// Runs averaged into the curve
    pub runs: usize,
    /// Mean value at the end of the axis
    pub final_mean: f64,
}

impl From<&AggregateCurve> for GroupSummary {
    fn from(curve: &AggregateCurve) -> Self {
        Self {
            name: curve.name().to_string(),
            runs: curve.runs(),
            final_mean: curve.final_mean(),
        }
    }
}

/// One of the largest gaps between the two mean curves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    /// 1-based rank, largest gap first
    pub rank: usize,
    /// Absolute difference of the means
    pub gap: f64,
    /// Axis time of the gap
    pub time: f64,
    /// Group with the higher mean (the second group on ties)
    pub leader: String,
}

/// Comparison of exactly two groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// First group in command-line order
    pub first: GroupSummary,
    /// Second group in command-line order
    pub second: GroupSummary,
    /// Largest gaps, descending
    pub gaps: Vec<Gap>,
}

/// Result of attempting a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    /// Exactly two groups were compared
    Compared(Comparison),
    /// Fewer than two groups (count given)
    TooFewGroups(usize),
    /// More than two groups (count given)
    TooManyGroups(usize),
}

/// Compare the two groups of `aggregation`, listing the `top` largest gaps.
#[must_use]
pub fn compare(aggregation: &Aggregation, top: usize) -> CompareOutcome {
    let [a, b] = aggregation.curves() else {
        let count = aggregation.curves().len();
        return if count < 2 {
            CompareOutcome::TooFewGroups(count)
        } else {
            CompareOutcome::TooManyGroups(count)
        };
    };

    let mut diffs: Vec<(usize, f64)> = a
        .mean()
        .iter()
        .zip(b.mean())
        .map(|(x, y)| (x - y).abs())
        .enumerate()
        .collect();
    // Stable sort: equal gaps keep axis order.
    diffs.sort_by(|l, r| r.1.total_cmp(&l.1));

    let times = aggregation.axis().points();
    let gaps = diffs
        .into_iter()
        .take(top)
        .enumerate()
        .map(|(rank, (idx, gap))| {
            let leader = if a.mean()[idx] > b.mean()[idx] { a } else { b };
            Gap {
                rank: rank + 1,
                gap,
                time: times[idx],
                leader: leader.name().to_string(),
            }
        })
        .collect();

    CompareOutcome::Compared(Comparison {
        first: a.into(),
        second: b.into(),
        gaps,
    })
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Two-group comparison ---")?;
        for (label, group) in [("Group 1", &self.first), ("Group 2", &self.second)] {
            writeln!(
                f,
                "{label}: {} (mean of {} runs)",
                group.name, group.runs
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Final branches hit:")?;
        writeln!(f, "  - {}: {:.2}", self.first.name, self.first.final_mean)?;
        writeln!(f, "  - {}: {:.2}", self.second.name, self.second.final_mean)?;
        writeln!(f)?;
        writeln!(f, "Top {} gaps between mean curves:", self.gaps.len())?;
        writeln!(f, "| Rank | Gap (branches) | Time (minutes) | Leader |")?;
        writeln!(f, "| :--: | :------------: | :------------: | :----: |")?;
        for gap in &self.gaps {
            writeln!(
                f,
                "| {} | {:.2} | {:.2} | {} |",
                gap.rank, gap.gap, gap.time, gap.leader
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for CompareOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compared(comparison) => write!(f, "{comparison}"),
            Self::TooFewGroups(count) => writeln!(
                f,
                "Note: {count} group(s) loaded; two-group comparison skipped."
            ),
            Self::TooManyGroups(count) => writeln!(
                f,
                "Note: {count} groups loaded; all curves plotted but two-group comparison skipped."
            ),
        }
    }
}
