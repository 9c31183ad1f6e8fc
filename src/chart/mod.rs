//! Chart model and rendering
//!
//! A [`ChartSpec`] is a title, two axis descriptions and a list of labelled
//! [`Curve`]s. Each curve is drawn as a line; a curve with a band also gets
//! the region between its lower and upper bounds shaded in the same colour.
//!
//! ```rust
//! use covplot::chart::{ChartSpec, Curve};
//!
//! let mut spec = ChartSpec::new("Valid Packets Analysis", "Time (minutes)", "Valid Packets");
//! spec.push_curve(Curve::line("run-1", vec![(0.0, 3.0), (1.0, 5.0)]));
//! assert_eq!(spec.curves().len(), 1);
//! ```

mod render;

use crate::aggregate::Aggregation;
use crate::record::RunRecord;

pub use render::{render, DPI, HEIGHT_INCHES, OUTPUT_SIZE, WIDTH_INCHES};

/// Default title for coverage charts.
pub const COVERAGE_TITLE: &str = "Coverage Analysis";
/// Default title for validation charts.
pub const VALIDATION_TITLE: &str = "Valid Packets Analysis";

const TIME_AXIS_DESC: &str = "Time (minutes)";

/// Opacity of the standard deviation band.
pub const BAND_OPACITY: f64 = 0.2;

/// One labelled line, optionally with a shaded band.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    label: String,
    points: Vec<(f64, f64)>,
    band: Option<Vec<(f64, f64, f64)>>,
}

impl Curve {
    /// Plain line.
    #[must_use]
    pub fn line(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
            band: None,
        }
    }

    /// Line with a shaded band of `(x, low, high)` triples.
    #[must_use]
    pub fn with_band(
        label: impl Into<String>,
        points: Vec<(f64, f64)>,
        band: Vec<(f64, f64, f64)>,
    ) -> Self {
        Self {
            label: label.into(),
            points,
            band: Some(band),
        }
    }

    /// Legend label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Line points.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Band triples, if any.
    #[must_use]
    pub fn band(&self) -> Option<&[(f64, f64, f64)]> {
        self.band.as_deref()
    }

    fn x_extent(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    fn y_extent(&self) -> impl Iterator<Item = f64> + '_ {
        let band = self
            .band
            .iter()
            .flatten()
            .flat_map(|&(_, lo, hi)| [lo, hi]);
        self.points.iter().map(|&(_, y)| y).chain(band)
    }
}

/// Everything needed to draw one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    title: String,
    x_desc: String,
    y_desc: String,
    curves: Vec<Curve>,
}

impl ChartSpec {
    /// Empty chart with a title and axis descriptions.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_desc: impl Into<String>,
        y_desc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_desc: x_desc.into(),
            y_desc: y_desc.into(),
            curves: Vec::new(),
        }
    }

    /// Coverage chart: one mean line per group, shaded `mean ± std` for
    /// groups of more than one run.
    #[must_use]
    pub fn coverage(title: impl Into<String>, aggregation: &Aggregation) -> Self {
        let mut spec = Self::new(title, TIME_AXIS_DESC, "Branches Hit (Mean)");
        let times = aggregation.axis().points();
        for curve in aggregation.curves() {
            let points = times.iter().copied().zip(curve.mean().iter().copied()).collect();
            let curve = if curve.runs() > 1 {
                let band = times
                    .iter()
                    .zip(curve.band())
                    .map(|(&t, (lo, hi))| (t, lo, hi))
                    .collect();
                Curve::with_band(curve.name(), points, band)
            } else {
                Curve::line(curve.name(), points)
            };
            spec.push_curve(curve);
        }
        spec
    }

    /// Validation chart: one raw line per `(label, run)`.
    #[must_use]
    pub fn validation<'a, I>(title: impl Into<String>, runs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RunRecord)>,
    {
        let mut spec = Self::new(title, TIME_AXIS_DESC, "Valid Packets");
        for (label, run) in runs {
            spec.push_curve(Curve::line(label, run.pairs().collect()));
        }
        spec
    }

    /// Add a curve; curves are drawn and coloured in insertion order.
    pub fn push_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// Chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// X axis description.
    #[must_use]
    pub fn x_desc(&self) -> &str {
        &self.x_desc
    }

    /// Y axis description.
    #[must_use]
    pub fn y_desc(&self) -> &str {
        &self.y_desc
    }

    /// Curves in drawing order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// `(x range, y range)` covering every line and band, padded so flat
    /// data still gets a non-empty range.
    #[must_use]
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let (x_lo, x_hi) = extent(self.curves.iter().flat_map(Curve::x_extent));
        let (y_lo, y_hi) = extent(self.curves.iter().flat_map(Curve::y_extent));
        let x_hi = if x_hi > x_lo { x_hi } else { x_lo + 1.0 };
        let pad = if y_hi > y_lo { (y_hi - y_lo) * 0.05 } else { 1.0 };
        ((x_lo, x_hi), (y_lo - pad, y_hi + pad))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 0.0)
    }
}
