//! plotters backend for [`ChartSpec`]

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;
use tracing::info;

use super::{ChartSpec, BAND_OPACITY};
use crate::{Error, Result};

/// Figure width in inches.
pub const WIDTH_INCHES: u32 = 10;
/// Figure height in inches.
pub const HEIGHT_INCHES: u32 = 5;
/// Output resolution.
pub const DPI: u32 = 300;
/// Output size in pixels.
pub const OUTPUT_SIZE: (u32, u32) = (WIDTH_INCHES * DPI, HEIGHT_INCHES * DPI);

const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 64;
const LABEL_SIZE: u32 = 36;
const DESC_SIZE: u32 = 44;
const LINE_WIDTH: u32 = 4;

fn chart_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Error {
    Error::Chart(err.to_string())
}

static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static FONT_REGISTRATION: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Make the bundled font available to plotters under [`FONT`].
fn register_fonts() -> Result<()> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT, FontStyle::Normal, BUNDLED_FONT)
                .map_err(|_| "bundled font is not a valid TrueType font".to_string())
        })
        .clone()
        .map_err(Error::Chart)
}

/// Render `spec` to `path`.
///
/// A `.svg` extension selects the SVG backend; anything else is written as
/// a bitmap whose format follows the extension. The chart is drawn into a
/// temporary file next to `path` and renamed into place once the backend
/// has been presented, so a failed render never leaves a partial image.
///
/// # Errors
///
/// Returns `Error::Chart` if the backend fails to draw or encode the image,
/// and `Error::Io` if the output cannot be created or moved into place.
pub fn render<P: AsRef<Path>>(spec: &ChartSpec, path: P) -> Result<()> {
    let path = path.as_ref();
    register_fonts()?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staging = tempfile::Builder::new()
        .prefix(".covplot-")
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?;

    let target = staging.path();
    let drawn = panic::catch_unwind(AssertUnwindSafe(|| {
        if extension == "svg" {
            draw(&SVGBackend::new(target, OUTPUT_SIZE).into_drawing_area(), spec)
        } else {
            draw(&BitMapBackend::new(target, OUTPUT_SIZE).into_drawing_area(), spec)
        }
    }));
    match drawn {
        Ok(result) => result?,
        Err(_) => return Err(Error::Chart("chart backend panicked".to_string())),
    }

    staging.persist(path).map_err(|err| Error::Io(err.error))?;
    info!(path = %path.display(), curves = spec.curves().len(), "chart written");
    Ok(())
}

fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, spec: &ChartSpec) -> Result<()> {
    root.fill(&WHITE).map_err(chart_error)?;

    let ((x_lo, x_hi), (y_lo, y_hi)) = spec.bounds();
    let mut chart = ChartBuilder::on(root)
        .caption(spec.title(), (FONT, TITLE_SIZE))
        .margin(40)
        .x_label_area_size(110)
        .y_label_area_size(160)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_desc())
        .y_desc(spec.y_desc())
        .label_style((FONT, LABEL_SIZE))
        .axis_desc_style((FONT, DESC_SIZE))
        .draw()
        .map_err(chart_error)?;

    for (idx, curve) in spec.curves().iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();

        // Band first so the line sits on top of it.
        if let Some(band) = curve.band() {
            let outline: Vec<(f64, f64)> = band
                .iter()
                .map(|&(x, _, hi)| (x, hi))
                .chain(band.iter().rev().map(|&(x, lo, _)| (x, lo)))
                .collect();
            chart
                .draw_series(std::iter::once(Polygon::new(
                    outline,
                    color.mix(BAND_OPACITY).filled(),
                )))
                .map_err(chart_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                curve.points().iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))
            .map_err(chart_error)?
            .label(curve.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 50, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font((FONT, LABEL_SIZE))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}
