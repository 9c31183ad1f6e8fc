//! Rendering charts to disk

use std::fs;

use covplot::chart::{render, ChartSpec, Curve};
use covplot::Error;
use tempfile::TempDir;

fn spec(title: &str) -> ChartSpec {
    let mut spec = ChartSpec::new(title, "Time (minutes)", "Branches Hit (Mean)");
    spec.push_curve(Curve::with_band(
        "afl",
        vec![(0.0, 10.0), (1.0, 20.0), (2.0, 25.0)],
        vec![(0.0, 9.0, 11.0), (1.0, 18.0, 22.0), (2.0, 24.0, 26.0)],
    ));
    spec.push_curve(Curve::line("libfuzzer", vec![(0.0, 5.0), (2.0, 15.0)]));
    spec
}

fn entries(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_png_carries_rendered_text() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.png");
    let second = dir.path().join("b.png");

    render(&spec("Coverage Analysis"), &first).unwrap();
    render(&spec("Something Else Entirely"), &second).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert!(a.starts_with(b"\x89PNG"));
    assert!(b.starts_with(b"\x89PNG"));
    assert_ne!(a, b, "title text must reach the bitmap");
}

#[test]
fn test_svg_contains_title_and_labels() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("chart.svg");
    render(&spec("Nightly fuzzing"), &out).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Nightly fuzzing"));
    assert!(svg.contains("Time (minutes)"));
    assert!(svg.contains("libfuzzer"));
}

#[test]
fn test_render_leaves_only_the_output() {
    let dir = TempDir::new().unwrap();
    render(&spec("Coverage Analysis"), dir.path().join("cov.png")).unwrap();
    assert_eq!(entries(&dir), vec!["cov.png"]);
}

#[test]
fn test_failed_render_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("chart.unknownformat");

    let err = render(&spec("Coverage Analysis"), &out).unwrap_err();
    assert!(matches!(err, Error::Chart(_)), "got {err:?}");
    assert!(!out.exists());
    assert!(entries(&dir).is_empty());
}

#[test]
fn test_missing_output_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("no-such-dir").join("cov.png");
    assert!(matches!(
        render(&spec("Coverage Analysis"), &out),
        Err(Error::Io(_))
    ));
}
