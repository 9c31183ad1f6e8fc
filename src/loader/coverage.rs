//! Coverage log parser
//!
//! Comma-separated, one header row, seven positional columns. The final row
//! is a trailer written while the run was still going and is dropped before
//! any field is looked at.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::record::{RunRecord, SamplePoint};
use crate::{Error, Result};

/// Number of columns in a coverage row.
pub const COVERAGE_COLUMNS: usize = 7;

/// Timestamp layout: date and time joined by an underscore.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S%.f";

const MICROS_PER_MINUTE: f64 = 60.0 * 1_000_000.0;

/// One data row of a coverage log, by position.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CoverageRow {
    /// Wall-clock timestamp, e.g. `2024-05-01_12:00:00`
    pub timestamp: String,
    /// Lines executed
    pub lines_hit: u64,
    /// Instrumented lines
    pub lines_total: u64,
    /// Functions executed
    pub functions_hit: u64,
    /// Instrumented functions
    pub functions_total: u64,
    /// Branches taken (the plotted metric)
    pub branches_hit: f64,
    /// Instrumented branches
    pub branches_total: u64,
}

/// Parse a coverage timestamp.
///
/// # Errors
///
/// Returns `Error::InvalidTimestamp` if `raw` does not match
/// [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(raw: &str, line: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        Error::InvalidTimestamp {
            line,
            value: raw.to_string(),
        }
    })
}

/// Load a coverage log from disk, keeping `(elapsed minutes, branches_hit)`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any kept row is
/// malformed. Callers skip the file on error.
pub fn load_coverage<P: AsRef<Path>>(path: P) -> Result<RunRecord> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenLog {
        path: path.to_path_buf(),
        source,
    })?;
    let run = parse_coverage(file)?;
    debug!(
        path = %path.display(),
        rows = run.len(),
        minutes = run.max_elapsed(),
        "loaded coverage log"
    );
    Ok(run)
}

/// Parse coverage log content from any reader.
///
/// # Errors
///
/// See [`load_coverage`].
pub fn parse_coverage<R: Read>(reader: R) -> Result<RunRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    // Trailer row is never interpreted.
    let Some((_trailer, rows)) = records.split_last() else {
        return Err(Error::EmptyLog);
    };
    if rows.is_empty() {
        return Err(Error::EmptyLog);
    }

    let mut origin: Option<NaiveDateTime> = None;
    let mut points = Vec::with_capacity(rows.len());
    for (idx, record) in rows.iter().enumerate() {
        // Header occupies line 1.
        let line = idx + 2;
        if record.len() != COVERAGE_COLUMNS {
            return Err(Error::MalformedRow {
                line,
                reason: format!(
                    "expected {COVERAGE_COLUMNS} columns, found {}",
                    record.len()
                ),
            });
        }
        let row: CoverageRow = record.deserialize(None).map_err(|e| Error::MalformedRow {
            line,
            reason: e.to_string(),
        })?;

        let timestamp = parse_timestamp(&row.timestamp, line)?;
        let start = *origin.get_or_insert(timestamp);
        let micros = (timestamp - start)
            .num_microseconds()
            .ok_or_else(|| Error::MalformedRow {
                line,
                reason: "timestamp too far from first row".to_string(),
            })?;

        #[allow(clippy::cast_precision_loss)]
        let elapsed = micros as f64 / MICROS_PER_MINUTE;
        points.push(SamplePoint::new(elapsed, row.branches_hit));
    }

    RunRecord::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "timestamp,lines_hit,lines_total,functions_hit,functions_total,branches_hit,branches_total\n";

    fn parse(body: &str) -> Result<RunRecord> {
        parse_coverage(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_parse_drops_trailer() {
        let run = parse(
            "2024-05-01_12:00:00,10,100,1,10,10,50\n\
             2024-05-01_12:01:00,20,100,2,10,20,50\n\
             2024-05-01_12:02:00,30,100,3,10,30,50\n",
        )
        .unwrap();
        assert_eq!(run.len(), 2);
        assert_eq!(run.first(), SamplePoint::new(0.0, 10.0));
        assert_eq!(run.last(), SamplePoint::new(1.0, 20.0));
    }

    #[test]
    fn test_trailer_may_be_incomplete() {
        let run = parse(
            "2024-05-01_12:00:00,10,100,1,10,10,50\n\
             2024-05-01_12:00:30,20,100,2,10,20,50\n\
             2024-05-01_12:01\n",
        )
        .unwrap();
        assert_eq!(run.len(), 2);
        assert!((run.max_elapsed() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_fractional_seconds() {
        let run = parse(
            "2024-05-01_12:00:00.000,1,1,1,1,1,1\n\
             2024-05-01_12:00:03.000,1,1,1,1,2,1\n\
             2024-05-01_12:00:06,1,1,1,1,3,1\n",
        )
        .unwrap();
        assert!((run.max_elapsed() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_single_row_is_empty() {
        let err = parse("2024-05-01_12:00:00,10,100,1,10,10,50\n").unwrap_err();
        assert!(matches!(err, Error::EmptyLog));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(matches!(parse("").unwrap_err(), Error::EmptyLog));
    }

    #[test]
    fn test_bad_timestamp_reports_line() {
        let err = parse(
            "2024-05-01_12:00:00,10,100,1,10,10,50\n\
             yesterday,20,100,2,10,20,50\n\
             2024-05-01_12:02:00,30,100,3,10,30,50\n",
        )
        .unwrap_err();
        match err {
            Error::InvalidTimestamp { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = parse(
            "2024-05-01_12:00:00,10,100\n\
             2024-05-01_12:01:00,20,100,2,10,20,50\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_counter_is_malformed() {
        let err = parse(
            "2024-05-01_12:00:00,10,100,1,10,lots,50\n\
             2024-05-01_12:01:00,20,100,2,10,20,50\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_clock_going_backwards_is_rejected() {
        let err = parse(
            "2024-05-01_12:05:00,10,100,1,10,10,50\n\
             2024-05-01_12:01:00,20,100,2,10,20,50\n\
             2024-05-01_12:06:00,20,100,2,10,20,50\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn test_parse_timestamp_space_rejected() {
        assert!(parse_timestamp("2024-05-01 12:00:00", 2).is_err());
        assert!(parse_timestamp("2024-05-01_12:00:00", 2).is_ok());
    }
}
