//! Validation log parser
//!
//! Space-separated, no header, two columns: an ignored field followed by
//! the valid packet count. The x axis is the zero-based row index.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::record::{RunRecord, SamplePoint};
use crate::{Error, Result};

/// Number of columns in a validation row.
pub const VALIDATION_COLUMNS: usize = 2;

/// Load a validation log from disk, optionally keeping only the first
/// `limit` rows. A limit of `0` keeps every row.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row is malformed.
/// Rows past `limit` are still parsed and can still fail.
pub fn load_validation<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<RunRecord> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::OpenLog {
        path: path.to_path_buf(),
        source,
    })?;
    let run = parse_validation(file, limit)?;
    debug!(path = %path.display(), rows = run.len(), "loaded validation log");
    Ok(run)
}

/// Parse validation log content from any reader.
///
/// # Errors
///
/// See [`load_validation`].
pub fn parse_validation<R: Read>(reader: R, limit: Option<usize>) -> Result<RunRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .from_reader(reader);

    let mut points = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        if record.len() != VALIDATION_COLUMNS {
            return Err(Error::MalformedRow {
                line,
                reason: format!(
                    "expected {VALIDATION_COLUMNS} space-separated columns, found {}",
                    record.len()
                ),
            });
        }
        let (_, valid_packets): (String, f64) =
            record.deserialize(None).map_err(|e| Error::MalformedRow {
                line,
                reason: e.to_string(),
            })?;

        #[allow(clippy::cast_precision_loss)]
        points.push(SamplePoint::new(idx as f64, valid_packets));
    }

    if let Some(limit) = limit.filter(|&n| n > 0) {
        points.truncate(limit);
    }
    RunRecord::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> String {
        (0..n).map(|i| format!("{} {}\n", 1000 + i, i * 3)).collect()
    }

    #[test]
    fn test_row_index_is_elapsed() {
        let run = parse_validation("a 5\nb 7\nc 9\n".as_bytes(), None).unwrap();
        let pairs: Vec<_> = run.pairs().collect();
        assert_eq!(pairs, vec![(0.0, 5.0), (1.0, 7.0), (2.0, 9.0)]);
    }

    #[test]
    fn test_limit_truncates() {
        let run = parse_validation(rows(100).as_bytes(), Some(10)).unwrap();
        assert_eq!(run.len(), 10);
        assert!((run.max_elapsed() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limit_larger_than_file() {
        let run = parse_validation(rows(4).as_bytes(), Some(10)).unwrap();
        assert_eq!(run.len(), 4);
    }

    #[test]
    fn test_zero_limit_keeps_everything() {
        let run = parse_validation(rows(25).as_bytes(), Some(0)).unwrap();
        assert_eq!(run.len(), 25);
    }

    #[test]
    fn test_non_numeric_is_malformed() {
        let err = parse_validation("1 5\n2 many\n".as_bytes(), None).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_wrong_column_count() {
        let err = parse_validation("1 5 6\n".as_bytes(), None).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_validation("".as_bytes(), None).unwrap_err(),
            Error::EmptyLog
        ));
    }
}
