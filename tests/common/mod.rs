//! Fixture log writers shared by the integration tests

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const COVERAGE_HEADER: &str =
    "timestamp,lines_hit,lines_total,functions_hit,functions_total,branches_hit,branches_total";

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

/// Coverage log body for `(minutes, branches_hit)` rows, trailer excluded.
pub fn coverage_log(rows: &[(i64, u64)]) -> String {
    let mut out = format!("{COVERAGE_HEADER}\n");
    for &(minutes, branches) in rows {
        let ts = epoch() + Duration::minutes(minutes);
        writeln!(
            out,
            "{},{},1000,{},100,{branches},500",
            ts.format("%Y-%m-%d_%H:%M:%S"),
            branches * 2,
            branches / 4
        )
        .unwrap();
    }
    out
}

/// Coverage log whose rows are followed by a trailer that gets dropped.
pub fn coverage_log_with_trailer(rows: &[(i64, u64)]) -> String {
    let last = rows.last().map_or(0, |&(m, _)| m + 1);
    let mut out = coverage_log(rows);
    let ts = epoch() + Duration::minutes(last);
    writeln!(out, "{},0,0,0,0,999999,0", ts.format("%Y-%m-%d_%H:%M:%S")).unwrap();
    out
}

/// Validation log with `rows` lines of `<seq> <valid>`.
pub fn validation_log(rows: usize) -> String {
    (0..rows).map(|i| format!("{} {}\n", 5000 * (i + 1), i * 7)).collect()
}

pub fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
