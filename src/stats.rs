//! Column-wise mean and population standard deviation
//!
//! Uses Welford's online update so a single sample yields a standard
//! deviation of exactly zero and identical samples yield their own value as
//! the mean.

/// Mean and population standard deviation per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnStats {
    /// Mean of each column
    pub mean: Vec<f64>,
    /// Population standard deviation of each column
    pub std_dev: Vec<f64>,
}

/// Running accumulator for one column.
#[derive(Debug, Clone, Copy)]
struct Welford {
    count: u32,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Welford {
    const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / f64::from(self.count);
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    fn mean(&self) -> f64 {
        // Rounding can push the running mean a hair outside the sample range.
        self.mean.clamp(self.min, self.max)
    }

    fn population_std_dev(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2.max(0.0) / f64::from(self.count)).sqrt()
    }
}

/// Compute per-column statistics over equally long `rows`.
///
/// Column `i` of the result summarizes `rows[*][i]`. Returns empty vectors
/// when `rows` is empty.
///
/// # Panics
///
/// Panics if rows differ in length.
#[must_use]
pub fn column_stats(rows: &[Vec<f64>]) -> ColumnStats {
    let Some(width) = rows.first().map(Vec::len) else {
        return ColumnStats::default();
    };
    let mut acc = vec![Welford::new(); width];
    for row in rows {
        assert_eq!(row.len(), width, "rows must share the same length");
        for (cell, &x) in acc.iter_mut().zip(row) {
            cell.push(x);
        }
    }
    ColumnStats {
        mean: acc.iter().map(Welford::mean).collect(),
        std_dev: acc.iter().map(Welford::population_std_dev).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_has_zero_std() {
        let stats = column_stats(&[vec![1.5, 2.5, 0.1]]);
        assert_eq!(stats.mean, vec![1.5, 2.5, 0.1]);
        assert_eq!(stats.std_dev, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_population_std() {
        // Values 2, 4, 4, 4, 5, 5, 7, 9 have population std 2.
        let rows: Vec<Vec<f64>> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&v| vec![v])
            .collect();
        let stats = column_stats(&rows);
        assert!((stats.mean[0] - 5.0).abs() < 1e-12);
        assert!((stats.std_dev[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values() {
        let rows = vec![vec![0.1], vec![0.1], vec![0.1]];
        let stats = column_stats(&rows);
        assert_eq!(stats.mean[0], 0.1);
        assert_eq!(stats.std_dev[0], 0.0);
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(column_stats(&[]), ColumnStats::default());
    }
}
