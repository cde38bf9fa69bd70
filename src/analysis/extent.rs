//! Range scans over the dataset.
//!
//! Each function is a single pass over the records. Empty input yields
//! `None`; callers validate the dataset before getting here, so the chart
//! code can treat `None` as an error.

use crate::model::{Dataset, MonthlyVarianceRecord};

// ---------------------------------------------------------------------------
// Extents
// ---------------------------------------------------------------------------

/// Smallest and largest variance.
pub fn variance_extent(records: &[MonthlyVarianceRecord]) -> Option<(f64, f64)> {
    records.iter().map(|r| r.variance).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Earliest and latest year.
pub fn year_extent(records: &[MonthlyVarianceRecord]) -> Option<(i32, i32)> {
    let min = records.iter().map(|r| r.year).min()?;
    let max = records.iter().map(|r| r.year).max()?;
    Some((min, max))
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Everything the renderer and the logs need to know about the ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub min_variance: f64,
    pub max_variance: f64,
    pub base_temperature: f64,
}

impl DatasetSummary {
    /// `None` for an empty dataset.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let (first_year, last_year) = year_extent(&dataset.monthly_variance)?;
        let (min_variance, max_variance) = variance_extent(&dataset.monthly_variance)?;
        Some(Self {
            record_count: dataset.len(),
            first_year,
            last_year,
            min_variance,
            max_variance,
            base_temperature: dataset.base_temperature,
        })
    }

    pub fn min_temperature(&self) -> f64 {
        self.min_variance + self.base_temperature
    }

    pub fn max_temperature(&self) -> f64 {
        self.max_variance + self.base_temperature
    }

    /// Number of year columns the cells are laid out in.
    pub fn column_count(&self) -> f64 {
        self.record_count as f64 / 12.0
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {}-{}, variance {:.3}..{:.3}℃, temperature {:.2}..{:.2}℃",
            self.record_count,
            self.first_year,
            self.last_year,
            self.min_variance,
            self.max_variance,
            self.min_temperature(),
            self.max_temperature()
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u32, variance: f64) -> MonthlyVarianceRecord {
        MonthlyVarianceRecord { year, month, variance }
    }

    #[test]
    fn test_extents_of_empty_slice_are_none() {
        assert_eq!(variance_extent(&[]), None);
        assert_eq!(year_extent(&[]), None);
    }

    #[test]
    fn test_single_record_extent_is_degenerate() {
        let records = [record(1900, 6, 0.25)];
        assert_eq!(variance_extent(&records), Some((0.25, 0.25)));
        assert_eq!(year_extent(&records), Some((1900, 1900)));
    }

    #[test]
    fn test_extent_ignores_record_order() {
        let records = [
            record(1850, 3, 0.4),
            record(1753, 1, -6.976),
            record(2015, 9, 5.228),
            record(1900, 12, -0.1),
        ];
        assert_eq!(variance_extent(&records), Some((-6.976, 5.228)));
        assert_eq!(year_extent(&records), Some((1753, 2015)));
    }

    #[test]
    fn test_summary_shifts_extent_by_base_temperature() {
        let dataset = Dataset {
            base_temperature: 8.66,
            monthly_variance: vec![record(1900, 1, -0.5), record(1901, 1, 1.5)],
        };
        let summary = DatasetSummary::from_dataset(&dataset).expect("non-empty dataset");
        assert!((summary.min_temperature() - 8.16).abs() < 1e-9);
        assert!((summary.max_temperature() - 10.16).abs() < 1e-9);
        assert_eq!(summary.first_year, 1900);
        assert_eq!(summary.last_year, 1901);
    }
}
