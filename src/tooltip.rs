//! Hover tooltip content for a single heat map cell.

use crate::format::to_fixed;
use crate::model::{MonthlyVarianceRecord, month_name};

/// The three lines shown when hovering a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// "1900 - January"
    pub heading: String,
    /// Absolute temperature, e.g. "8.16℃"
    pub temperature: String,
    /// Variance from the base, e.g. "-0.50℃"
    pub variance: String,
}

impl Tooltip {
    pub fn for_record(record: &MonthlyVarianceRecord, base_temperature: f64) -> Self {
        let month = month_name(record.month).unwrap_or("Unknown");
        Self {
            heading: format!("{} - {}", record.year, month),
            temperature: format_celsius(record.variance + base_temperature),
            variance: format_celsius(record.variance),
        }
    }

    /// One `<div>` per line.
    pub fn to_html(&self) -> String {
        format!(
            "<div>{}</div><div>{}</div><div>{}</div>",
            self.heading, self.temperature, self.variance
        )
    }

    /// Newline-separated, for SVG `<title>` elements.
    pub fn to_text(&self) -> String {
        format!("{}\n{}\n{}", self.heading, self.temperature, self.variance)
    }
}

fn format_celsius(value: f64) -> String {
    format!("{}℃", to_fixed(value, 2))
}
