//! Core data types for the temperature heat map.
//!
//! This module defines the shared domain model imported by all other modules:
//! the dataset snapshot, the month label table, and the error type. It has
//! no I/O. Loading lives in `ingest`, drawing in `render`.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Month labels
// ---------------------------------------------------------------------------

/// Month labels used by the y axis and the tooltip. Index 0 is January.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label for a 1-based month number. `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Dataset types
// ---------------------------------------------------------------------------

/// One entry of the `monthlyVariance` array.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MonthlyVarianceRecord {
    pub year: i32,
    pub month: u32,     // 1 = January
    pub variance: f64,  // °C offset from the base temperature
}

/// The whole payload: a base temperature plus every monthly reading.
///
/// Loaded once and treated as a read-only snapshot for the rest of the run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVarianceRecord>,
}

impl Dataset {
    /// Absolute temperature for a record: variance plus the base temperature.
    pub fn absolute_temperature(&self, record: &MonthlyVarianceRecord) -> f64 {
        record.variance + self.base_temperature
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Checks the invariants the renderer relies on: at least one record,
    /// every month in 1..=12, every variance finite.
    pub fn validate(&self) -> Result<(), HeatMapError> {
        if self.monthly_variance.is_empty() {
            return Err(HeatMapError::EmptyDataset);
        }
        if !self.base_temperature.is_finite() {
            return Err(HeatMapError::ParseError(format!(
                "baseTemperature is not a finite number: {}",
                self.base_temperature
            )));
        }
        for record in &self.monthly_variance {
            if month_name(record.month).is_none() {
                return Err(HeatMapError::InvalidMonth {
                    year: record.year,
                    month: record.month,
                });
            }
            if !record.variance.is_finite() {
                return Err(HeatMapError::NonFiniteVariance {
                    year: record.year,
                    month: record.month,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while loading the dataset or producing the chart.
#[derive(Debug, PartialEq)]
pub enum HeatMapError {
    /// Non-2xx HTTP response from the data host.
    HttpError(u16),
    /// The request never produced a response (DNS, TLS, timeout).
    RequestError(String),
    /// The body could not be deserialized into a `Dataset`.
    ParseError(String),
    /// `monthlyVariance` was present but empty.
    EmptyDataset,
    /// A record whose month has no label.
    InvalidMonth { year: i32, month: u32 },
    /// A record whose variance is NaN or infinite.
    NonFiniteVariance { year: i32, month: u32 },
    /// The configuration file could not be read or holds invalid values.
    ConfigError(String),
    /// Reading the input file or writing the output failed.
    IoError(String),
}

impl std::fmt::Display for HeatMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeatMapError::HttpError(code) => write!(f, "HTTP error: {}", code),
            HeatMapError::RequestError(msg) => write!(f, "Request failed: {}", msg),
            HeatMapError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            HeatMapError::EmptyDataset => write!(f, "No data: monthlyVariance is empty"),
            HeatMapError::InvalidMonth { year, month } => {
                write!(f, "Invalid month {} in record for year {}", month, year)
            }
            HeatMapError::NonFiniteVariance { year, month } => {
                write!(f, "Non-finite variance in record {}-{:02}", year, month)
            }
            HeatMapError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            HeatMapError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for HeatMapError {}

impl From<reqwest::Error> for HeatMapError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => HeatMapError::HttpError(status.as_u16()),
            None if err.is_decode() => HeatMapError::ParseError(err.to_string()),
            None => HeatMapError::RequestError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for HeatMapError {
    fn from(err: serde_json::Error) -> Self {
        HeatMapError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for HeatMapError {
    fn from(err: toml::de::Error) -> Self {
        HeatMapError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for HeatMapError {
    fn from(err: std::io::Error) -> Self {
        HeatMapError::IoError(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
