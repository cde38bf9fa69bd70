//! Structured logging for the heat map renderer
//!
//! Every message carries the pipeline stage it came from. Supports console
//! output (plain or timestamped) and an optional append-only log file.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use crate::model::HeatMapError;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline Stages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Parse,
    Scale,
    Render,
    System,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fetch => write!(f, "FETCH"),
            Stage::Parse => write!(f, "PARSE"),
            Stage::Scale => write!(f, "SCALE"),
            Stage::Render => write!(f, "RENDER"),
            Stage::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - the host is reachable but the payload was unusable
    Expected,
    /// Unexpected failure - transport or server trouble
    Unexpected,
    /// Unknown - cannot tell which
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut slot) = LOGGER.lock() {
            *slot = Some(logger);
        }
    }

    fn format_entry(level: LogLevel, stage: Stage, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        format!("{} {} {}: {}", timestamp, level, stage, message)
    }

    fn log(&self, level: LogLevel, stage: Stage, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, stage, message);

        // Console output. Stdout may carry the rendered chart, so everything
        // goes to stderr.
        if self.console_timestamps {
            eprintln!("{}", log_entry);
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}: {}", stage, message),
                LogLevel::Warning => eprintln!("   ⚠ {}: {}", stage, message),
                LogLevel::Info => eprintln!("   {}", message),
                LogLevel::Debug => eprintln!("   [DEBUG] {}", message),
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn emit(level: LogLevel, stage: Stage, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, stage, message);
        }
    }
}

/// Log a general informational message
pub fn info(stage: Stage, message: &str) {
    emit(LogLevel::Info, stage, message);
}

/// Log a warning message
pub fn warn(stage: Stage, message: &str) {
    emit(LogLevel::Warning, stage, message);
}

/// Log an error message
pub fn error(stage: Stage, message: &str) {
    emit(LogLevel::Error, stage, message);
}

/// Log a debug message
pub fn debug(stage: Stage, message: &str) {
    emit(LogLevel::Debug, stage, message);
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify a dataset loading failure.
///
/// A payload that arrived but failed validation is expected (the host is
/// fine, the data isn't). Transport and server errors are unexpected.
pub fn classify_load_failure(err: &HeatMapError) -> FailureType {
    match err {
        HeatMapError::EmptyDataset
        | HeatMapError::InvalidMonth { .. }
        | HeatMapError::NonFiniteVariance { .. } => FailureType::Expected,
        HeatMapError::HttpError(code) if *code >= 500 => FailureType::Unexpected,
        HeatMapError::RequestError(_) | HeatMapError::ParseError(_) => FailureType::Unexpected,
        _ => FailureType::Unknown,
    }
}

/// The stage a loading error belongs to.
fn stage_for(err: &HeatMapError) -> Stage {
    match err {
        HeatMapError::HttpError(_) | HeatMapError::RequestError(_) => Stage::Fetch,
        HeatMapError::ConfigError(_) | HeatMapError::IoError(_) => Stage::System,
        _ => Stage::Parse,
    }
}

/// Log a dataset loading failure with automatic classification
pub fn log_load_failure(source: &str, err: &HeatMapError) {
    let failure_type = classify_load_failure(err);
    let message = format!("loading {} failed [{}]: {}", source, failure_type, err);

    match failure_type {
        FailureType::Expected => warn(stage_for(err), &message),
        FailureType::Unexpected => error(stage_for(err), &message),
        FailureType::Unknown => warn(stage_for(err), &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_parses_config_spellings() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_failure_classification() {
        assert_eq!(classify_load_failure(&HeatMapError::EmptyDataset), FailureType::Expected);
        assert_eq!(classify_load_failure(&HeatMapError::HttpError(503)), FailureType::Unexpected);
        assert_eq!(classify_load_failure(&HeatMapError::HttpError(404)), FailureType::Unknown);
        assert_eq!(
            classify_load_failure(&HeatMapError::RequestError("timed out".into())),
            FailureType::Unexpected
        );
    }

    #[test]
    fn test_log_entry_carries_level_and_stage() {
        let entry = Logger::format_entry(LogLevel::Warning, Stage::Fetch, "slow host");
        assert!(entry.ends_with("WARN FETCH: slow host"), "got {}", entry);
        assert!(entry.contains("UTC"));
    }
}
