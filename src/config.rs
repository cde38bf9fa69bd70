//! Runtime configuration.
//!
//! Defaults match the fixed canvas of the chart. A TOML file may override
//! any key, then environment variables (after `.env` is loaded), then
//! command-line flags in `main`.

use serde::Deserialize;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::HeatMapError;

/// Public copy of the global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

pub const DEFAULT_WIDTH: f64 = 1500.0;
pub const DEFAULT_HEIGHT: f64 = 625.0;
pub const DEFAULT_PADDING: f64 = 100.0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TITLE: &str = "Monthly Global Land-Surface Temperature";

pub const ENV_DATA_URL: &str = "HEATMAP_DATA_URL";
pub const ENV_OUTPUT: &str = "HEATMAP_OUTPUT";
pub const ENV_LOG_LEVEL: &str = "HEATMAP_LOG_LEVEL";

// ---------------------------------------------------------------------------
// Config sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Canvas geometry shared by every renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full page with the hover tooltip script
    #[default]
    Html,
    /// Standalone SVG, tooltips as `<title>` elements
    Svg,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "heatmap.html".to_string(),
            format: OutputFormat::Html,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn min_level(&self) -> Result<LogLevel, HeatMapError> {
        self.level.parse().map_err(HeatMapError::ConfigError)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub chart: ChartConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a TOML document. Missing keys take their defaults.
pub fn parse_config(text: &str) -> Result<Config, HeatMapError> {
    let config: Config = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Read and parse a configuration file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, HeatMapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        HeatMapError::ConfigError(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&text)
}

impl Config {
    /// Apply `HEATMAP_*` variables on top of the file values. `lookup`
    /// is `std::env::var` in the binary and a fixed table in tests.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATA_URL) {
            self.source.url = url;
        }
        if let Some(path) = lookup(ENV_OUTPUT) {
            self.output.path = path;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), HeatMapError> {
        let ChartConfig { width, height, padding, .. } = self.chart;
        if !(width > 0.0 && height > 0.0 && padding > 0.0) {
            return Err(HeatMapError::ConfigError(format!(
                "chart width, height and padding must be positive (got {} x {}, padding {})",
                width, height, padding
            )));
        }
        if 2.0 * padding >= width || 2.0 * padding >= height {
            return Err(HeatMapError::ConfigError(format!(
                "padding {} leaves no plot area inside {} x {}",
                padding, width, height
            )));
        }
        if self.source.timeout_secs == 0 {
            return Err(HeatMapError::ConfigError("timeout_secs must be at least 1".into()));
        }
        self.logging.min_level()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
