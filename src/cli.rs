//! Command-line flow: resolve config, load the dataset, render, write.
//!
//! `main` only parses flags and maps the returned [`RunStatus`] to an exit
//! code, so the whole flow can be driven from tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::analysis::DatasetSummary;
use crate::config::{self, Config, OutputFormat};
use crate::ingest;
use crate::logging::{self, LogLevel, Stage};
use crate::model::{Dataset, HeatMapError};
use crate::render;

pub const DEFAULT_CONFIG_PATH: &str = "./heatmap.toml";

/// Render the global temperature variance heat map.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Args {
    /// TOML configuration file (defaults to ./heatmap.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset URL, overrides the config file
    #[arg(long)]
    pub url: Option<String>,

    /// Read the dataset from a saved JSON file instead of fetching it
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file, or "-" for stdout
    #[arg(long, short)]
    pub output: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// debug | info | warn | error
    #[arg(long)]
    pub log_level: Option<String>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The chart was written.
    Rendered,
    /// Loading, rendering or writing failed. In HTML mode an error page was
    /// written in place of the chart when possible.
    Failed,
    /// The configuration was rejected before anything was written.
    InvalidConfig,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Rendered => 0,
            RunStatus::Failed => 1,
            RunStatus::InvalidConfig => 2,
        }
    }
}

/// Layers the config: defaults, then the file, then `lookup` (environment
/// variables), then flags. Validated last.
pub fn resolve_config<F>(args: &Args, lookup: F) -> Result<Config, HeatMapError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => config::load_config(DEFAULT_CONFIG_PATH)?,
        None => Config::default(),
    };
    config.apply_overrides(lookup);

    if let Some(url) = &args.url {
        config.source.url = url.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Runs against the process environment.
pub fn run(args: &Args) -> RunStatus {
    run_with_env(args, |key| std::env::var(key).ok())
}

pub fn run_with_env<F>(args: &Args, lookup: F) -> RunStatus
where
    F: Fn(&str) -> Option<String>,
{
    let config = match resolve_config(args, lookup) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ {}", e);
            return RunStatus::InvalidConfig;
        }
    };

    let min_level = config.logging.min_level().unwrap_or(LogLevel::Info);
    logging::init_logger(min_level, config.logging.file.as_deref(), config.logging.timestamps);

    let source = args
        .input
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| config.source.url.clone());

    let dataset = match load(args, &config) {
        Ok(dataset) => dataset,
        Err(e) => {
            logging::log_load_failure(&source, &e);
            if config.output.format == OutputFormat::Html {
                let page = render::render_error_page(&config.chart.title, &e.to_string());
                match write_output(&config.output.path, &page) {
                    Ok(()) => logging::info(
                        Stage::Render,
                        &format!("Wrote error page to {}", config.output.path),
                    ),
                    Err(write_err) => logging::error(Stage::Render, &write_err.to_string()),
                }
            }
            return RunStatus::Failed;
        }
    };

    if let Some(summary) = DatasetSummary::from_dataset(&dataset) {
        logging::info(Stage::Parse, &format!("Loaded {}", summary));
    }

    let output = match render::render(&dataset, &config.chart, config.output.format) {
        Ok(output) => output,
        Err(e) => {
            logging::error(Stage::Scale, &e.to_string());
            return RunStatus::Failed;
        }
    };
    logging::debug(Stage::Render, &format!("Rendered {} bytes", output.len()));

    if let Err(e) = write_output(&config.output.path, &output) {
        logging::error(Stage::System, &e.to_string());
        return RunStatus::Failed;
    }
    logging::info(Stage::Render, &format!("Wrote heat map to {}", config.output.path));
    RunStatus::Rendered
}

fn load(args: &Args, config: &Config) -> Result<Dataset, HeatMapError> {
    match &args.input {
        Some(path) => {
            logging::info(Stage::Fetch, &format!("Reading dataset from {}", path.display()));
            ingest::load_dataset_file(path)
        }
        None => {
            logging::info(Stage::Fetch, &format!("Fetching dataset from {}", config.source.url));
            let client = ingest::build_client(Duration::from_secs(config.source.timeout_secs))?;
            ingest::fetch_dataset(&client, &config.source.url)
        }
    }
}

fn write_output(path: &str, contents: &str) -> Result<(), HeatMapError> {
    if path == "-" {
        print!("{}", contents);
        return Ok(());
    }
    std::fs::write(path, contents)
        .map_err(|e| HeatMapError::IoError(format!("cannot write {}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunStatus::Rendered.exit_code(), 0);
        assert_eq!(RunStatus::Failed.exit_code(), 1);
        assert_eq!(RunStatus::InvalidConfig.exit_code(), 2);
    }

    #[test]
    fn test_flags_parse_into_args() {
        let args = Args::try_parse_from([
            "heatmap_service",
            "--input",
            "data.json",
            "-o",
            "-",
            "--format",
            "svg",
        ])
        .expect("flags should parse");
        assert_eq!(args.input, Some(PathBuf::from("data.json")));
        assert_eq!(args.output.as_deref(), Some("-"));
        assert_eq!(args.format, Some(OutputFormat::Svg));
        assert!(args.url.is_none());
    }

    #[test]
    fn test_unknown_format_is_rejected_by_parser() {
        assert!(Args::try_parse_from(["heatmap_service", "--format", "png"]).is_err());
    }
}
