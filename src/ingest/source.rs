//! Temperature dataset client
//!
//! Retrieves the global land-surface temperature payload: a base
//! temperature plus one variance reading per month since 1753.
//!
//! Payload shape:
//!   { "baseTemperature": 8.66,
//!     "monthlyVariance": [{ "year": 1753, "month": 1, "variance": -1.366 }, ...] }

use std::path::Path;
use std::time::Duration;

use crate::model::{Dataset, HeatMapError};

const USER_AGENT: &str = concat!("heatmap_service/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Client
// ============================================================================

/// Blocking client with a request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, HeatMapError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

// ============================================================================
// Loading
// ============================================================================

/// Fetch and validate the dataset from `url`.
///
/// # Returns
/// The parsed snapshot, or the first thing that went wrong: a non-2xx
/// status, a transport error, or a payload that fails validation.
pub fn fetch_dataset(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Dataset, HeatMapError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(HeatMapError::HttpError(response.status().as_u16()));
    }

    let body = response.text()?;
    parse_dataset(&body)
}

/// Parse a payload and check it is renderable.
pub fn parse_dataset(text: &str) -> Result<Dataset, HeatMapError> {
    let dataset: Dataset = serde_json::from_str(text)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Load a previously saved payload from disk.
///
/// Lets the chart be rebuilt offline or in tests without reaching the data
/// host.
pub fn load_dataset_file<P: AsRef<Path>>(path: P) -> Result<Dataset, HeatMapError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| HeatMapError::IoError(format!("cannot read {}: {}", path.display(), e)))?;
    parse_dataset(&text)
}

// ============================================================================
// Tests
// ============================================================================
