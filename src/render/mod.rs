//! Chart output.
//!
//! Submodules:
//! - `svg`: markup writer and escaping.
//! - `axis`: axis groups.
//! - `chart`: the heat map itself.
//! - `page`: HTML page with the tooltip script, and the error page.

pub mod axis;
pub mod chart;
pub mod page;
pub mod svg;

pub use chart::{HeatMap, TooltipMode};
pub use page::{render_error_page, render_page};

use crate::config::{ChartConfig, OutputFormat};
use crate::model::{Dataset, HeatMapError};

/// Render the dataset in the requested output format.
pub fn render(
    dataset: &Dataset,
    chart: &ChartConfig,
    format: OutputFormat,
) -> Result<String, HeatMapError> {
    let map = HeatMap::new(dataset, chart)?;
    let output = match format {
        OutputFormat::Html => render_page(&chart.title, &map.render_svg(TooltipMode::Attribute)),
        OutputFormat::Svg => map.render_svg(TooltipMode::Title),
    };
    Ok(output)
}
