//! Scales that turn data values into positions and colors.
//!
//! Submodules:
//! - `linear`: numeric domain to pixel range, nice ticks.
//! - `time`: calendar dates to pixels, calendar ticks.
//! - `color`: sequential Inferno color scale.
//!
//! `ChartScales` builds the four scales the heat map uses from the dataset
//! summary and the canvas geometry.

pub mod color;
pub mod linear;
pub mod time;

pub use color::{Interpolator, Rgb, SequentialScale};
pub use linear::LinearScale;
pub use time::{TickInterval, TimeScale, js_date, tick_label};

use crate::analysis::DatasetSummary;
use crate::config::ChartConfig;
use crate::model::HeatMapError;

/// Month axis domain. Inverted so that January is drawn at the top.
pub const MONTH_DOMAIN: (f64, f64) = (12.5, 0.52);

/// Inner padding of the legend's own coordinate space.
pub const LEGEND_PADDING: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    /// Variance to cell color.
    pub color: SequentialScale,
    /// Absolute temperature to x position inside the legend.
    pub legend: LinearScale,
    /// Year to x position.
    pub x: TimeScale,
    /// Month number to y position.
    pub y: LinearScale,
}

impl ChartScales {
    pub fn build(summary: &DatasetSummary, chart: &ChartConfig) -> Result<Self, HeatMapError> {
        let color = SequentialScale::new(
            (summary.min_variance, summary.max_variance),
            Interpolator::Inferno,
        );

        let legend_width = chart.width / 4.0;
        let legend = LinearScale::new(
            (summary.min_temperature(), summary.max_temperature()),
            (LEGEND_PADDING, legend_width - LEGEND_PADDING),
        );

        let start = js_date(summary.first_year, 0, 0);
        let end = js_date(summary.last_year, 12, 0);
        let (Some(start), Some(end)) = (start, end) else {
            return Err(HeatMapError::ParseError(format!(
                "years {}..{} are outside the supported calendar",
                summary.first_year, summary.last_year
            )));
        };
        let x = TimeScale::new((start, end), (chart.padding, chart.width - chart.padding));

        let y = LinearScale::new(MONTH_DOMAIN, (chart.height - chart.padding, chart.padding));

        Ok(Self { color, legend, x, y })
    }
}
