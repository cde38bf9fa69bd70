//! Color legend: the swatch values, the axis tick values, and the tick labels.
//!
//! The legend is split into nine equal-width variance buckets between the
//! smallest and largest variance. Its axis is labelled in absolute degrees
//! (variance plus the base temperature) at each bucket edge.

use crate::format::to_fixed;

/// Number of swatches in the legend, independent of dataset size.
pub const LEGEND_BUCKETS: usize = 9;

/// Legend canvas height.
pub const LEGEND_HEIGHT: f64 = 80.0;

/// Vertical offset of the legend axis inside the legend canvas.
pub const LEGEND_AXIS_OFFSET: f64 = 33.0;

/// Lower edge of every bucket, starting at `min`.
pub fn legend_buckets(min: f64, max: f64) -> Vec<f64> {
    let step = (max - min) / LEGEND_BUCKETS as f64;
    (0..LEGEND_BUCKETS).map(|i| min + step * i as f64).collect()
}

/// All bucket edges in absolute degrees: `min + base` through `max + base`.
pub fn legend_ticks(min: f64, max: f64, base: f64) -> Vec<f64> {
    let step = (max - min) / LEGEND_BUCKETS as f64;
    (0..=LEGEND_BUCKETS)
        .map(|i| {
            if i == LEGEND_BUCKETS {
                max + base
            } else {
                min + base + step * i as f64
            }
        })
        .collect()
}

/// Legend tick label: whole single-digit values get a trailing ".0",
/// everything else is rounded to one decimal.
pub fn format_legend_tick(t: f64) -> String {
    let plain = t.to_string();
    if plain.chars().count() < 2 {
        format!("{}.0", plain)
    } else {
        to_fixed(t, 1)
    }
}

/// Placement and sizes of the legend inside a chart of the given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
}

impl LegendGeometry {
    pub fn for_chart(width: f64, height: f64) -> Self {
        let legend_width = width / 4.0;
        let padding = crate::scale::LEGEND_PADDING;
        Self {
            x: width / 16.5,
            y: height * 0.92,
            width: legend_width,
            height: LEGEND_HEIGHT,
            swatch_width: (legend_width - padding - 9.5) / LEGEND_BUCKETS as f64,
            swatch_height: (legend_width - padding) / 11.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_count_is_fixed_at_nine() {
        assert_eq!(legend_buckets(-6.976, 5.228).len(), 9);
        assert_eq!(legend_buckets(0.0, 0.9).len(), 9);
        assert_eq!(legend_buckets(1.0, 1.0).len(), 9);
    }

    #[test]
    fn test_buckets_start_at_min_with_equal_steps() {
        let buckets = legend_buckets(0.0, 9.0);
        assert_eq!(buckets, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_ticks_cover_both_ends_in_absolute_degrees() {
        let ticks = legend_ticks(-6.976, 5.228, 8.66);
        assert_eq!(ticks.len(), 10);
        assert!((ticks[0] - 1.684).abs() < 1e-9);
        assert_eq!(ticks[9], 5.228 + 8.66);
    }

    #[test]
    fn test_single_digit_tick_gets_decimal() {
        assert_eq!(format_legend_tick(8.0), "8.0");
        assert_eq!(format_legend_tick(0.0), "0.0");
    }

    #[test]
    fn test_fractional_tick_rounds_to_one_decimal() {
        assert_eq!(format_legend_tick(1.684), "1.7");
        assert_eq!(format_legend_tick(13.888), "13.9");
        assert_eq!(format_legend_tick(12.0), "12.0");
    }

    #[test]
    fn test_half_tenths_round_up() {
        assert_eq!(format_legend_tick(0.25), "0.3");
        assert_eq!(format_legend_tick(10.75), "10.8");
    }

    #[test]
    fn test_geometry_for_default_canvas() {
        let g = LegendGeometry::for_chart(1500.0, 625.0);
        assert_eq!(g.width, 375.0);
        assert_eq!(g.height, 80.0);
        assert!((g.y - 575.0).abs() < 1e-9);
        assert!((g.swatch_width - 355.5 / 9.0).abs() < 1e-9);
        assert!((g.swatch_height - 365.0 / 11.0).abs() < 1e-9);
    }
}
