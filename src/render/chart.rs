//! The heat map SVG: title, cells, axes, captions and legend.

use super::axis::{Axis, AxisTick, Orientation};
use super::svg::{SvgWriter, num};
use crate::analysis::DatasetSummary;
use crate::config::ChartConfig;
use crate::legend::{
    LEGEND_AXIS_OFFSET, LegendGeometry, format_legend_tick, legend_buckets, legend_ticks,
};
use crate::model::{Dataset, HeatMapError, MonthlyVarianceRecord, month_name};
use crate::scale::{ChartScales, js_date, tick_label};
use crate::tooltip::Tooltip;

/// Ticks requested from the time scale.
const X_TICK_COUNT: usize = 20;
/// Ticks requested from the month scale.
const Y_TICK_COUNT: usize = 10;
/// Upward nudge applied to every cell so it straddles its month tick.
const CELL_Y_OFFSET: f64 = 17.0;

/// How each cell carries its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipMode {
    /// `data-tooltip` attribute read by the page script.
    Attribute,
    /// `<title>` child, shown natively by SVG viewers.
    Title,
}

/// Geometry of one cell, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub record: MonthlyVarianceRecord,
}

/// Everything needed to draw the chart for one dataset.
pub struct HeatMap<'a> {
    pub dataset: &'a Dataset,
    pub summary: DatasetSummary,
    pub scales: ChartScales,
    pub chart: &'a ChartConfig,
}

impl<'a> HeatMap<'a> {
    pub fn new(dataset: &'a Dataset, chart: &'a ChartConfig) -> Result<Self, HeatMapError> {
        let summary = DatasetSummary::from_dataset(dataset).ok_or(HeatMapError::EmptyDataset)?;
        let scales = ChartScales::build(&summary, chart)?;
        Ok(Self {
            dataset,
            summary,
            scales,
            chart,
        })
    }

    /// "1753 - 2015: base temperature 8.66℃"
    pub fn description(&self) -> String {
        format!(
            "{} - {}: base temperature {}℃",
            self.summary.first_year, self.summary.last_year, self.dataset.base_temperature
        )
    }

    pub fn cell_height(&self) -> f64 {
        (self.chart.height - 2.0 * self.chart.padding) / 12.0
    }

    pub fn cell_width(&self) -> f64 {
        (self.chart.width - 2.0 * self.chart.padding) / self.summary.column_count()
    }

    pub fn cell(&self, record: &MonthlyVarianceRecord) -> Cell {
        let x = js_date(record.year, 0, 0)
            .map(|d| self.scales.x.scale(d))
            .unwrap_or(self.chart.padding);
        Cell {
            x,
            y: self.scales.y.scale(f64::from(record.month)) - CELL_Y_OFFSET,
            width: self.cell_width(),
            height: self.cell_height(),
            fill: self.scales.color.color(record.variance).to_hex(),
            record: *record,
        }
    }

    pub fn x_axis(&self) -> Axis {
        let ticks = self.scales.x.ticks(X_TICK_COUNT).into_iter().map(|d| AxisTick {
            position: self.scales.x.scale(d),
            label: tick_label(d),
        });
        Axis::new(
            "x-axis",
            Orientation::Bottom,
            (0.0, self.chart.height - self.chart.padding),
            self.scales.x.range,
        )
        .with_ticks(ticks)
    }

    pub fn y_axis(&self) -> Axis {
        let ticks = self.scales.y.ticks(Y_TICK_COUNT).into_iter().filter_map(|m| {
            month_name(m as u32).map(|label| AxisTick {
                position: self.scales.y.scale(m),
                label: label.to_string(),
            })
        });
        Axis::new("y-axis", Orientation::Left, (self.chart.padding, 0.0), self.scales.y.range)
            .with_ticks(ticks)
    }

    pub fn legend_axis(&self) -> Axis {
        let s = &self.summary;
        let ticks = legend_ticks(s.min_variance, s.max_variance, s.base_temperature)
            .into_iter()
            .map(|t| AxisTick {
                position: self.scales.legend.scale(t),
                label: format_legend_tick(t),
            });
        Axis::new(
            "legend-axis",
            Orientation::Bottom,
            (0.0, LEGEND_AXIS_OFFSET),
            self.scales.legend.range,
        )
        .with_ticks(ticks)
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    pub fn render_svg(&self, mode: TooltipMode) -> String {
        let mut w = SvgWriter::new();
        let (width, height, padding) = (self.chart.width, self.chart.height, self.chart.padding);

        w.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg".to_string()),
                ("width", num(width)),
                ("height", num(height)),
                ("viewBox", format!("0 0 {} {}", num(width), num(height))),
            ],
        );

        w.text(
            "text",
            &[
                ("id", "title".to_string()),
                ("x", num(width / 2.0)),
                ("y", num(padding * 0.4)),
                ("text-anchor", "middle".to_string()),
                ("font-size", "24".to_string()),
            ],
            &self.chart.title,
        );
        w.text(
            "text",
            &[
                ("id", "description".to_string()),
                ("x", num(width / 2.0)),
                ("y", num(padding * 0.65)),
                ("text-anchor", "middle".to_string()),
                ("font-size", "16".to_string()),
            ],
            &self.description(),
        );

        self.render_legend(&mut w);

        w.text(
            "text",
            &[
                ("y", num(height - 50.0)),
                ("x", num(width / 2.0)),
                ("style", "text-anchor: middle".to_string()),
            ],
            "Years",
        );
        self.x_axis().render(&mut w);

        w.text(
            "text",
            &[
                ("transform", "rotate(-90)".to_string()),
                ("y", num(padding - 75.0)),
                ("x", num(-height / 2.0)),
                ("style", "text-anchor: middle".to_string()),
            ],
            "Months",
        );
        self.y_axis().render(&mut w);

        for record in &self.dataset.monthly_variance {
            self.render_cell(&mut w, &self.cell(record), mode);
        }

        w.close("svg");
        w.finish()
    }

    fn render_cell(&self, w: &mut SvgWriter, cell: &Cell, mode: TooltipMode) {
        let record = &cell.record;
        let mut attrs = vec![
            ("class", "cell".to_string()),
            ("x", num(cell.x)),
            ("y", num(cell.y)),
            ("width", num(cell.width)),
            ("height", num(cell.height)),
            ("fill", cell.fill.clone()),
            ("data-month", (record.month - 1).to_string()),
            ("data-year", record.year.to_string()),
            ("data-temp", self.dataset.absolute_temperature(record).to_string()),
        ];
        let tooltip = Tooltip::for_record(record, self.dataset.base_temperature);

        match mode {
            TooltipMode::Attribute => {
                attrs.push(("data-tooltip", tooltip.to_html()));
                w.empty("rect", &attrs);
            }
            TooltipMode::Title => {
                w.open("rect", &attrs);
                w.text("title", &[], &tooltip.to_text());
                w.close("rect");
            }
        }
    }

    fn render_legend(&self, w: &mut SvgWriter) {
        let geometry = LegendGeometry::for_chart(self.chart.width, self.chart.height);
        let s = &self.summary;

        w.open(
            "svg",
            &[
                ("id", "legend".to_string()),
                ("x", num(geometry.x)),
                ("y", num(geometry.y)),
                ("width", num(geometry.width)),
                ("height", num(geometry.height)),
            ],
        );

        for bucket in legend_buckets(s.min_variance, s.max_variance) {
            w.empty(
                "rect",
                &[
                    ("stroke", "black".to_string()),
                    ("x", num(self.scales.legend.scale(bucket + s.base_temperature))),
                    ("width", num(geometry.swatch_width)),
                    ("height", num(geometry.swatch_height)),
                    ("fill", self.scales.color.color(bucket).to_hex()),
                ],
            );
        }
        self.legend_axis().render(w);

        w.close("svg");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let mut monthly_variance = Vec::new();
        for year in 1900..=1901 {
            for month in 1..=12 {
                monthly_variance.push(MonthlyVarianceRecord {
                    year,
                    month,
                    variance: (month as f64 - 6.0) / 4.0,
                });
            }
        }
        Dataset { base_temperature: 8.66, monthly_variance }
    }

    #[test]
    fn test_cell_dimensions_follow_canvas() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        assert!((map.cell_height() - 425.0 / 12.0).abs() < 1e-9);
        // 24 records -> 2 year columns across 1300 px.
        assert_eq!(map.cell_width(), 650.0);
    }

    #[test]
    fn test_first_cell_starts_at_left_padding() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        let cell = map.cell(&data.monthly_variance[0]);
        assert_eq!(cell.x, 100.0);
        assert!((cell.y - (map.scales.y.scale(1.0) - 17.0)).abs() < 1e-9);
    }

    #[test]
    fn test_coldest_and_warmest_cells_use_scale_ends() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        assert_eq!(map.cell(&data.monthly_variance[0]).fill, "#000004");
        assert_eq!(map.cell(&data.monthly_variance[11]).fill, "#fcffa4");
    }

    #[test]
    fn test_y_axis_labels_every_month_in_order() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        let labels: Vec<String> = map.y_axis().ticks.into_iter().map(|t| t.label).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels.first().map(String::as_str), Some("January"));
        assert_eq!(labels.last().map(String::as_str), Some("December"));
    }

    #[test]
    fn test_legend_axis_has_ten_ticks() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        assert_eq!(map.legend_axis().ticks.len(), 10);
    }

    #[test]
    fn test_title_mode_nests_tooltip_in_cell() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        let svg = map.render_svg(TooltipMode::Title);
        assert_eq!(svg.matches("<title>").count(), 24);
        assert!(!svg.contains("data-tooltip"));
        assert!(svg.contains("1900 - January"));
    }

    #[test]
    fn test_description_mentions_year_span_and_base() {
        let data = dataset();
        let chart = ChartConfig::default();
        let map = HeatMap::new(&data, &chart).expect("heat map");
        assert_eq!(map.description(), "1900 - 1901: base temperature 8.66℃");
    }
}
