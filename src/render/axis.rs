//! Axis groups: a domain path plus one `g.tick` per tick value.

use super::svg::{SvgWriter, num};

/// Size of the outward tick marks.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between tick mark and label.
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis, ticks and labels below the line.
    Bottom,
    /// Vertical axis, ticks and labels left of the line.
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Position along the axis, already scaled.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: String,
    pub orientation: Orientation,
    /// Group translation `(x, y)`.
    pub offset: (f64, f64),
    /// Pixel extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

impl Axis {
    pub fn new(id: &str, orientation: Orientation, offset: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            id: id.to_string(),
            orientation,
            offset,
            range,
            ticks: Vec::new(),
        }
    }

    pub fn with_ticks<I>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = AxisTick>,
    {
        self.ticks.extend(ticks);
        self
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        match self.orientation {
            Orientation::Bottom => format!(
                "M{},{}V0.5H{}V{}",
                num(r0 + 0.5),
                num(TICK_SIZE),
                num(r1 + 0.5),
                num(TICK_SIZE)
            ),
            Orientation::Left => format!(
                "M{},{}H0.5V{}H{}",
                num(-TICK_SIZE),
                num(r0 + 0.5),
                num(r1 + 0.5),
                num(-TICK_SIZE)
            ),
        }
    }

    pub fn render(&self, w: &mut SvgWriter) {
        let anchor = match self.orientation {
            Orientation::Bottom => "middle",
            Orientation::Left => "end",
        };
        w.open(
            "g",
            &[
                ("id", self.id.clone()),
                ("transform", format!("translate({}, {})", num(self.offset.0), num(self.offset.1))),
                ("fill", "none".to_string()),
                ("font-size", "10".to_string()),
                ("font-family", "sans-serif".to_string()),
                ("text-anchor", anchor.to_string()),
            ],
        );
        w.empty(
            "path",
            &[
                ("class", "domain".to_string()),
                ("stroke", "currentColor".to_string()),
                ("d", self.domain_path()),
            ],
        );

        for tick in &self.ticks {
            let p = num(tick.position + 0.5);
            match self.orientation {
                Orientation::Bottom => {
                    w.open(
                        "g",
                        &[("class", "tick".to_string()), ("transform", format!("translate({},0)", p))],
                    );
                    w.empty("line", &[("stroke", "currentColor".to_string()), ("y2", num(TICK_SIZE))]);
                    w.text(
                        "text",
                        &[
                            ("fill", "currentColor".to_string()),
                            ("y", num(TICK_SIZE + TICK_PADDING)),
                            ("dy", "0.71em".to_string()),
                        ],
                        &tick.label,
                    );
                }
                Orientation::Left => {
                    w.open(
                        "g",
                        &[("class", "tick".to_string()), ("transform", format!("translate(0,{})", p))],
                    );
                    w.empty("line", &[("stroke", "currentColor".to_string()), ("x2", num(-TICK_SIZE))]);
                    w.text(
                        "text",
                        &[
                            ("fill", "currentColor".to_string()),
                            ("x", num(-(TICK_SIZE + TICK_PADDING))),
                            ("dy", "0.32em".to_string()),
                        ],
                        &tick.label,
                    );
                }
            }
            w.close("g");
        }

        w.close("g");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(position: f64, label: &str) -> AxisTick {
        AxisTick { position, label: label.to_string() }
    }

    #[test]
    fn test_bottom_axis_markup() {
        let axis = Axis::new("x-axis", Orientation::Bottom, (0.0, 525.0), (100.0, 1400.0))
            .with_ticks([tick(120.0, "1760"), tick(170.0, "1770")]);
        let mut w = SvgWriter::new();
        axis.render(&mut w);
        let svg = w.finish();

        assert!(svg.starts_with("<g id=\"x-axis\" transform=\"translate(0, 525)\""));
        assert!(svg.contains("d=\"M100.5,6V0.5H1400.5V6\""));
        assert_eq!(svg.matches("class=\"tick\"").count(), 2);
        assert!(svg.contains("translate(120.5,0)"));
        assert!(svg.contains(">1770</text>"));
    }

    #[test]
    fn test_left_axis_places_labels_before_line() {
        let axis = Axis::new("y-axis", Orientation::Left, (100.0, 0.0), (525.0, 100.0))
            .with_ticks([tick(117.0, "January")]);
        let mut w = SvgWriter::new();
        axis.render(&mut w);
        let svg = w.finish();

        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("translate(0,117.5)"));
        assert!(svg.contains("x=\"-9\""));
        assert!(svg.contains(">January</text>"));
    }
}
