//! Minimal markup writer shared by the chart, axis and page renderers.
//!
//! Produces indented XML/HTML text. Attribute values and text content are
//! escaped on the way in; raw markup can be inserted with `raw`.

use std::fmt::Write as _;

/// One `name="value"` pair. Values are escaped when written.
pub type Attr<'a> = (&'a str, String);

#[derive(Debug, Default)]
pub struct SvgWriter {
    buf: String,
    depth: usize,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }

    fn write_tag(&mut self, name: &str, attrs: &[Attr<'_>]) {
        let _ = write!(self.buf, "<{}", name);
        for (key, value) in attrs {
            let _ = write!(self.buf, " {}=\"{}\"", key, escape(value));
        }
    }

    /// `<name attrs>` on its own line; children follow one level deeper.
    pub fn open(&mut self, name: &str, attrs: &[Attr<'_>]) {
        self.indent();
        self.write_tag(name, attrs);
        self.buf.push_str(">\n");
        self.depth += 1;
    }

    pub fn close(&mut self, name: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        let _ = writeln!(self.buf, "</{}>", name);
    }

    /// Element with no children, written as an explicit open/close pair so
    /// the output is valid both as SVG and as HTML.
    pub fn empty(&mut self, name: &str, attrs: &[Attr<'_>]) {
        self.indent();
        self.write_tag(name, attrs);
        let _ = writeln!(self.buf, "></{}>", name);
    }

    /// Element holding escaped text.
    pub fn text(&mut self, name: &str, attrs: &[Attr<'_>], content: &str) {
        self.indent();
        self.write_tag(name, attrs);
        let _ = writeln!(self.buf, ">{}</{}>", escape(content), name);
    }

    /// Pre-rendered markup, inserted as-is.
    pub fn raw(&mut self, markup: &str) {
        for line in markup.lines() {
            self.indent();
            self.buf.push_str(line);
            self.buf.push('\n');
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compact number for coordinates: at most three decimals, no trailing zeros.
pub fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.3}", rounded);
        s.trim_end_matches('0').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(escape(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape("1900 - January"), "1900 - January");
    }

    #[test]
    fn test_num_trims_trailing_zeros() {
        assert_eq!(num(100.0), "100");
        assert_eq!(num(35.416_666), "35.417");
        assert_eq!(num(-0.5), "-0.5");
        assert_eq!(num(2.10), "2.1");
    }

    #[test]
    fn test_nested_elements_are_indented_and_closed() {
        let mut w = SvgWriter::new();
        w.open("g", &[("id", "x-axis".to_string())]);
        w.empty("line", &[("y2", num(6.0))]);
        w.text("text", &[], "1760");
        w.close("g");
        assert_eq!(
            w.finish(),
            "<g id=\"x-axis\">\n  <line y2=\"6\"></line>\n  <text>1760</text>\n</g>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut w = SvgWriter::new();
        w.empty("rect", &[("data-tooltip", "<div>8.16℃</div>".to_string())]);
        assert!(w.finish().contains("data-tooltip=\"&lt;div&gt;8.16℃&lt;/div&gt;\""));
    }
}
