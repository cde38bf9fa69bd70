//! Standalone HTML page around the chart, with the hover tooltip script.

use super::svg::SvgWriter;

const STYLE: &str = r#"body {
  font-family: sans-serif;
  margin: 0;
}
#svg-container {
  display: flex;
  justify-content: center;
}
#tooltip {
  position: absolute;
  pointer-events: none;
  padding: 6px 10px;
  border-radius: 4px;
  background: rgba(0, 0, 0, 0.8);
  color: #fff;
  font-size: 13px;
  text-align: center;
  transition: opacity 50ms;
}
rect.cell {
  transition: opacity 50ms;
}
#error {
  margin: 4em auto;
  max-width: 40em;
  padding: 1em 1.5em;
  border: 1px solid #b00020;
  color: #b00020;
}"#;

const SCRIPT: &str = r##"(function () {
  var tooltip = document.getElementById("tooltip");
  document.querySelectorAll("#svg-container rect.cell").forEach(function (cell) {
    cell.addEventListener("mousemove", function (e) {
      cell.setAttribute("opacity", "0.85");
      tooltip.innerHTML = cell.getAttribute("data-tooltip");
      tooltip.style.left = (e.screenX - 35) + "px";
      tooltip.style.top = (e.screenY - 75) + "px";
      tooltip.setAttribute("data-year", cell.getAttribute("data-year"));
      tooltip.style.opacity = 1;
    });
    cell.addEventListener("mouseout", function () {
      cell.setAttribute("opacity", "1");
      tooltip.style.opacity = 0;
    });
  });
})();"##;

fn open_document(w: &mut SvgWriter, title: &str) {
    w.raw("<!DOCTYPE html>");
    w.open("html", &[("lang", "en".to_string())]);
    w.open("head", &[]);
    w.empty("meta", &[("charset", "utf-8".to_string())]);
    w.text("title", &[], title);
    w.open("style", &[]);
    w.raw(STYLE);
    w.close("style");
    w.close("head");
    w.open("body", &[]);
}

fn close_document(w: &mut SvgWriter) {
    w.close("body");
    w.close("html");
}

/// Chart page: the SVG inside `#svg-container`, a hidden `#tooltip`, and
/// the script that moves the tooltip with the mouse.
pub fn render_page(title: &str, svg: &str) -> String {
    let mut w = SvgWriter::new();
    open_document(&mut w, title);

    w.open("div", &[("id", "svg-container".to_string())]);
    w.raw(svg);
    w.close("div");
    w.empty("div", &[("id", "tooltip".to_string()), ("style", "opacity: 0".to_string())]);

    w.open("script", &[]);
    w.raw(SCRIPT);
    w.close("script");

    close_document(&mut w);
    w.finish()
}

/// Page shown instead of the chart when the data could not be loaded.
pub fn render_error_page(title: &str, message: &str) -> String {
    let mut w = SvgWriter::new();
    open_document(&mut w, title);

    w.open("div", &[("id", "error".to_string()), ("role", "alert".to_string())]);
    w.text("h2", &[], "The temperature data could not be loaded");
    w.text("p", &[], message);
    w.close("div");

    close_document(&mut w);
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_svg_in_container() {
        let page = render_page("Heat map", "<svg></svg>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        let container = page.find("<div id=\"svg-container\">").expect("container present");
        let svg = page.find("<svg></svg>").expect("svg present");
        let tooltip = page.find("id=\"tooltip\"").expect("tooltip present");
        assert!(container < svg && svg < tooltip);
        assert!(page.contains("<div id=\"tooltip\" style=\"opacity: 0\"></div>"));
        assert!(page.contains("e.screenX - 35"));
        assert!(page.contains("e.screenY - 75"));
    }

    #[test]
    fn test_error_page_shows_escaped_message() {
        let page = render_error_page("Heat map", "HTTP error: 503 <Service Unavailable>");
        assert!(page.contains("id=\"error\""));
        assert!(page.contains("HTTP error: 503 &lt;Service Unavailable&gt;"));
        assert!(!page.contains("id=\"svg-container\""));
    }

    #[test]
    fn test_script_targets_cells_by_id_selector() {
        assert!(SCRIPT.contains("querySelectorAll(\"#svg-container rect.cell\")"));
        assert!(SCRIPT.ends_with("})();"));
        let page = render_page("Heat map", "<svg></svg>");
        assert!(page.contains("#svg-container rect.cell"));
        assert!(page.contains("tooltip.style.opacity = 0;"));
    }
}
