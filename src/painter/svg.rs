//! SVG backend — accumulates SVG elements and produces the final markup.
//!
//! Coordinates are written in millimeter units so the output renders at
//! physical size in any SVG-capable view and scales losslessly on screen.

use std::path::Path;

use super::{LineCap, MarkerData, Painter, DEFAULT_FONT_COLOR, DEFAULT_FONT_SIZE};

pub struct SvgPainter {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgPainter {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Produce the accumulated `<svg>` document.
    pub fn into_svg(self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.2}mm\" height=\"{:.2}mm\" \
             font-family=\"'DejaVu Sans', Verdana, Geneva, Tahoma, sans-serif\" \
             font-size=\"{}mm\" font-weight=\"bold\" fill=\"{}\" \
             text-anchor=\"middle\" dominant-baseline=\"central\">",
            self.width, self.height, DEFAULT_FONT_SIZE, DEFAULT_FONT_COLOR
        );
        for el in &self.elements {
            svg.push_str("\n  ");
            svg.push_str(el);
        }
        svg.push_str("\n</svg>\n");
        svg
    }

    /// Write the document, with an XML declaration, to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", self.into_svg());
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write '{}': {e}", path.display()))
    }
}

impl Default for SvgPainter {
    fn default() -> Self {
        Self::new()
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Painter for SvgPainter {
    fn page(&mut self, page_w: f64, page_h: f64) {
        self.width = page_w;
        self.height = page_h;
        self.elements
            .push("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>".to_string());
    }

    fn text_middle(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        size: Option<f64>,
        link: Option<&str>,
        color: Option<&str>,
    ) {
        let mut attrs = format!("x=\"{:.2}mm\" y=\"{:.2}mm\"", x, y);
        if let Some(size) = size {
            attrs.push_str(&format!(" font-size=\"{:.2}mm\"", size));
        }
        if let Some(color) = color {
            attrs.push_str(&format!(" fill=\"{}\"", color));
        }

        let node = format!("<text {}>{}</text>", attrs, xml_escape(text));
        match link {
            Some(href) => self
                .elements
                .push(format!("<a href=\"{}\">{}</a>", xml_escape(href), node)),
            None => self.elements.push(node),
        }
    }

    fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        linecap: Option<LineCap>,
    ) {
        let mut el = format!(
            "<line x1=\"{:.2}mm\" y1=\"{:.2}mm\" x2=\"{:.2}mm\" y2=\"{:.2}mm\" \
             stroke=\"{}\" stroke-width=\"{:.2}mm\"",
            x1, y1, x2, y2, stroke, width
        );
        if let Some(cap) = linecap {
            el.push_str(&format!(" stroke-linecap=\"{}\"", cap.as_str()));
        }
        el.push_str("/>");
        self.elements.push(el);
    }

    fn circle(
        &mut self,
        radius: f64,
        cx: f64,
        cy: f64,
        fill: &str,
        stroke: Option<&str>,
        width: Option<f64>,
        data: Option<MarkerData>,
    ) {
        let mut el = format!(
            "<circle r=\"{:.2}mm\" cx=\"{:.2}mm\" cy=\"{:.2}mm\" fill=\"{}\"",
            radius, cx, cy, fill
        );
        if let Some(stroke) = stroke {
            el.push_str(&format!(" stroke=\"{}\"", stroke));
        }
        if let Some(width) = width {
            el.push_str(&format!(" stroke-width=\"{:.2}mm\"", width));
        }
        if let Some(data) = data {
            el.push_str(&format!(
                " data-fret=\"{}\" data-string=\"{}\"",
                data.fret, data.string
            ));
        }
        el.push_str("/>");
        self.elements.push(el);
    }
}
