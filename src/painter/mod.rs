//! Drawing-surface contract shared by the rendering backends.
//!
//! The diagram engine emits page setup, lines, circles and centered text
//! through the [`Painter`] trait and never touches a concrete backend, so
//! new output formats only need to implement this trait.

mod pdf;
mod svg;

pub use pdf::PdfPainter;
pub use svg::SvgPainter;

/// Default text size in millimeters.
pub const DEFAULT_FONT_SIZE: f64 = 2.6;

/// Default text color.
pub const DEFAULT_FONT_COLOR: &str = "#333333";

/// Stroke line-cap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Opaque payload attached to a note marker for host-side hit-testing.
///
/// The diagram engine tags every marker circle with its (fret, string)
/// cell; the SVG backend surfaces it as `data-fret`/`data-string`
/// attributes so a host UI can wire click-to-toggle, and the PDF backend
/// ignores it. Layout logic never reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerData {
    pub fret: usize,
    pub string: usize,
}

/// A drawing surface measured in millimeters with the origin top-left.
pub trait Painter {
    /// Start a new page of the given physical size.
    fn page(&mut self, page_w: f64, page_h: f64);

    /// Draw text horizontally and vertically centered on `(x, y)`.
    /// `size` defaults to [`DEFAULT_FONT_SIZE`], `color` to
    /// [`DEFAULT_FONT_COLOR`]; `link` wraps the text in a hyperlink.
    fn text_middle(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        size: Option<f64>,
        link: Option<&str>,
        color: Option<&str>,
    );

    /// Draw a straight line; `linecap` defaults to butt.
    #[allow(clippy::too_many_arguments)]
    fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        width: f64,
        linecap: Option<LineCap>,
    );

    /// Draw a circle: filled, and also stroked when both a stroke color and
    /// a stroke width are given.
    #[allow(clippy::too_many_arguments)]
    fn circle(
        &mut self,
        radius: f64,
        cx: f64,
        cy: f64,
        fill: &str,
        stroke: Option<&str>,
        width: Option<f64>,
        data: Option<MarkerData>,
    );
}
