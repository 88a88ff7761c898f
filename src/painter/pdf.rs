//! Paginated PDF backend — a single-purpose PDF 1.4 writer.
//!
//! Covers exactly what fretboard diagrams need: fixed-size pages, stroked
//! and filled lines and circles, centered text in the built-in
//! Helvetica-Bold face and URI link annotations. Coordinates arrive in
//! millimeters with the origin top-left and are converted to points with
//! the y-axis flipped into PDF page space. Page boxes are declared in whole
//! points, everything else keeps fractional precision.

use std::path::Path;

use super::{LineCap, MarkerData, Painter, DEFAULT_FONT_COLOR, DEFAULT_FONT_SIZE};
use crate::utils::{mm_to_pt, mm_to_pt_int};

/// Helvetica-Bold glyph widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // !"#$%&'()*+,-./
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :;<=>?@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // A-P
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // Q-Z
    333, 278, 333, 584, 556, 333, // [\]^_`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // a-p
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // q-z
    389, 280, 389, 584, // {|}~
];

/// Cap height of Helvetica-Bold, in em.
const CAP_HEIGHT: f64 = 0.718;

/// Kappa constant for approximating quarter circles with cubic Béziers.
const CIRCLE_KAPPA: f64 = 0.5522847498;

struct LinkAnnot {
    /// [llx, lly, urx, ury] in page space
    rect: [f64; 4],
    uri: String,
}

struct Page {
    width_pt: i64,
    height_pt: i64,
    content: String,
    links: Vec<LinkAnnot>,
}

pub struct PdfPainter {
    pages: Vec<Page>,
}

impl PdfPainter {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    fn current(&mut self) -> &mut Page {
        // Drawing before page() is a caller bug, not a runtime condition.
        self.pages
            .last_mut()
            .expect("PdfPainter: page() must be called before drawing")
    }

    /// Finalize the document and return the PDF bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        // Object 1: catalog, 2: page tree, 3: the shared font. Per page,
        // in order: content stream, link annotations, the page itself.
        let mut objects: Vec<(usize, String)> = Vec::new();
        let mut next_id = 4usize;
        let mut kids: Vec<usize> = Vec::new();

        for page in &self.pages {
            let content_id = next_id;
            next_id += 1;
            objects.push((
                content_id,
                format!(
                    "<< /Length {} >>\nstream\n{}endstream",
                    page.content.len(),
                    page.content
                ),
            ));

            let mut annot_ids = Vec::new();
            for link in &page.links {
                let id = next_id;
                next_id += 1;
                objects.push((
                    id,
                    format!(
                        "<< /Type /Annot /Subtype /Link \
                         /Rect [{:.2} {:.2} {:.2} {:.2}] /Border [0 0 0] \
                         /A << /S /URI /URI ({}) >> >>",
                        link.rect[0],
                        link.rect[1],
                        link.rect[2],
                        link.rect[3],
                        escape_string(&link.uri)
                    ),
                ));
                annot_ids.push(id);
            }

            let page_id = next_id;
            next_id += 1;
            let annots = if annot_ids.is_empty() {
                String::new()
            } else {
                let refs: Vec<String> = annot_ids.iter().map(|id| format!("{id} 0 R")).collect();
                format!(" /Annots [{}]", refs.join(" "))
            };
            objects.push((
                page_id,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R{} >>",
                    page.width_pt, page.height_pt, content_id, annots
                ),
            ));
            kids.push(page_id);
        }

        let kid_refs: Vec<String> = kids.iter().map(|id| format!("{id} 0 R")).collect();
        let mut ordered = vec![
            (1, "<< /Type /Catalog /Pages 2 0 R >>".to_string()),
            (
                2,
                format!(
                    "<< /Type /Pages /Kids [{}] /Count {} >>",
                    kid_refs.join(" "),
                    kids.len()
                ),
            ),
            (
                3,
                "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold \
                 /Encoding /WinAnsiEncoding >>"
                    .to_string(),
            ),
        ];
        ordered.extend(objects);

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = vec![0usize; next_id];
        for (id, body) in &ordered {
            offsets[*id] = out.len();
            out.push_str(&format!("{id} 0 obj\n{body}\nendobj\n"));
        }

        let xref_pos = out.len();
        out.push_str(&format!("xref\n0 {next_id}\n0000000000 65535 f \n"));
        for offset in offsets.iter().skip(1) {
            out.push_str(&format!("{:010} 00000 n \n", offset));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {next_id} /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF\n"
        ));

        out.into_bytes()
    }

    /// Finalize the document and write it to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        std::fs::write(path, self.into_bytes())
            .map_err(|e| format!("Failed to write '{}': {e}", path.display()))
    }
}

impl Default for PdfPainter {
    fn default() -> Self {
        Self::new()
    }
}

/// Map text onto the built-in font's character set. The musical accidental
/// glyphs fall outside WinAnsi and are transliterated to ASCII.
fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '♯' => out.push('#'),
            '♭' => out.push('b'),
            '𝄪' => out.push_str("##"),
            '𝄫' => out.push_str("bb"),
            ' '..='~' => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}

/// Width of an ASCII string in points at the given font size.
fn text_width_pt(text: &str, size: f64) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            (c as usize)
                .checked_sub(32)
                .and_then(|i| HELVETICA_BOLD_WIDTHS.get(i))
                .copied()
                .unwrap_or(556) as u32
        })
        .sum();
    units as f64 / 1000.0 * size
}

fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Parse a color into 0..=1 RGB components. Accepts `#rrggbb` and the few
/// named colors the diagram engine uses.
fn rgb(color: &str) -> (f64, f64, f64) {
    match color {
        "white" => (1.0, 1.0, 1.0),
        "black" => (0.0, 0.0, 0.0),
        "grey" | "gray" => (0.5, 0.5, 0.5),
        _ => {
            let value = u32::from_str_radix(color.trim_start_matches('#'), 16).unwrap_or(0);
            (
                ((value >> 16) & 0xff) as f64 / 255.0,
                ((value >> 8) & 0xff) as f64 / 255.0,
                (value & 0xff) as f64 / 255.0,
            )
        }
    }
}

impl Painter for PdfPainter {
    fn page(&mut self, page_w: f64, page_h: f64) {
        self.pages.push(Page {
            width_pt: mm_to_pt_int(page_w),
            height_pt: mm_to_pt_int(page_h),
            content: String::new(),
            links: Vec::new(),
        });
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
        let size_pt = mm_to_pt(size.unwrap_or(DEFAULT_FONT_SIZE));
        let (r, g, b) = rgb(color.unwrap_or(DEFAULT_FONT_COLOR));
        let ascii = transliterate(text);
        let width = text_width_pt(&ascii, size_pt);

        let page = self.current();
        let tx = mm_to_pt(x) - width / 2.0;
        // Baseline placed so the cap height straddles the anchor point.
        let ty = page.height_pt as f64 - mm_to_pt(y) - CAP_HEIGHT * size_pt / 2.0;

        page.content.push_str(&format!(
            "BT\n/F1 {:.2} Tf\n{:.3} {:.3} {:.3} rg\n{:.2} {:.2} Td\n({}) Tj\nET\n",
            size_pt,
            r,
            g,
            b,
            tx,
            ty,
            escape_string(&ascii)
        ));

        if let Some(uri) = link {
            page.links.push(LinkAnnot {
                rect: [
                    tx,
                    ty - 0.21 * size_pt,
                    tx + width,
                    ty + 0.75 * size_pt,
                ],
                uri: uri.to_string(),
            });
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
        let (r, g, b) = rgb(stroke);
        let cap = match linecap.unwrap_or_default() {
            LineCap::Butt => 0,
            LineCap::Round => 1,
            LineCap::Square => 2,
        };
        let page = self.current();
        let h = page.height_pt as f64;
        page.content.push_str(&format!(
            "{:.2} w\n{} J\n{:.3} {:.3} {:.3} RG\n{:.2} {:.2} m\n{:.2} {:.2} l\nS\n",
            mm_to_pt(width),
            cap,
            r,
            g,
            b,
            mm_to_pt(x1),
            h - mm_to_pt(y1),
            mm_to_pt(x2),
            h - mm_to_pt(y2),
        ));
    }

    fn circle(
        &mut self,
        radius: f64,
        cx: f64,
        cy: f64,
        fill: &str,
        stroke: Option<&str>,
        width: Option<f64>,
        _data: Option<MarkerData>,
    ) {
        let (fr, fg, fb) = rgb(fill);
        let stroked = stroke.zip(width);

        let page = self.current();
        let x = mm_to_pt(cx);
        let y = page.height_pt as f64 - mm_to_pt(cy);
        let r = mm_to_pt(radius);
        let k = CIRCLE_KAPPA * r;

        let mut ops = format!("{:.3} {:.3} {:.3} rg\n", fr, fg, fb);
        if let Some((color, w)) = stroked {
            let (sr, sg, sb) = rgb(color);
            ops.push_str(&format!(
                "{:.2} w\n{:.3} {:.3} {:.3} RG\n",
                mm_to_pt(w),
                sr,
                sg,
                sb
            ));
        }

        // Four cubic Bézier quarter arcs.
        ops.push_str(&format!("{:.2} {:.2} m\n", x + r, y));
        ops.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + r,
            y + k,
            x + k,
            y + r,
            x,
            y + r
        ));
        ops.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x - k,
            y + r,
            x - r,
            y + k,
            x - r,
            y
        ));
        ops.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x - r,
            y - k,
            x - k,
            y - r,
            x,
            y - r
        ));
        ops.push_str(&format!(
            "{:.2} {:.2} {:.2} {:.2} {:.2} {:.2} c\n",
            x + k,
            y - r,
            x + r,
            y - k,
            x + r,
            y
        ));
        ops.push_str(if stroked.is_some() { "B\n" } else { "f\n" });

        page.content.push_str(&ops);
    }
}
