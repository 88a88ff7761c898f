//! Fretboard diagram layout engine.
//!
//! [`FretboardDiagram`] turns one set of rendering parameters into drawing
//! calls against an abstract [`Painter`]: page setup, title, fret and
//! string lines, fret marker dots and one colored circle per in-scale note
//! position. It also owns the state that survives between render passes of
//! the same diagram (the pitch matrix and the highlight set), so several
//! diagram instances never interfere with each other.

mod constants;
mod pattern;

pub use pattern::match_pattern;

use std::collections::HashSet;

use log::debug;

use crate::data;
use crate::model::{LabelMode, RenderParams};
use crate::painter::{LineCap, MarkerData, Painter};
use crate::theory;
use crate::utils::{adjust_brightness, file_safe_name, mod_positive, to_roman};

use constants::*;

/// Titles computed by a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramInfo {
    pub title: String,
    /// `title` with accidentals spelled out and punctuation collapsed,
    /// usable as a file name stem.
    pub file_title: String,
}

/// One diagram view: its parameters plus the interaction state.
pub struct FretboardDiagram {
    params: RenderParams,
    highlight: HashSet<(usize, usize)>,
    matrix: Vec<Vec<bool>>,
}

impl FretboardDiagram {
    /// Create a diagram for the given parameters.
    ///
    /// The parameter indices must be valid for the reference tables; run
    /// [`RenderParams::validate`] first when they come from external input.
    /// Out-of-range indices panic.
    pub fn new(params: RenderParams) -> Self {
        Self {
            params,
            highlight: HashSet::new(),
            matrix: Vec::new(),
        }
    }

    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Replace the parameters. Changing them drops the highlight set.
    pub fn set_params(&mut self, params: RenderParams) {
        if params != self.params {
            self.highlight.clear();
        }
        self.params = params;
        self.matrix.clear();
    }

    /// The in-scale grid of the last render or pattern application,
    /// indexed `[string_row][fret]` with row 0 at the top of the diagram.
    pub fn pitch_matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    pub fn highlight(&self) -> &HashSet<(usize, usize)> {
        &self.highlight
    }

    /// Toggle a single (fret, string) cell's membership in the highlight
    /// set, independent of any pattern.
    pub fn toggle_highlight(&mut self, cell: (usize, usize)) {
        if !self.highlight.remove(&cell) {
            self.highlight.insert(cell);
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlight.clear();
    }

    /// Replace the highlight set with the cells of a named fretting
    /// position. Returns whether a pattern covered the current tuning and
    /// scale; the previous highlight is dropped either way.
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        self.matrix = self.compute_matrix();
        self.highlight.clear();

        let instrument = &data::instruments()[self.params.instrument];
        let tuning = &instrument.tunings[self.params.tuning];
        let scale = &data::scale_groups()[self.params.scale_group].scales[self.params.scale];

        match pattern::match_pattern(name, tuning.id, scale.id, &self.matrix) {
            Some(cells) => {
                self.highlight = cells;
                true
            }
            None => false,
        }
    }

    /// Run the full layout pass against a drawing surface.
    pub fn render(&mut self, painter: &mut dyn Painter) -> DiagramInfo {
        let p = self.params.clone();
        let instrument = &data::instruments()[p.instrument];
        let tuning = &instrument.tunings[p.tuning];
        let scale = &data::scale_groups()[p.scale_group].scales[p.scale];

        let frets = displayed_frets(&p) as usize;
        let (page_w, page_h) = p.page.dimensions_mm();
        let fret_spacing = (page_w - LEFT - RIGHT) / frets as f64;

        let degrees = theory::resolve_degrees(&scale.degrees, p.key, p.accidental);
        let add = theory::resolve_degrees(&scale.add, p.key, p.accidental);
        let tonic = degrees[0];

        let labels = match p.labels {
            LabelMode::Notes => theory::note_names(p.key, p.accidental, scale),
            LabelMode::Intervals => theory::interval_names(tonic),
        };

        painter.page(page_w, page_h);

        let mut title = format!(
            "{}: {} tuning, {}{}{} scale",
            instrument.name,
            tuning.name,
            theory::CHROMATIC_NOTES[0][p.key as usize],
            p.accidental.title_infix(),
            scale.name
        );
        if p.capo > 0 {
            title.push_str(&format!(", Capo {}", to_roman(p.capo)));
        }
        let info = DiagramInfo {
            file_title: file_safe_name(&title),
            title,
        };

        painter.text_middle(&info.title, page_w / 2.0, PAGE_TOP, Some(TITLE_SIZE), None, None);
        painter.text_middle(
            BRAND_TEXT,
            page_w / 2.0,
            page_h - PAGE_BOTTOM,
            None,
            Some(BRAND_URL),
            None,
        );

        // Fret lines; the nut is darker with square caps.
        for fret in 0..=frets {
            let x = LEFT + fret_spacing * fret as f64;
            let (color, cap) = if fret == 0 {
                (NUT_COLOR, LineCap::Square)
            } else {
                (FRET_COLOR, LineCap::Round)
            };
            painter.line(
                x,
                STRING_TOP,
                x,
                STRING_TOP + (instrument.strings - 1) as f64 * STRING_SPACING,
                color,
                FRET_WIDTH,
                Some(cap),
            );
        }

        for row in 0..instrument.strings {
            let y = STRING_TOP + row as f64 * STRING_SPACING;
            painter.line(LEFT, y, page_w - RIGHT, y, STRING_COLOR, STRING_WIDTH, None);
        }

        let dots_top = STRING_TOP + instrument.strings as f64 * STRING_SPACING;

        if p.capo > 0 {
            painter.text_middle(
                &format!("Capo {}", to_roman(p.capo)),
                LEFT,
                dots_top + 1.0,
                None,
                None,
                None,
            );
        }

        // Fret marker dots below the board, template sliced by the capo.
        for fret in 1..=frets {
            let Some(&count) = instrument.dots.get(p.capo as usize + fret - 1) else {
                break;
            };
            for i in 0..count {
                painter.circle(
                    STRING_SPACING / 6.0,
                    LEFT + fret as f64 * fret_spacing - fret_spacing / 2.0,
                    dots_top + i as f64 * (STRING_SPACING / 3.0 + 0.5),
                    DOT_COLOR,
                    None,
                    None,
                    None,
                );
            }
        }

        // Note markers, highest string row first.
        self.matrix = vec![vec![false; frets + 1]; instrument.strings];
        for row in (0..instrument.strings).rev() {
            let open = tuning.pitches[instrument.strings - 1 - row];
            for fret in 0..=frets {
                let pitch = open + p.capo as i32 + fret as i32;
                let class = mod_positive(pitch, 12);
                let in_scale = degrees.contains(&class) || add.contains(&class);
                self.matrix[row][fret] = in_scale;
                if !in_scale {
                    continue;
                }

                // Out-of-palette bands mean the reference data outgrew the
                // palette; index loudly rather than clamp.
                let band = ((12 + pitch - tonic).div_euclid(12) + BAND_OFFSET) as usize;
                let base = BAND_COLORS[band];

                let mut fill = base;
                let mut stroke = adjust_brightness(base, MARKER_STROKE_FACTOR);
                let mut text_color = None;
                if class == tonic {
                    fill = TONIC_FILL;
                }
                if !self.highlight.is_empty() && !self.highlight.contains(&(fret, row)) {
                    fill = SHADOW_FILL;
                    stroke = SHADOW_STROKE.to_string();
                    text_color = Some(SHADOW_TEXT);
                }

                let cx = if fret == 0 {
                    // Open-string markers sit left of the nut instead of
                    // centered in a fret cell that does not exist.
                    LEFT - (STRING_SPACING * 2.0) / 2.5
                } else {
                    LEFT + fret as f64 * fret_spacing - fret_spacing / 2.0
                };
                let cy = STRING_TOP + row as f64 * STRING_SPACING;

                painter.circle(
                    STRING_SPACING / 2.5,
                    cx,
                    cy,
                    fill,
                    Some(&stroke),
                    Some(MARKER_STROKE_WIDTH),
                    Some(MarkerData { fret, string: row }),
                );
                painter.text_middle(&labels[class as usize], cx, cy, None, None, text_color);
            }
        }

        debug!(
            "rendered {} strings x {} frets, {} highlighted cells",
            instrument.strings,
            frets,
            self.highlight.len()
        );

        info
    }

    fn compute_matrix(&self) -> Vec<Vec<bool>> {
        let p = &self.params;
        let instrument = &data::instruments()[p.instrument];
        let tuning = &instrument.tunings[p.tuning];
        let scale = &data::scale_groups()[p.scale_group].scales[p.scale];

        let frets = displayed_frets(p) as usize;
        let degrees = theory::resolve_degrees(&scale.degrees, p.key, p.accidental);
        let add = theory::resolve_degrees(&scale.add, p.key, p.accidental);

        let mut matrix = vec![vec![false; frets + 1]; instrument.strings];
        for (row, matrix_row) in matrix.iter_mut().enumerate() {
            let open = tuning.pitches[instrument.strings - 1 - row];
            for (fret, cell) in matrix_row.iter_mut().enumerate() {
                let class = mod_positive(open + p.capo as i32 + fret as i32, 12);
                *cell = degrees.contains(&class) || add.contains(&class);
            }
        }
        matrix
    }
}

/// Fret count left after the capo, floored at one so fret spacing never
/// divides by zero.
fn displayed_frets(params: &RenderParams) -> u32 {
    params.frets.saturating_sub(params.capo).max(1)
}
