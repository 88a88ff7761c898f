//! Layout engine tests — drive the diagram against a recording painter.

use pretty_assertions::assert_eq;

use fretlib::data;
use fretlib::{
    Accidental, FretboardDiagram, LabelMode, LineCap, MarkerData, PageSize, Painter, RenderParams,
};

// ─── Recording painter ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct CircleOp {
    radius: f64,
    cx: f64,
    cy: f64,
    fill: String,
    stroke: Option<String>,
    data: Option<MarkerData>,
}

#[derive(Debug, Clone, PartialEq)]
struct TextOp {
    text: String,
    x: f64,
    y: f64,
    color: Option<String>,
    link: Option<String>,
}

#[derive(Default)]
struct RecordingPainter {
    pages: Vec<(f64, f64)>,
    lines: Vec<(f64, f64, f64, f64, String)>,
    circles: Vec<CircleOp>,
    texts: Vec<TextOp>,
}

impl RecordingPainter {
    fn markers(&self) -> impl Iterator<Item = &CircleOp> {
        self.circles.iter().filter(|c| c.data.is_some())
    }

    fn dots(&self) -> impl Iterator<Item = &CircleOp> {
        self.circles.iter().filter(|c| c.data.is_none())
    }

    fn text_at(&self, x: f64, y: f64) -> Option<&TextOp> {
        self.texts
            .iter()
            .find(|t| (t.x - x).abs() < 1e-9 && (t.y - y).abs() < 1e-9)
    }
}

impl Painter for RecordingPainter {
    fn page(&mut self, page_w: f64, page_h: f64) {
        self.pages.push((page_w, page_h));
    }

    fn text_middle(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        _size: Option<f64>,
        link: Option<&str>,
        color: Option<&str>,
    ) {
        self.texts.push(TextOp {
            text: text.to_string(),
            x,
            y,
            color: color.map(String::from),
            link: link.map(String::from),
        });
    }

    fn line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &str,
        _width: f64,
        _linecap: Option<LineCap>,
    ) {
        self.lines.push((x1, y1, x2, y2, stroke.to_string()));
    }

    fn circle(
        &mut self,
        radius: f64,
        cx: f64,
        cy: f64,
        fill: &str,
        stroke: Option<&str>,
        _width: Option<f64>,
        data: Option<MarkerData>,
    ) {
        self.circles.push(CircleOp {
            radius,
            cx,
            cy,
            fill: fill.to_string(),
            stroke: stroke.map(String::from),
            data,
        });
    }
}

fn guitar(scale_group: usize, scale: usize) -> RenderParams {
    RenderParams {
        page: PageSize::A4Landscape,
        frets: 22,
        capo: 0,
        instrument: 0,
        tuning: 0,
        key: 0,
        scale_group,
        scale,
        accidental: Accidental::Natural,
        labels: LabelMode::Notes,
    }
}

/// Diatonic group index 1, Minor (Aeolian) index 5.
fn a_minor() -> RenderParams {
    guitar(1, 5)
}

// ─── Pitch matrix ────────────────────────────────────────────────────

#[test]
fn pitch_matrix_is_deterministic() {
    let mut diagram = FretboardDiagram::new(a_minor());
    let mut first = RecordingPainter::default();
    diagram.render(&mut first);
    let matrix_a = diagram.pitch_matrix().to_vec();

    let mut second = RecordingPainter::default();
    diagram.render(&mut second);
    assert_eq!(matrix_a, diagram.pitch_matrix());

    let mut fresh = FretboardDiagram::new(a_minor());
    let mut third = RecordingPainter::default();
    fresh.render(&mut third);
    assert_eq!(matrix_a, fresh.pitch_matrix());
}

#[test]
fn pitch_matrix_rows_start_at_the_top_string() {
    let mut diagram = FretboardDiagram::new(a_minor());
    diagram.render(&mut RecordingPainter::default());

    // Row 0 is the high E string: open E and the F at fret 1 are in
    // A minor, the F♯ at fret 2 is not.
    let matrix = diagram.pitch_matrix();
    assert_eq!(matrix.len(), 6);
    assert_eq!(matrix[0].len(), 23);
    assert!(matrix[0][0]);
    assert!(matrix[0][1]);
    assert!(!matrix[0][2]);
}

// ─── Page and titles ─────────────────────────────────────────────────

#[test]
fn page_size_is_emitted_in_millimeters() {
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(a_minor()).render(&mut painter);
    assert_eq!(painter.pages, vec![(297.0, 210.0)]);

    let mut portrait = RecordingPainter::default();
    let mut params = a_minor();
    params.page = PageSize::LetterPortrait;
    FretboardDiagram::new(params).render(&mut portrait);
    assert_eq!(portrait.pages, vec![(215.9, 279.4)]);
}

#[test]
fn title_carries_capo_as_roman_numeral() {
    let mut params = a_minor();
    params.capo = 2;
    let mut painter = RecordingPainter::default();
    let info = FretboardDiagram::new(params).render(&mut painter);

    assert_eq!(
        info.title,
        "Guitar: Standard tuning, A Minor (Aeolian) scale, Capo II"
    );
    assert_eq!(
        info.file_title,
        "Guitar_Standard_tuning_A_Minor_Aeolian_scale_Capo_II"
    );
    assert!(painter.texts.iter().any(|t| t.text == info.title));
    assert!(painter.texts.iter().any(|t| t.text == "Capo II"));
}

#[test]
fn sharp_keys_render_the_accidental_in_the_title() {
    let mut params = a_minor();
    params.key = 0;
    params.accidental = Accidental::Sharp;
    let info = FretboardDiagram::new(params).render(&mut RecordingPainter::default());

    assert_eq!(info.title, "Guitar: Standard tuning, A♯ Minor (Aeolian) scale");
    assert_eq!(
        info.file_title,
        "Guitar_Standard_tuning_A_sharp_Minor_Aeolian_scale"
    );
}

// ─── Markers ─────────────────────────────────────────────────────────

#[test]
fn tonic_markers_fill_white() {
    let params = a_minor();
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(params.clone()).render(&mut painter);

    let pitches = &data::instruments()[0].tunings[0].pitches;
    let mut tonics = 0;
    for marker in painter.markers() {
        let MarkerData { fret, string } = marker.data.unwrap();
        let pitch = pitches[pitches.len() - 1 - string] + fret as i32;
        if pitch.rem_euclid(12) == 0 {
            assert_eq!(marker.fill, "white", "tonic at fret {fret} string {string}");
            tonics += 1;
        } else {
            assert_ne!(marker.fill, "white", "degree at fret {fret} string {string}");
        }
    }
    assert!(tonics > 0);
}

#[test]
fn open_string_markers_sit_left_of_the_nut() {
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(a_minor()).render(&mut painter);

    for marker in painter.markers() {
        if marker.data.unwrap().fret == 0 {
            assert!((marker.cx - 15.2).abs() < 1e-9);
        } else {
            assert!(marker.cx > 20.0);
        }
    }
}

#[test]
fn displayed_frets_are_clamped_to_one() {
    let mut params = a_minor();
    params.frets = 22;
    params.capo = 21;
    let mut painter = RecordingPainter::default();
    let mut diagram = FretboardDiagram::new(params);
    diagram.render(&mut painter);

    // One displayed fret: the nut plus one fret line, six string lines.
    let vertical = painter.lines.iter().filter(|l| l.0 == l.2).count();
    assert_eq!(vertical, 2);
    assert_eq!(diagram.pitch_matrix()[0].len(), 2);
}

// ─── Fret marker dots ────────────────────────────────────────────────

fn dotted_frets(painter: &RecordingPainter, fret_spacing: f64) -> Vec<(usize, usize)> {
    let mut by_fret: std::collections::BTreeMap<usize, usize> = std::collections::BTreeMap::new();
    for dot in painter.dots() {
        let fret = ((dot.cx - 20.0) / fret_spacing + 0.5).round() as usize;
        *by_fret.entry(fret).or_insert(0) += 1;
    }
    by_fret.into_iter().collect()
}

#[test]
fn dots_follow_the_template_without_a_capo() {
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(a_minor()).render(&mut painter);

    let spacing = (297.0 - 40.0) / 22.0;
    assert_eq!(
        dotted_frets(&painter, spacing),
        vec![
            (3, 1),
            (5, 1),
            (7, 1),
            (9, 1),
            (12, 2),
            (15, 1),
            (17, 1),
            (19, 1),
            (21, 1),
        ]
    );
}

#[test]
fn capo_slices_the_dot_template() {
    let mut params = a_minor();
    params.capo = 2;
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(params).render(&mut painter);

    // Template [0, 0, 1, 0, 1, ...] read from index 2: the slice [1, 0,
    // 1, ...] lines up with displayed fret 1 onward.
    let spacing = (297.0 - 40.0) / 20.0;
    assert_eq!(
        dotted_frets(&painter, spacing),
        vec![
            (1, 1),
            (3, 1),
            (5, 1),
            (7, 1),
            (10, 2),
            (13, 1),
            (15, 1),
            (17, 1),
            (19, 1),
        ]
    );
}

// ─── Highlight shadow treatment ──────────────────────────────────────

#[test]
fn out_of_highlight_markers_are_shadowed() {
    // Minor pentatonic, group 3 scale 1; (fret 3, string 5) is the G on
    // the low E string, in scale and not the tonic.
    let mut diagram = FretboardDiagram::new(guitar(3, 1));
    diagram.toggle_highlight((3, 5));

    let mut painter = RecordingPainter::default();
    diagram.render(&mut painter);

    for marker in painter.markers() {
        let MarkerData { fret, string } = marker.data.unwrap();
        if (fret, string) == (3, 5) {
            assert_ne!(marker.fill, "white");
            assert_ne!(marker.stroke.as_deref(), Some("#cccccc"));
        } else {
            assert_eq!(marker.fill, "white");
            assert_eq!(marker.stroke.as_deref(), Some("#cccccc"));
            let label = painter.text_at(marker.cx, marker.cy).unwrap();
            assert_eq!(label.color.as_deref(), Some("#aaaaaa"));
        }
    }
}

#[test]
fn clearing_the_highlight_restores_band_colors() {
    let mut diagram = FretboardDiagram::new(guitar(3, 1));
    diagram.toggle_highlight((3, 5));
    diagram.clear_highlight();

    let mut painter = RecordingPainter::default();
    diagram.render(&mut painter);
    assert!(painter
        .markers()
        .all(|m| m.stroke.as_deref() != Some("#cccccc")));
}

#[test]
fn changing_parameters_drops_the_highlight() {
    let mut diagram = FretboardDiagram::new(guitar(3, 1));
    diagram.toggle_highlight((3, 5));
    assert!(!diagram.highlight().is_empty());

    let mut params = guitar(3, 1);
    params.key = 5;
    diagram.set_params(params);
    assert!(diagram.highlight().is_empty());
}

// ─── Interval labels ─────────────────────────────────────────────────

#[test]
fn interval_mode_labels_the_tonic_r() {
    let mut params = a_minor();
    params.labels = LabelMode::Intervals;
    let mut painter = RecordingPainter::default();
    FretboardDiagram::new(params).render(&mut painter);

    // The A at fret 5 of the low E string (visual row 5) is the tonic.
    let tonic = painter
        .markers()
        .find(|m| m.data == Some(MarkerData { fret: 5, string: 5 }))
        .unwrap();
    assert_eq!(painter.text_at(tonic.cx, tonic.cy).unwrap().text, "R");

    // The E at fret 7 of the A string is the fifth.
    let fifth = painter
        .markers()
        .find(|m| m.data == Some(MarkerData { fret: 7, string: 4 }))
        .unwrap();
    assert_eq!(painter.text_at(fifth.cx, fifth.cy).unwrap().text, "P5");
}

// ─── Color bands ─────────────────────────────────────────────────────

#[test]
fn band_palette_covers_every_shipped_configuration() {
    // The chromatic scale marks every cell, so this sweeps the full pitch
    // range of each instrument. An out-of-palette band index would panic.
    for (ii, instrument) in data::instruments().iter().enumerate() {
        for ti in 0..instrument.tunings.len() {
            for key in 0..12 {
                for capo in [0, instrument.frets - 1] {
                    let params = RenderParams {
                        page: PageSize::A4Landscape,
                        frets: instrument.frets,
                        capo,
                        instrument: ii,
                        tuning: ti,
                        key,
                        scale_group: 0,
                        scale: 0,
                        accidental: Accidental::Natural,
                        labels: LabelMode::Notes,
                    };
                    FretboardDiagram::new(params).render(&mut RecordingPainter::default());
                }
            }
        }
    }
}

// ─── Parameter validation ────────────────────────────────────────────

#[test]
fn validation_rejects_out_of_range_parameters() {
    assert!(a_minor().validate().is_ok());

    let mut params = a_minor();
    params.instrument = 99;
    assert!(params.validate().is_err());

    let mut params = a_minor();
    params.tuning = 99;
    assert!(params.validate().is_err());

    let mut params = a_minor();
    params.scale = 99;
    assert!(params.validate().is_err());

    let mut params = a_minor();
    params.key = 12;
    assert!(params.validate().is_err());

    let mut params = a_minor();
    params.frets = 0;
    assert!(params.validate().is_err());

    let mut params = a_minor();
    params.capo = 22;
    assert!(params.validate().is_err());
}

#[test]
fn params_round_trip_through_json() {
    let params = RenderParams::default();
    let json = fretlib::params_to_json(&params).unwrap();
    assert_eq!(fretlib::params_from_json(&json).unwrap(), params);
}
