//! Shared constants for the fretboard diagram (millimeters unless noted).

// ── Page margins ────────────────────────────────────────────────────
pub(super) const PAGE_TOP: f64 = 15.0;
pub(super) const PAGE_BOTTOM: f64 = 15.0;
pub(super) const LEFT: f64 = 20.0;
pub(super) const RIGHT: f64 = 20.0;

// ── Fretboard geometry ──────────────────────────────────────────────
pub(super) const STRING_TOP: f64 = 25.0; // y of the highest string
pub(super) const STRING_SPACING: f64 = 6.0; // distance between strings
pub(super) const TITLE_SIZE: f64 = 4.0;

// ── Line styles ─────────────────────────────────────────────────────
pub(super) const NUT_COLOR: &str = "#333333";
pub(super) const FRET_COLOR: &str = "#CCCCCC";
pub(super) const FRET_WIDTH: f64 = 1.0;
pub(super) const STRING_COLOR: &str = "black";
pub(super) const STRING_WIDTH: f64 = 0.2;
pub(super) const DOT_COLOR: &str = "grey";

// ── Note markers ────────────────────────────────────────────────────
/// Octave-band fill colors, from Paul Tol's colorblind-safe light scheme.
/// One entry per octave register reachable across the shipped instruments.
pub(super) const BAND_COLORS: [&str; 8] = [
    "#eedd88", "#ee8866", "#99ddff", "#bbcc33", "#ffaabb", "#44bb99", "#dddddd", "#77aadd",
];

/// Shift added to the raw octave-band quotient so the lowest reachable band
/// (extended-range basses below the reference pitch) maps to index 0.
pub(super) const BAND_OFFSET: i32 = 1;

pub(super) const MARKER_STROKE_FACTOR: f64 = 0.8;
pub(super) const MARKER_STROKE_WIDTH: f64 = 0.5;
pub(super) const TONIC_FILL: &str = "white";

// ── Highlight shadow treatment ──────────────────────────────────────
pub(super) const SHADOW_FILL: &str = "white";
pub(super) const SHADOW_STROKE: &str = "#cccccc";
pub(super) const SHADOW_TEXT: &str = "#aaaaaa";

// ── Branding ────────────────────────────────────────────────────────
pub(super) const BRAND_TEXT: &str = "fretlib.app";
pub(super) const BRAND_URL: &str = "https://fretlib.app";
