//! Data model for instruments, tunings, scales and fingering patterns.
//!
//! These structures capture the reference data the diagram engine draws
//! from, plus the ephemeral parameter set describing one diagram request.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::data;

/// Identifies a tuning across the reference tables, independent of its
/// position inside an instrument's tuning list. Fingering patterns are
/// keyed on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuningId {
    GuitarStandard,
    GuitarDropA,
    GuitarDropB,
    GuitarDropC,
    GuitarDropD,
    GuitarDoubleDropD,
    GuitarDModal,
    GuitarGModal,
    GuitarOpenA,
    GuitarOpenC,
    GuitarOpenC6,
    GuitarOpenD,
    GuitarOpenE,
    GuitarOpenG,
    GuitarNewStandard,
    BassGuitarStandard,
    BassGuitar5Standard,
    UkuleleSopranoC,
}

/// Identifies a scale across the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleId {
    Chromatic,
    MajorIonian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    MinorAeolian,
    Locrian,
    HarmonicMinor,
    MelodicMinor,
    MajorPentatonic,
    MinorPentatonic,
    BluesMajor,
    BluesMinor,
}

/// A stringed instrument's geometry and its known tunings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Display name (e.g. "Guitar")
    pub name: String,
    /// Number of strings
    pub strings: usize,
    /// Fret marker dots per fret, indexed from fret 1 (entry 0 describes
    /// fret 1); values are 0, 1 or 2 dots
    pub dots: Vec<u8>,
    /// Default fret count offered for this instrument
    pub frets: u32,
    /// Known tunings, lowest-pitched string first
    pub tunings: Vec<Tuning>,
}

/// One tuning of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Display name (e.g. "Drop D")
    pub name: String,
    /// Identifying tag used by the pattern tables
    pub id: TuningId,
    /// Open-string pitches as signed semitone offsets from the reference
    /// pitch (A), lowest string first
    pub pitches: Vec<i32>,
}

/// A scale expressed as degree offsets on a diatonic frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scale {
    /// Display name (e.g. "Minor (Aeolian)")
    pub name: String,
    /// Identifying tag used by the pattern tables
    pub id: ScaleId,
    /// Pitch-class offsets from the tonic, one per diatonic slot; `-1`
    /// marks an absent slot (pentatonic/hexatonic scales on a 7-slot frame)
    pub degrees: Vec<i32>,
    /// Extra pitch-class offsets outside the degree framework (blue notes)
    #[serde(default)]
    pub add: Vec<i32>,
    /// Whether a UI should preselect this scale
    #[serde(default)]
    pub selected: bool,
}

/// A labeled group of scales (Chromatic, Diatonic, Pentatonic, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleGroup {
    pub label: String,
    pub scales: Vec<Scale>,
}

/// One named fretting-position template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Display name (e.g. "1", "3 octaves")
    pub name: String,
    /// strings × frets-in-window cell markers; 0 = empty, ±1 = marked
    /// (the sign carries an octave-boundary annotation that matching
    /// ignores)
    pub cells: Vec<Vec<i8>>,
}

/// Fretting-position templates for a family of tunings and scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    /// Tunings these fragments apply to
    pub tunings: Vec<TuningId>,
    /// Scales these fragments apply to
    pub scales: Vec<ScaleId>,
    pub fragments: Vec<Fragment>,
}

/// Accidental preference: flat, neutral or sharp spelling. Exchanged over
/// FFI as its semitone offset, −1 / 0 / +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Accidental {
    Flat = -1,
    Natural = 0,
    Sharp = 1,
}

impl Accidental {
    /// Semitone shift applied to every resolved degree: −1, 0 or +1.
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    /// The infix printed between key letter and scale name in titles.
    pub fn title_infix(self) -> &'static str {
        match self {
            Accidental::Flat => "♭ ",
            Accidental::Natural => " ",
            Accidental::Sharp => "♯ ",
        }
    }
}

/// Supported physical page sizes. Exchanged over FFI as an index, 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PageSize {
    A4Landscape = 0,
    A4Portrait = 1,
    LetterLandscape = 2,
    LetterPortrait = 3,
}

impl PageSize {
    /// Page (width, height) in millimeters.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4Landscape => (297.0, 210.0),
            PageSize::A4Portrait => (210.0, 297.0),
            PageSize::LetterLandscape => (279.4, 215.9),
            PageSize::LetterPortrait => (215.9, 279.4),
        }
    }
}

/// What the note markers are labeled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    /// Spelled note names (A, B♭, C𝄪, …)
    #[default]
    Notes,
    /// Scale-degree intervals relative to the tonic (R, m2, M2, …)
    Intervals,
}

/// Everything describing one diagram request.
///
/// Index fields select into the reference tables; [`RenderParams::validate`]
/// checks externally supplied values, while the render path itself indexes
/// directly and treats out-of-range indices as programming errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderParams {
    pub page: PageSize,
    /// Fret count to display before the capo is applied
    pub frets: u32,
    /// Capo position in frets; 0 = none
    #[serde(default)]
    pub capo: u32,
    /// Index into [`data::instruments`]
    pub instrument: usize,
    /// Index into the instrument's tuning list
    pub tuning: usize,
    /// Key as a pitch class, 0 (A) ..= 11 (G♯)
    pub key: i32,
    /// Index into [`data::scale_groups`]
    pub scale_group: usize,
    /// Index into the group's scale list
    pub scale: usize,
    pub accidental: Accidental,
    #[serde(default)]
    pub labels: LabelMode,
}

impl RenderParams {
    /// Check every index and range against the reference tables.
    ///
    /// Call this on parameter sets arriving from external input (FFI, JSON)
    /// before handing them to the diagram engine.
    pub fn validate(&self) -> Result<(), String> {
        let instruments = data::instruments();
        let instrument = instruments
            .get(self.instrument)
            .ok_or_else(|| format!("Instrument index {} out of range", self.instrument))?;
        if instrument.tunings.get(self.tuning).is_none() {
            return Err(format!(
                "Tuning index {} out of range for {}",
                self.tuning, instrument.name
            ));
        }

        let groups = data::scale_groups();
        let group = groups
            .get(self.scale_group)
            .ok_or_else(|| format!("Scale group index {} out of range", self.scale_group))?;
        if group.scales.get(self.scale).is_none() {
            return Err(format!(
                "Scale index {} out of range for the {} group",
                self.scale, group.label
            ));
        }

        if !(0..12).contains(&self.key) {
            return Err(format!("Key {} outside the pitch-class range 0..=11", self.key));
        }
        if self.frets == 0 {
            return Err("Fret count must be positive".to_string());
        }
        if self.capo >= self.frets {
            return Err(format!(
                "Capo {} must be below the fret count {}",
                self.capo, self.frets
            ));
        }

        Ok(())
    }
}

impl Default for RenderParams {
    /// The out-of-the-box diagram: first instrument in its first tuning,
    /// key of A, neutral accidentals, and the scale the reference data
    /// marks as preselected.
    fn default() -> Self {
        let instruments = data::instruments();
        let (scale_group, scale) = data::scale_groups()
            .iter()
            .enumerate()
            .find_map(|(gi, g)| {
                g.scales
                    .iter()
                    .position(|s| s.selected)
                    .map(|si| (gi, si))
            })
            .unwrap_or((0, 0));

        Self {
            page: PageSize::A4Landscape,
            frets: instruments[0].frets,
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
}
