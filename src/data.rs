//! Embedded reference data: instrument geometries, tunings, scale degree
//! sets and fingering-pattern templates.
//!
//! These tables are read-only; all behavior lives in the diagram engine.
//! Pitch offsets count semitones from the reference pitch A, so the low E
//! of a standard-tuned guitar is 7 and extended-range basses go negative.

use once_cell::sync::Lazy;

use crate::model::{Fragment, Instrument, Pattern, Scale, ScaleGroup, ScaleId, Tuning, TuningId};

/// All supported instruments with their tunings.
pub fn instruments() -> &'static [Instrument] {
    &INSTRUMENTS
}

/// All scale groups in display order.
pub fn scale_groups() -> &'static [ScaleGroup] {
    &SCALE_GROUPS
}

/// All fretting-position template sets.
pub fn patterns() -> &'static [Pattern] {
    &PATTERNS
}

fn tuning(name: &str, id: TuningId, pitches: &[i32]) -> Tuning {
    Tuning {
        name: name.to_string(),
        id,
        pitches: pitches.to_vec(),
    }
}

static INSTRUMENTS: Lazy<Vec<Instrument>> = Lazy::new(|| {
    vec![
        Instrument {
            name: "Guitar".to_string(),
            strings: 6,
            dots: vec![
                0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2,
            ],
            frets: 22,
            tunings: vec![
                tuning("Standard", TuningId::GuitarStandard, &[7, 12, 17, 22, 26, 31]),
                tuning("Drop A", TuningId::GuitarDropA, &[0, 7, 12, 17, 21, 26]),
                tuning("Drop B", TuningId::GuitarDropB, &[2, 9, 14, 19, 23, 28]),
                tuning("Drop C", TuningId::GuitarDropC, &[3, 10, 15, 20, 24, 29]),
                tuning("Drop D", TuningId::GuitarDropD, &[5, 12, 17, 22, 26, 31]),
                tuning(
                    "Double Drop D",
                    TuningId::GuitarDoubleDropD,
                    &[5, 12, 17, 22, 26, 29],
                ),
                tuning("D Modal", TuningId::GuitarDModal, &[5, 12, 17, 22, 24, 29]),
                tuning("G Modal", TuningId::GuitarGModal, &[5, 10, 17, 22, 27, 29]),
                tuning("Open A", TuningId::GuitarOpenA, &[7, 12, 16, 19, 24, 31]),
                tuning("Open C", TuningId::GuitarOpenC, &[3, 10, 15, 22, 27, 31]),
                tuning("Open C6", TuningId::GuitarOpenC6, &[3, 12, 15, 22, 27, 31]),
                tuning("Open D", TuningId::GuitarOpenD, &[5, 12, 17, 21, 24, 29]),
                tuning("Open E", TuningId::GuitarOpenE, &[7, 14, 19, 23, 26, 31]),
                tuning("Open G", TuningId::GuitarOpenG, &[5, 10, 17, 22, 26, 29]),
                tuning(
                    "New Standard",
                    TuningId::GuitarNewStandard,
                    &[3, 10, 17, 24, 31, 34],
                ),
            ],
        },
        Instrument {
            name: "Bass guitar".to_string(),
            strings: 4,
            dots: vec![
                0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2,
            ],
            frets: 20,
            tunings: vec![tuning(
                "Standard",
                TuningId::BassGuitarStandard,
                &[-5, 0, 5, 10],
            )],
        },
        Instrument {
            name: "Bass guitar, 5 string".to_string(),
            strings: 5,
            dots: vec![
                0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 2,
            ],
            frets: 20,
            tunings: vec![tuning(
                "Standard",
                TuningId::BassGuitar5Standard,
                &[-10, -5, 0, 5, 10],
            )],
        },
        Instrument {
            name: "Ukulele".to_string(),
            strings: 4,
            dots: vec![0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 0, 2, 0, 0, 1],
            frets: 16,
            tunings: vec![tuning(
                "Soprano in C",
                TuningId::UkuleleSopranoC,
                &[34, 27, 31, 36],
            )],
        },
    ]
});

fn scale(name: &str, id: ScaleId, degrees: &[i32]) -> Scale {
    Scale {
        name: name.to_string(),
        id,
        degrees: degrees.to_vec(),
        add: Vec::new(),
        selected: false,
    }
}

static SCALE_GROUPS: Lazy<Vec<ScaleGroup>> = Lazy::new(|| {
    vec![
        ScaleGroup {
            label: "Chromatic".to_string(),
            scales: vec![scale(
                "Chromatic",
                ScaleId::Chromatic,
                &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            )],
        },
        ScaleGroup {
            label: "Diatonic".to_string(),
            scales: vec![
                scale("Major (Ionian)", ScaleId::MajorIonian, &[0, 2, 4, 5, 7, 9, 11]),
                scale("Dorian", ScaleId::Dorian, &[0, 2, 3, 5, 7, 9, 10]),
                scale("Phrygian", ScaleId::Phrygian, &[0, 1, 3, 5, 7, 8, 10]),
                scale("Lydian", ScaleId::Lydian, &[0, 2, 4, 6, 7, 9, 11]),
                scale("Mixolydian", ScaleId::Mixolydian, &[0, 2, 4, 5, 7, 9, 10]),
                scale("Minor (Aeolian)", ScaleId::MinorAeolian, &[0, 2, 3, 5, 7, 8, 10]),
                scale("Locrian", ScaleId::Locrian, &[0, 1, 3, 5, 6, 8, 10]),
            ],
        },
        ScaleGroup {
            label: "Heptatonic".to_string(),
            scales: vec![
                scale("Harmonic minor", ScaleId::HarmonicMinor, &[0, 2, 3, 5, 7, 8, 11]),
                scale("Melodic minor", ScaleId::MelodicMinor, &[0, 2, 3, 5, 7, 9, 11]),
            ],
        },
        ScaleGroup {
            label: "Pentatonic".to_string(),
            scales: vec![
                scale(
                    "Major pentatonic",
                    ScaleId::MajorPentatonic,
                    &[0, 2, 4, -1, 7, 9, -1],
                ),
                Scale {
                    selected: true,
                    ..scale(
                        "Minor pentatonic",
                        ScaleId::MinorPentatonic,
                        &[0, -1, 3, 5, 7, -1, 10],
                    )
                },
            ],
        },
        ScaleGroup {
            label: "Hexatonic".to_string(),
            scales: vec![
                Scale {
                    add: vec![3],
                    ..scale("Blues major", ScaleId::BluesMajor, &[0, 2, 4, -1, 7, 9, -1])
                },
                Scale {
                    add: vec![6],
                    ..scale("Blues minor", ScaleId::BluesMinor, &[0, -1, 3, 5, 7, -1, 10])
                },
            ],
        },
    ]
});

fn fragment(name: &str, cells: &[&[i8]]) -> Fragment {
    Fragment {
        name: name.to_string(),
        cells: cells.iter().map(|row| row.to_vec()).collect(),
    }
}

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        Pattern {
            tunings: vec![TuningId::GuitarStandard],
            scales: vec![
                ScaleId::MajorIonian,
                ScaleId::Dorian,
                ScaleId::Phrygian,
                ScaleId::Lydian,
                ScaleId::Mixolydian,
                ScaleId::MinorAeolian,
                ScaleId::Locrian,
            ],
            fragments: vec![
                fragment(
                    "1",
                    &[
                        &[1, 1, 0, 1],
                        &[0, 1, 0, 1],
                        &[1, 0, 1, 1],
                        &[1, 0, 1, 1],
                        &[1, 1, 0, 1],
                        &[1, 1, 0, 1],
                    ],
                ),
                fragment(
                    "2",
                    &[
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 0, 1, 1],
                        &[1, 1, 0, 1, 0],
                        &[1, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                    ],
                ),
                fragment(
                    "3",
                    &[
                        &[1, 1, 0, 1],
                        &[1, 1, 0, 1],
                        &[1, 0, 1, 0],
                        &[1, 0, 1, 1],
                        &[1, 0, 1, 1],
                        &[1, 1, 0, 1],
                    ],
                ),
                fragment(
                    "4",
                    &[
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                        &[1, 0, 1, 1, 0],
                        &[1, 1, 0, 1, 0],
                        &[1, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                    ],
                ),
                fragment(
                    "5",
                    &[
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 1, 0, 1],
                        &[1, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 0, 1, 1],
                    ],
                ),
            ],
        },
        Pattern {
            tunings: vec![TuningId::GuitarStandard],
            scales: vec![ScaleId::MajorPentatonic, ScaleId::MinorPentatonic],
            fragments: vec![
                fragment(
                    "1",
                    &[
                        &[0, 1, 0, 1],
                        &[0, 1, 0, 1],
                        &[1, 0, 1, 0],
                        &[1, 0, 0, 1],
                        &[1, 0, 0, 1],
                        &[0, 1, 0, 1],
                    ],
                ),
                fragment(
                    "2",
                    &[
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 0, 1],
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                    ],
                ),
                fragment(
                    "3",
                    &[
                        &[1, 0, 0, 1],
                        &[0, 1, 0, 1],
                        &[1, 0, 1, 0],
                        &[1, 0, 1, 0],
                        &[1, 0, 0, 1],
                        &[1, 0, 0, 1],
                    ],
                ),
                fragment(
                    "4",
                    &[
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[1, 0, 0, 1, 0],
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                    ],
                ),
                fragment(
                    "5",
                    &[
                        &[0, 1, 0, 0, 1],
                        &[0, 1, 0, 0, 1],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 0, 0, 1],
                    ],
                ),
                fragment(
                    "3 octaves",
                    &[
                        &[-1, 0, 0, -1, 0, -1, 0, -1, 0, 0, 1, 0, 1],
                        &[-1, 0, 0, -1, 0, -1, 0, 0, 1, 0, 1, 0, 1],
                        &[-1, 0, -1, 0, -1, 0, 0, 1, 0, 1, 0, 0, -1],
                        &[-1, 0, -1, 0, 0, 1, 0, 1, 0, 1, 0, 0, -1],
                        &[-1, 0, -1, 0, 0, 1, 0, 1, 0, 0, -1, 0, -1],
                        &[1, 0, 0, 1, 0, 1, 0, 1, 0, 0, -1, 0, -1],
                    ],
                ),
            ],
        },
        Pattern {
            tunings: vec![TuningId::GuitarStandard],
            scales: vec![ScaleId::BluesMajor, ScaleId::BluesMinor],
            fragments: vec![
                fragment(
                    "1",
                    &[
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 0, 1, 0],
                        &[1, 1, 1, 0, 0],
                        &[1, 0, 0, 1, 0],
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                    ],
                ),
                fragment(
                    "2",
                    &[
                        &[0, 1, 1, 1, 0],
                        &[0, 1, 0, 0, 1],
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 1, 1, 0],
                    ],
                ),
                fragment(
                    "3",
                    &[
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                        &[1, 0, 1, 0, 0],
                        &[1, 1, 1, 0, 0],
                        &[1, 0, 0, 1, 0],
                        &[1, 0, 0, 1, 0],
                    ],
                ),
                fragment(
                    "4",
                    &[
                        &[0, 1, 0, 1, 0],
                        &[0, 1, 1, 1, 0],
                        &[1, 0, 0, 1, 0],
                        &[1, 0, 0, 1, 0],
                        &[0, 1, 0, 1, 1],
                        &[0, 1, 0, 1, 0],
                    ],
                ),
                fragment(
                    "5",
                    &[
                        &[1, 0, 0, 1],
                        &[1, 0, 0, 1],
                        &[1, 0, 1, 1],
                        &[1, 0, 1, 0],
                        &[1, 1, 1, 0],
                        &[1, 0, 0, 1],
                    ],
                ),
                fragment(
                    "3 octaves",
                    &[
                        &[-1, 0, -1, -1, -1, 0, 0, 1, 0, 1],
                        &[-1, 0, -1, 0, 0, 1, 0, 1, 1, 1],
                        &[-1, -1, 0, 0, 1, 0, 1, 0, 0, -1],
                        &[0, 0, 1, 0, 1, 1, 1, 0, 0, -1],
                        &[0, 0, 1, 0, 1, 0, 0, -1, 0, -1],
                        &[1, 0, 1, 1, 1, 0, 0, -1, 0, -1],
                    ],
                ),
            ],
        },
    ]
});
