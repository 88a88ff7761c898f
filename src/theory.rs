//! Pitch-class arithmetic and enharmonic spelling.
//!
//! Pitch classes count semitones from A: A = 0 … G♯ = 11. The speller turns
//! a (key, accidental bias, scale) triple into correctly spelled note names,
//! choosing sharps, flats or double accidentals per scale degree.

use crate::model::{Accidental, Scale};
use crate::utils::mod_positive;

/// The seven letter names with their natural pitch classes.
const BASE_NOTES: [(&str, i32); 7] = [
    ("A", 0),
    ("B", 2),
    ("C", 3),
    ("D", 5),
    ("E", 7),
    ("F", 8),
    ("G", 10),
];

/// Plain chromatic note names: sharp-flavored and flat-flavored.
pub const CHROMATIC_NOTES: [[&str; 12]; 2] = [
    ["A", "A♯", "B", "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯"],
    ["A", "B♭", "B", "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭"],
];

/// Interval labels, unison first.
const INTERVAL_NAMES: [&str; 12] = [
    "R", "m2", "M2", "m3", "M3", "P4", "d5", "P5", "m6", "M6", "m7", "M7",
];

/// Result of one diatonic spelling pass over the 12 pitch classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    /// Some slot could only be spelled with a double accidental.
    pub has_double: bool,
    /// Total flats used; a double flat counts twice.
    pub flats: u32,
    /// Total sharps used; a double sharp counts twice.
    pub sharps: u32,
    /// Note name per pitch class; slots the scale does not touch stay empty.
    pub names: [Option<String>; 12],
}

/// Resolve scale degrees to pitch classes for a key and accidental bias.
/// The `-1` "absent slot" sentinel passes through untouched.
pub fn resolve_degrees(degrees: &[i32], key: i32, accidental: Accidental) -> Vec<i32> {
    degrees
        .iter()
        .map(|&d| {
            if d < 0 {
                -1
            } else {
                mod_positive(d + key + accidental.offset(), 12)
            }
        })
        .collect()
}

/// Signed shortest way around the pitch-class circle from `first` to
/// `second`; ties break toward `first`.
fn circular_distance(first: i32, second: i32, max: i32) -> i32 {
    let dist = (second - first).abs();
    if dist < max - dist {
        if first < second {
            dist
        } else {
            -dist
        }
    } else if first < second {
        -(max - dist)
    } else {
        max - dist
    }
}

/// Spell a seven-degree scale in the given key.
///
/// The letter table is rotated to start at the letter whose natural pitch
/// class equals `key`; each scale slot is then paired with the next letter
/// and the circular distance from the letter's natural pitch class to the
/// slot's target class selects the accidental suffix. A key that is not the
/// natural class of any letter (e.g. 1 = A♯/B♭) rotates from G instead.
pub fn spell(key: i32, accidental: Accidental, scale: &Scale) -> Spelling {
    debug_assert_eq!(scale.degrees.len(), 7, "diatonic spelling needs 7 degree slots");

    let degrees = resolve_degrees(&scale.degrees, key, accidental);
    let base_index = BASE_NOTES
        .iter()
        .position(|&(_, pc)| pc == key)
        .map(|i| i as i32)
        .unwrap_or(-1);

    let mut names: [Option<String>; 12] = Default::default();
    let mut has_double = false;
    let mut flats = 0u32;
    let mut sharps = 0u32;

    for i in base_index..base_index + 7 {
        let target = degrees[(i - base_index) as usize];
        if target < 0 {
            continue;
        }

        let (letter, natural) = BASE_NOTES[mod_positive(i, 7) as usize];
        let mut name = letter.to_string();

        match circular_distance(natural, target, 12) {
            1 => {
                name.push('♯');
                sharps += 1;
            }
            2 => {
                name.push('𝄪');
                has_double = true;
                sharps += 2;
            }
            -1 => {
                name.push('♭');
                flats += 1;
            }
            -2 => {
                name.push('𝄫');
                has_double = true;
                flats += 2;
            }
            _ => {}
        }

        names[target as usize] = Some(name);
    }

    Spelling {
        has_double,
        flats,
        sharps,
        names,
    }
}

/// The full 12-entry label table for a scale in a key.
///
/// Seven-degree scales are spelled diatonically and the remaining pitch
/// classes back-filled from the plain chromatic table (flat-flavored when the
/// spelling used any flats, sharp-flavored otherwise). Everything else takes
/// the plain chromatic table matching the accidental bias.
pub fn note_names(key: i32, accidental: Accidental, scale: &Scale) -> [String; 12] {
    if scale.degrees.len() == 7 {
        let spelling = spell(key, accidental, scale);
        let fallback = if spelling.flats > 0 {
            &CHROMATIC_NOTES[1]
        } else {
            &CHROMATIC_NOTES[0]
        };

        let mut out: [String; 12] = Default::default();
        for (i, slot) in spelling.names.into_iter().enumerate() {
            out[i] = slot.unwrap_or_else(|| fallback[i].to_string());
        }
        out
    } else {
        let table = if accidental.offset() >= 0 {
            &CHROMATIC_NOTES[0]
        } else {
            &CHROMATIC_NOTES[1]
        };
        table.map(String::from)
    }
}

/// Whether forcing an all-flat or an all-sharp spelling of this scale in
/// this key would need a double accidental.
///
/// UIs use this to disable (or reset away from) the corresponding bias
/// choice; the core only reports. Non-diatonic scales never force anything.
pub fn forced_double_accidentals(key: i32, scale: &Scale) -> (bool, bool) {
    if scale.degrees.len() != 7 {
        return (false, false);
    }
    (
        spell(key, Accidental::Flat, scale).has_double,
        spell(key, Accidental::Sharp, scale).has_double,
    )
}

/// Interval labels rotated so that `R` lands on the tonic pitch class.
pub fn interval_names(tonic: i32) -> [String; 12] {
    let mut out: [String; 12] = Default::default();
    for (i, label) in INTERVAL_NAMES.iter().enumerate() {
        out[mod_positive(tonic + i as i32, 12) as usize] = (*label).to_string();
    }
    out
}
