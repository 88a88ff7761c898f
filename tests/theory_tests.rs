//! Enharmonic speller and pitch utility tests.

use pretty_assertions::assert_eq;

use fretlib::data;
use fretlib::model::{Accidental, Scale};
use fretlib::theory::{forced_double_accidentals, interval_names, note_names, spell};
use fretlib::utils::{
    adjust_brightness, file_safe_name, mm_to_pt, mm_to_pt_int, mod_positive, to_roman,
};

fn scale(name: &str) -> &'static Scale {
    data::scale_groups()
        .iter()
        .flat_map(|g| &g.scales)
        .find(|s| s.name == name)
        .expect("scale present in reference data")
}

// ─── Modular arithmetic ──────────────────────────────────────────────

#[test]
fn mod_positive_wraps_negative_offsets() {
    assert_eq!(mod_positive(-5, 12), 7);
    assert_eq!(mod_positive(-12, 12), 0);
    assert_eq!(mod_positive(13, 12), 1);
    assert_eq!(mod_positive(0, 12), 0);
}

#[test]
fn mod_positive_is_a_representative() {
    for n in -30..30 {
        for d in [3, 7, 12] {
            let r = mod_positive(n, d);
            assert!((0..d).contains(&r), "mod_positive({n}, {d}) = {r}");
            assert_eq!((n - r).rem_euclid(d), 0, "mod_positive({n}, {d}) = {r}");
        }
    }
}

// ─── Enharmonic spelling ─────────────────────────────────────────────

#[test]
fn a_minor_needs_no_accidentals() {
    let names = note_names(0, Accidental::Natural, scale("Minor (Aeolian)"));

    assert_eq!(names[0], "A");
    assert_eq!(names[2], "B");
    assert_eq!(names[3], "C");
    assert_eq!(names[5], "D");
    assert_eq!(names[7], "E");
    assert_eq!(names[8], "F");
    assert_eq!(names[10], "G");

    // No flats used, so the off-scale slots back-fill from the sharp table.
    assert_eq!(names[1], "A♯");
    assert_eq!(names[11], "G♯");
}

#[test]
fn b_flat_major_is_spelled_with_flats() {
    let names = note_names(2, Accidental::Flat, scale("Major (Ionian)"));

    assert_eq!(names[1], "B♭");
    assert_eq!(names[3], "C");
    assert_eq!(names[5], "D");
    assert_eq!(names[6], "E♭");
    assert_eq!(names[8], "F");
    assert_eq!(names[10], "G");
    assert_eq!(names[0], "A");

    // Flats dominate, so back-fill comes from the flat table.
    assert_eq!(names[4], "D♭");
}

#[test]
fn g_sharp_major_forces_a_double_sharp() {
    let spelling = spell(10, Accidental::Sharp, scale("Major (Ionian)"));

    assert!(spelling.has_double);
    assert_eq!(spelling.names[10].as_deref(), Some("F𝄪"));
    // Six single sharps plus the double.
    assert_eq!(spelling.sharps, 8);
    assert_eq!(spelling.flats, 0);
}

#[test]
fn forced_double_accidental_queries() {
    // G♯ major needs F𝄪; G♭ major is plain flats.
    assert_eq!(
        forced_double_accidentals(10, scale("Major (Ionian)")),
        (false, true)
    );
    // C♭ harmonic minor needs E𝄫; C♯ harmonic minor is fine.
    assert_eq!(
        forced_double_accidentals(3, scale("Harmonic minor")),
        (true, false)
    );
    // Non-diatonic scales never force anything.
    assert_eq!(forced_double_accidentals(10, scale("Chromatic")), (false, false));
}

#[test]
fn pentatonic_skips_absent_slots() {
    // A minor pentatonic drops the 2nd and 6th slots; the spelled degrees
    // plus the sharp-table back-fill reproduce the plain chromatic names.
    let names = note_names(0, Accidental::Natural, scale("Minor pentatonic"));
    assert_eq!(names[0], "A");
    assert_eq!(names[3], "C");
    assert_eq!(names[5], "D");
    assert_eq!(names[7], "E");
    assert_eq!(names[10], "G");
    assert_eq!(names[2], "B");
    assert_eq!(names[8], "F");
}

#[test]
fn chromatic_scale_uses_plain_tables() {
    let sharp = note_names(5, Accidental::Sharp, scale("Chromatic"));
    assert_eq!(sharp[1], "A♯");
    assert_eq!(sharp[4], "C♯");

    let flat = note_names(5, Accidental::Flat, scale("Chromatic"));
    assert_eq!(flat[1], "B♭");
    assert_eq!(flat[4], "D♭");

    // Neutral bias reads from the sharp table.
    let natural = note_names(5, Accidental::Natural, scale("Chromatic"));
    assert_eq!(natural[9], "F♯");
}

#[test]
fn interval_labels_rotate_to_the_tonic() {
    let from_a = interval_names(0);
    assert_eq!(from_a[0], "R");
    assert_eq!(from_a[7], "P5");

    let from_c = interval_names(3);
    assert_eq!(from_c[3], "R");
    assert_eq!(from_c[10], "P5");
    assert_eq!(from_c[2], "M7");
}

// ─── Roman numerals ──────────────────────────────────────────────────

#[test]
fn roman_numerals() {
    assert_eq!(to_roman(1), "I");
    assert_eq!(to_roman(4), "IV");
    assert_eq!(to_roman(9), "IX");
    assert_eq!(to_roman(12), "XII");
    assert_eq!(to_roman(14), "XIV");
    assert_eq!(to_roman(19), "XIX");
    assert_eq!(to_roman(20), "XX");
}

// ─── Colors ──────────────────────────────────────────────────────────

#[test]
fn brightness_adjustment() {
    assert_eq!(adjust_brightness("#ffffff", 0.8), "#cccccc");
    assert_eq!(adjust_brightness("#eedd88", 0.8), "#beb16d");
    assert_eq!(adjust_brightness("#000000", 0.5), "#000000");
    // Channels clamp at 255.
    assert_eq!(adjust_brightness("#808080", 4.0), "#ffffff");
}

// ─── Unit conversion ─────────────────────────────────────────────────

#[test]
fn millimeters_to_points() {
    assert!((mm_to_pt(1.0) - 2.8346456692913).abs() < 1e-12);
    // A4 landscape and Letter landscape in whole points.
    assert_eq!(mm_to_pt_int(297.0), 842);
    assert_eq!(mm_to_pt_int(210.0), 595);
    assert_eq!(mm_to_pt_int(279.4), 792);
    assert_eq!(mm_to_pt_int(215.9), 612);
}

// ─── File-safe names ─────────────────────────────────────────────────

#[test]
fn file_safe_names_spell_out_accidentals() {
    assert_eq!(
        file_safe_name("Guitar: Standard tuning, A♯ Minor (Aeolian) scale, Capo II"),
        "Guitar_Standard_tuning_A_sharp_Minor_Aeolian_scale_Capo_II"
    );
    assert_eq!(
        file_safe_name("Ukulele: Soprano in C tuning, A♭ Dorian scale"),
        "Ukulele_Soprano_in_C_tuning_A_flat_Dorian_scale"
    );
}
