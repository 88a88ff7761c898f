//! Small numeric and string helpers shared across the crate.

/// Millimeters to PostScript points (72 / 25.4).
pub const MM_TO_PT: f64 = 2.8346456692913;

/// Non-negative remainder of `n` modulo `d`.
///
/// Tuning offsets may be negative (drop and extended-range tunings), and the
/// raw `%` operator would hand back negative pitch classes for them; this
/// always lands in `0..d`.
pub fn mod_positive(n: i32, d: i32) -> i32 {
    ((n % d) + d) % d
}

/// Convert millimeters to points, keeping fractional precision.
/// Used for stroke widths and coordinates.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * MM_TO_PT
}

/// Convert millimeters to points, rounded to the nearest whole point.
/// Page size declarations take integral points.
pub fn mm_to_pt_int(mm: f64) -> i64 {
    (mm * MM_TO_PT).round() as i64
}

/// Roman numeral for a small positive number (capo positions).
pub fn to_roman(n: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut rest = n;
    let mut out = String::new();
    for &(value, symbol) in &TABLE {
        while rest >= value {
            out.push_str(symbol);
            rest -= value;
        }
    }
    out
}

/// Scale the brightness of a `#rrggbb` color, clamping each channel to 255.
pub fn adjust_brightness(color: &str, factor: f64) -> String {
    let rgb = u32::from_str_radix(color.trim_start_matches('#'), 16).unwrap_or(0);

    let channel = |c: u32| -> u32 { ((((c & 0xff) as f64) * factor).round() as u32).min(255) };

    let r = channel(rgb >> 16);
    let g = channel(rgb >> 8);
    let b = channel(rgb);

    format!("#{:06x}", (r << 16) | (g << 8) | b)
}

/// Derive a filesystem-safe name from a diagram title: spell out the
/// accidental glyphs, then collapse every run of other non-alphanumeric
/// characters into a single underscore.
pub fn file_safe_name(title: &str) -> String {
    let spelled = title
        .replace('♯', " sharp")
        .replace('♭', " flat")
        .replace('𝄪', " double sharp")
        .replace('𝄫', " double flat");

    let mut out = String::with_capacity(spelled.len());
    let mut gap = false;
    for ch in spelled.chars() {
        if ch.is_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('_');
            }
            gap = false;
            out.push(ch);
        } else {
            gap = true;
        }
    }
    out
}
