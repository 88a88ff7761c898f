//! Fretting-position matching.
//!
//! Slides a fragment template across the pitch matrix and collects the
//! cells of every exact placement into a highlight set.

use std::collections::HashSet;

use log::debug;

use crate::data;
use crate::model::{ScaleId, TuningId};

/// Match a named fragment against a pitch matrix.
///
/// Looks up the first pattern set whose tuning and scale tags both cover
/// the current pair, then slides the fragment's window across the matrix
/// one fret at a time. A placement counts only when every cell agrees on
/// presence; the sign of a fragment marker is an octave annotation and is
/// ignored. All matching placements contribute their marked cells.
///
/// Returns `None` when no pattern set covers the pair or the fragment name
/// is unknown; otherwise the matched (fret, string) cells, possibly empty.
pub fn match_pattern(
    name: &str,
    tuning: TuningId,
    scale: ScaleId,
    matrix: &[Vec<bool>],
) -> Option<HashSet<(usize, usize)>> {
    let set = data::patterns()
        .iter()
        .find(|p| p.tunings.contains(&tuning) && p.scales.contains(&scale))?;
    let fragment = set.fragments.iter().find(|f| f.name == name)?;

    let mut cells = HashSet::new();
    let rows = matrix.len();
    if rows == 0 || fragment.cells.len() != rows {
        return Some(cells);
    }

    let span = fragment.cells.iter().map(|row| row.len()).max().unwrap_or(0);
    let frets = matrix[0].len();
    if span == 0 || span > frets {
        return Some(cells);
    }

    for offset in 0..=frets - span {
        let hit = (0..rows).all(|row| {
            (0..span).all(|col| {
                let marked = fragment.cells[row].get(col).is_some_and(|&c| c != 0);
                marked == matrix[row][offset + col]
            })
        });
        if !hit {
            continue;
        }

        debug!("pattern '{}' matches at fret offset {}", fragment.name, offset);
        for (row, cell_row) in fragment.cells.iter().enumerate() {
            for (col, &cell) in cell_row.iter().enumerate() {
                if cell != 0 {
                    cells.insert((offset + col, row));
                }
            }
        }
    }

    Some(cells)
}
