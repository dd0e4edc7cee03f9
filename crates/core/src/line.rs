//! Line processor - compacts and merges one row or column
//!
//! A line is processed toward index 0. Empty cells are dropped, then tiles are
//! scanned pairwise: two neighbours whose levels differ by exactly one merge into
//! a tile one level above the higher of the two. Equal levels never merge.
//!
//! A merge that would reach the phrase length completes the phrase instead: both
//! tiles vanish, the completion is counted and the phrase bonus is awarded.

use arrayvec::ArrayVec;

use crate::grid::Line;
use crate::ids::TileIds;
use crate::types::{Tile, GRID_SIZE};

/// Result of processing one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Line,
    pub points: u32,
    pub completions: u32,
}

/// Points for merging into `level` (`2^level`).
pub fn merge_points(level: usize) -> u32 {
    1u32.checked_shl(level as u32).unwrap_or(u32::MAX)
}

/// Points for completing a phrase of `phrase_len` syllables (`2^phrase_len`).
pub fn completion_points(phrase_len: usize) -> u32 {
    merge_points(phrase_len)
}

/// Slide and merge one line toward its first cell.
///
/// Merged tiles take fresh ids from `ids`. Every input tile takes part in at most
/// one merge because a merge consumes both operands before the scan moves on.
pub fn process_line(line: Line, phrase_len: usize, ids: &mut TileIds) -> LineOutcome {
    let filtered: ArrayVec<Tile, GRID_SIZE> = line.iter().flatten().copied().collect();
    let mut merged: ArrayVec<Tile, GRID_SIZE> = ArrayVec::new();
    let mut points: u32 = 0;
    let mut completions: u32 = 0;

    let mut i = 0;
    while i < filtered.len() {
        let current = filtered[i];
        match filtered.get(i + 1) {
            Some(next) if current.merges_with(next) => {
                let new_level = current.level.max(next.level) as usize + 1;
                if new_level >= phrase_len {
                    completions += 1;
                    points = points.saturating_add(completion_points(phrase_len));
                } else {
                    merged.push(Tile::merged(ids.fresh(), new_level as u8));
                    points = points.saturating_add(merge_points(new_level));
                }
                i += 2;
            }
            _ => {
                merged.push(current);
                i += 1;
            }
        }
    }

    let mut out = [None; GRID_SIZE];
    for (slot, tile) in out.iter_mut().zip(merged) {
        *slot = Some(tile);
    }

    LineOutcome {
        line: out,
        points,
        completions,
    }
}
