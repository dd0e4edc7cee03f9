//! Grid transform - applies the line processor to the whole board
//!
//! Horizontal moves process each row; vertical moves transpose first so columns
//! become rows, then transpose back. Lines heading right (or down) are reversed
//! before processing and reversed back afterwards, so merges always collapse
//! toward the edge the player is pushing against.

use crate::grid::{Grid, Line};
use crate::ids::TileIds;
use crate::line::process_line;
use crate::types::{Direction, GRID_SIZE};

/// Candidate board produced by a move, before any spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub points: u32,
    pub completions: u32,
}

impl MoveOutcome {
    /// A move is effective iff the board changed on `(id, level)` in any cell.
    pub fn is_effective(&self, before: &Grid) -> bool {
        !self.grid.same_layout(before)
    }
}

/// Slide every line of `grid` in `direction`.
pub fn apply_move(
    grid: &Grid,
    direction: Direction,
    phrase_len: usize,
    ids: &mut TileIds,
) -> MoveOutcome {
    let source = if direction.is_vertical() {
        grid.transposed()
    } else {
        *grid
    };

    let mut out = Grid::new();
    let mut points: u32 = 0;
    let mut completions: u32 = 0;

    for r in 0..GRID_SIZE {
        let mut line: Line = source.row(r);
        if direction.is_reversed() {
            line.reverse();
        }

        let processed = process_line(line, phrase_len, ids);
        let mut result = processed.line;
        if direction.is_reversed() {
            result.reverse();
        }

        out.set_row(r, result);
        points = points.saturating_add(processed.points);
        completions += processed.completions;
    }

    if direction.is_vertical() {
        out = out.transposed();
    }

    MoveOutcome {
        grid: out,
        points,
        completions,
    }
}

/// Whether sliding in `direction` would change the board.
///
/// Runs the transform on a scratch id counter, so the caller's ids are untouched.
pub fn can_slide(grid: &Grid, direction: Direction, phrase_len: usize) -> bool {
    let mut scratch = TileIds::after(grid.max_id());
    apply_move(grid, direction, phrase_len, &mut scratch).is_effective(grid)
}
