//! Spawn policy - where and at what level a new tile appears
//!
//! New tiles are always one of the first two syllables. The choice between them
//! leans toward whichever is scarcer on the board, so sequential pairs keep
//! showing up:
//!
//! | Board | P(level 1) |
//! |-------|------------|
//! | level 0 count > level 1 count + 1 | 0.75 |
//! | level 1 count > level 0 count + 1 | 0.25 |
//! | otherwise | 0.5 |
//!
//! Phrases shorter than two syllables always spawn level 0.

use crate::grid::Grid;
use crate::ids::TileIds;
use crate::rng::RandomSource;
use crate::types::{
    Tile, SPAWN_BIAS_MARGIN, SPAWN_LEVEL1_BOOSTED, SPAWN_LEVEL1_CHANCE, SPAWN_LEVEL1_DAMPED,
};

/// Probability that the next spawn is level 1, given the current board.
pub fn level1_chance(grid: &Grid) -> f64 {
    let level0 = grid.count_level(0);
    let level1 = grid.count_level(1);

    if level0 > level1 + SPAWN_BIAS_MARGIN {
        SPAWN_LEVEL1_BOOSTED
    } else if level1 > level0 + SPAWN_BIAS_MARGIN {
        SPAWN_LEVEL1_DAMPED
    } else {
        SPAWN_LEVEL1_CHANCE
    }
}

/// Draw the level of the next spawned tile.
pub fn spawn_level<R: RandomSource + ?Sized>(grid: &Grid, phrase_len: usize, rng: &mut R) -> u8 {
    if phrase_len < 2 {
        return 0;
    }
    if rng.chance(level1_chance(grid)) {
        1
    } else {
        0
    }
}

/// Place one new tile on a uniformly chosen empty cell.
///
/// Returns the cell used, or `None` when the board is full (a no-op).
pub fn spawn_tile<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    phrase_len: usize,
    ids: &mut TileIds,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let (row, col) = empty[rng.next_below(empty.len() as u32) as usize];
    let level = spawn_level(grid, phrase_len, rng);
    grid.set(row, col, Some(Tile::spawned(ids.fresh(), level)));
    Some((row, col))
}
