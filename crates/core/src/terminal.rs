//! Terminal evaluator - win and loss detection

use crate::grid::Grid;
use crate::types::{SessionStatus, GRID_SIZE, PHRASE_GOAL};

/// Whether any move can still change the board.
///
/// True iff there is an empty cell, or two horizontally or vertically adjacent
/// tiles whose levels differ by exactly one.
pub fn can_continue(grid: &Grid) -> bool {
    if grid.has_empty_cell() {
        return true;
    }

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let Some(tile) = grid.tile(row, col) else {
                continue;
            };
            let right = grid.tile(row, col + 1);
            let below = grid.tile(row + 1, col);
            if right.is_some_and(|t| tile.merges_with(&t))
                || below.is_some_and(|t| tile.merges_with(&t))
            {
                return true;
            }
        }
    }

    false
}

/// Classify a board after an effective move.
///
/// Reaching the completion goal wins even when the board is otherwise stuck.
pub fn evaluate(grid: &Grid, phrases_completed: u32) -> SessionStatus {
    if phrases_completed >= PHRASE_GOAL {
        SessionStatus::LevelWon
    } else if !can_continue(grid) {
        SessionStatus::GameOver
    } else {
        SessionStatus::Playing
    }
}
