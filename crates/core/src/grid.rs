//! Grid module - the 4x4 board of tiles
//!
//! Cells are stored in a flat row-major array, `(row, col)` with both in `0..4`.
//! The grid has no game rules of its own; sliding lives in `transform`, spawning
//! in `spawn` and stuck detection in `terminal`.

use arrayvec::ArrayVec;

use crate::types::{Cell, Tile, GRID_CELLS, GRID_SIZE};

/// A row or column of the board, in processing order.
pub type Line = [Cell; GRID_SIZE];

/// The game board - 4 rows x 4 columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Cell at `(row, col)`; `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Tile at `(row, col)`, if any.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.get(row, col).flatten()
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> Line {
        let start = row * GRID_SIZE;
        let mut line = [None; GRID_SIZE];
        line.copy_from_slice(&self.cells[start..start + GRID_SIZE]);
        line
    }

    pub fn set_row(&mut self, row: usize, line: Line) {
        let start = row * GRID_SIZE;
        self.cells[start..start + GRID_SIZE].copy_from_slice(&line);
    }

    /// Rows become columns.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col * GRID_SIZE + row] = self.cells[row * GRID_SIZE + col];
            }
        }
        out
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), GRID_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| (idx / GRID_SIZE, idx % GRID_SIZE))
            .collect()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Number of tiles at `level`.
    pub fn count_level(&self, level: u8) -> usize {
        self.tiles().filter(|t| t.level == level).count()
    }

    /// Clear the `is_new` / `is_merged` hints on every tile.
    pub fn settle(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            *tile = tile.settled();
        }
    }

    /// Cell-by-cell comparison on `(id, level)`, ignoring presentation hints.
    ///
    /// Merged tiles always carry fresh ids, so any merge registers as a change.
    pub fn same_layout(&self, other: &Grid) -> bool {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .all(|(a, b)| match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a.same_identity(b),
                _ => false,
            })
    }

    /// Whether every tile id on the board is distinct.
    pub fn ids_unique(&self) -> bool {
        let mut ids: ArrayVec<u32, GRID_CELLS> = self.tiles().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.windows(2).all(|w| w[0] != w[1])
    }

    /// Largest tile id on the board (0 when empty).
    pub fn max_id(&self) -> u32 {
        self.tiles().map(|t| t.id).max().unwrap_or(0)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }

    /// Build from rows.
    pub fn from_rows(rows: [Line; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (r, line) in rows.into_iter().enumerate() {
            grid.set_row(r, line);
        }
        grid
    }

    /// Build from a level layout, numbering tiles `1..` in row-major order.
    ///
    /// Handy for setting up boards in tests and replays.
    pub fn from_levels(levels: [[Option<u8>; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        let mut next_id = 1;
        for (r, row) in levels.iter().enumerate() {
            for (c, level) in row.iter().enumerate() {
                if let Some(level) = level {
                    grid.set(r, c, Some(Tile::new(next_id, *level)));
                    next_id += 1;
                }
            }
        }
        grid
    }

    /// Level layout of the board.
    pub fn levels(&self) -> [[Option<u8>; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[None; GRID_SIZE]; GRID_SIZE];
        for (idx, cell) in self.cells.iter().enumerate() {
            out[idx / GRID_SIZE][idx % GRID_SIZE] = cell.map(|t| t.level);
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
