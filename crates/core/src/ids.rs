//! Tile id allocation.

/// Monotonic tile id counter owned by a session.
///
/// Ids start at 1 and are only rewound by an explicit new game, so every tile
/// present on the board at the same time has a distinct id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue numbering after `last` (used when adopting an existing board).
    pub fn after(last: u32) -> Self {
        Self {
            next: last.wrapping_add(1).max(1),
        }
    }

    /// Hand out the next id.
    pub fn fresh(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1).max(1);
        id
    }

    /// The id the next call to [`TileIds::fresh`] returns.
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for TileIds {
    fn default() -> Self {
        Self::new()
    }
}
