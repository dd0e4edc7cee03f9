//! Best-score persistence capability.
//!
//! The engine only needs to read one number when a session starts and write it
//! back when it grows. Where it lives (a file, browser storage, nowhere) is up to
//! the host, so sessions take any [`ScoreStore`].

/// Key-value access to the persisted best score.
///
/// Implementations swallow their own I/O failures: a broken store must never
/// interrupt play, it just forgets.
pub trait ScoreStore {
    /// Stored best score, or 0 when nothing is stored.
    fn load(&self) -> u32;

    /// Persist a new best score.
    fn save(&mut self, best: u32);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, best: u32) {
        (**self).save(best)
    }
}

/// In-memory store, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    best: u32,
    writes: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `best`.
    pub fn with_best(best: u32) -> Self {
        Self { best, writes: 0 }
    }

    /// Number of `save` calls seen.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.load(), 0);
        store.save(128);
        assert_eq!(store.load(), 128);
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn boxed_store_forwards() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::with_best(4));
        assert_eq!(store.load(), 4);
        store.save(9);
        assert_eq!(store.load(), 9);
    }
}
