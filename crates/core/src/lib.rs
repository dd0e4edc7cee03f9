//! Core engine - pure, deterministic, and testable
//!
//! This crate holds every game rule: sliding, sequential merging, spawning and
//! win/loss detection. It has **no dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: randomness comes from an injected [`RandomSource`]
//! - **Testable**: every rule is a plain function over a [`Grid`]
//! - **Portable**: best-score persistence is an injected [`ScoreStore`]
//! - **Allocation-free moves**: lines and empty-cell lists live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 board with transposition and layout comparison
//! - [`line`]: compact-and-merge of a single row or column
//! - [`transform`]: applies the line processor across the board for a direction
//! - [`spawn`]: where and at what level new tiles appear
//! - [`terminal`]: stuck detection and win/loss classification
//! - [`session`]: one level's lifecycle and bookkeeping
//! - [`campaign`]: one session per phrase, in order
//! - [`rng`], [`store`], [`ids`]: injected capabilities and id allocation
//! - [`catalog`]: the built-in classroom phrases
//!
//! # Game Rules
//!
//! - **Sequential merge**: neighbours whose levels differ by exactly one merge into
//!   `max + 1`; equal levels never merge
//! - **Completion**: a merge reaching the phrase length removes both tiles and
//!   scores `2^len`; five completions win the level
//! - **Spawn**: one level 0 or 1 tile per effective move, biased toward the scarcer
//! - **Game over**: full board with no neighbour pair one level apart
//!
//! # Example
//!
//! ```
//! use kana_merge_core::{GameSession, MemoryScoreStore, SimpleRng};
//! use kana_merge_types::{Direction, Phrase};
//!
//! let phrase = Phrase::from_pairs(
//!     "おはよう",
//!     "ohayou",
//!     &[("お", "o"), ("は", "ha"), ("よ", "yo"), ("う", "u")],
//! )
//! .unwrap();
//! let mut session = GameSession::new(phrase, SimpleRng::new(12345), MemoryScoreStore::new());
//! assert_eq!(session.grid().tile_count(), 2);
//!
//! for direction in Direction::ALL {
//!     session.apply_move(direction);
//! }
//! assert!(session.best_score() >= session.score());
//! ```

pub mod campaign;
pub mod catalog;
pub mod grid;
pub mod ids;
pub mod line;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod store;
pub mod terminal;
pub mod transform;

pub use kana_merge_types as types;

// Re-export commonly used types for convenience
pub use campaign::Campaign;
pub use catalog::classroom_phrases;
pub use grid::{Grid, Line};
pub use ids::TileIds;
pub use line::{completion_points, merge_points, process_line, LineOutcome};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GameSession, MoveReport};
pub use snapshot::{CampaignSnapshot, GameSnapshot};
pub use spawn::{level1_chance, spawn_level, spawn_tile};
pub use store::{MemoryScoreStore, ScoreStore};
pub use terminal::{can_continue, evaluate};
pub use transform::{apply_move, can_slide, MoveOutcome};
