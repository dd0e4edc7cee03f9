//! Game session - one level's lifecycle
//!
//! A session owns the board, the id counter, the injected random source and the
//! best-score store. It is mutated only through [`GameSession::apply_move`],
//! [`GameSession::reset_game`] and [`GameSession::set_phrase`].
//!
//! `LevelWon` and `GameOver` latch: once reached, moves are ignored until the
//! session is reset or handed a new phrase.

use log::{debug, info};

use crate::grid::Grid;
use crate::ids::TileIds;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_tile;
use crate::store::{MemoryScoreStore, ScoreStore};
use crate::terminal::evaluate;
use crate::transform::apply_move;
use crate::types::{Direction, GameAction, Phrase, SessionStatus, PHRASE_GOAL};

/// Tiles placed on a fresh board.
const STARTING_TILES: usize = 2;

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveReport {
    /// The board changed, a tile spawned and bookkeeping ran.
    pub effective: bool,
    pub points: u32,
    pub completions: u32,
    /// Cell of the spawned tile, if any.
    pub spawned: Option<(usize, usize)>,
    /// Status after the move.
    pub status: SessionStatus,
    /// The move raised the best score.
    pub new_best: bool,
}

impl MoveReport {
    fn ignored(status: SessionStatus) -> Self {
        Self {
            effective: false,
            points: 0,
            completions: 0,
            spawned: None,
            status,
            new_best: false,
        }
    }
}

/// State of one level being played.
#[derive(Debug, Clone)]
pub struct GameSession<R = SimpleRng, S = MemoryScoreStore> {
    phrase: Phrase,
    grid: Grid,
    ids: TileIds,
    rng: R,
    store: S,
    score: u32,
    best_score: u32,
    phrases_completed: u32,
    status: SessionStatus,
    /// Effective moves since the last reset.
    moves: u32,
}

impl<R: RandomSource, S: ScoreStore> GameSession<R, S> {
    /// Start a session on `phrase`. The best score is read from `store` once, here.
    pub fn new(phrase: Phrase, rng: R, store: S) -> Self {
        let best_score = store.load();
        let mut session = Self {
            phrase,
            grid: Grid::new(),
            ids: TileIds::new(),
            rng,
            store,
            score: 0,
            best_score,
            phrases_completed: 0,
            status: SessionStatus::Playing,
            moves: 0,
        };
        session.reset_game();
        session
    }

    /// Clear the board, rewind tile ids, spawn the starting tiles and zero the score.
    ///
    /// The best score is kept.
    pub fn reset_game(&mut self) {
        self.grid.clear();
        self.ids.reset();
        for _ in 0..STARTING_TILES {
            spawn_tile(&mut self.grid, self.phrase.len(), &mut self.ids, &mut self.rng);
        }
        self.score = 0;
        self.phrases_completed = 0;
        self.status = SessionStatus::Playing;
        self.moves = 0;

        info!(
            "[Session] New game on '{}' ({} syllables)",
            self.phrase.romaji(),
            self.phrase.len()
        );
    }

    /// Switch to another phrase (a level change). Always resets.
    pub fn set_phrase(&mut self, phrase: Phrase) {
        self.phrase = phrase;
        self.reset_game();
    }

    /// Resume from a stored position.
    ///
    /// Tile ids continue after the largest id on `grid`; the status is
    /// re-evaluated for the restored board.
    pub fn restore(&mut self, grid: Grid, score: u32, phrases_completed: u32) {
        self.grid = grid;
        self.ids = TileIds::after(grid.max_id());
        self.score = score;
        self.phrases_completed = phrases_completed.min(PHRASE_GOAL);
        self.status = evaluate(&self.grid, self.phrases_completed);
        self.moves = 0;
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save(self.best_score);
        }
    }

    /// Slide the board in `direction`.
    ///
    /// Ignored once the session is won or lost. A move that leaves every cell's
    /// `(id, level)` unchanged has no side effects at all.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.status.is_terminal() {
            return MoveReport::ignored(self.status);
        }

        let mut current = self.grid;
        current.settle();

        let outcome = apply_move(&current, direction, self.phrase.len(), &mut self.ids);
        if !outcome.is_effective(&current) {
            return MoveReport::ignored(self.status);
        }

        let mut next = outcome.grid;
        let spawned = spawn_tile(&mut next, self.phrase.len(), &mut self.ids, &mut self.rng);

        self.score = self.score.saturating_add(outcome.points);
        self.phrases_completed = self
            .phrases_completed
            .saturating_add(outcome.completions)
            .min(PHRASE_GOAL);

        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
            self.store.save(self.best_score);
        }

        self.status = evaluate(&next, self.phrases_completed);
        self.grid = next;
        self.moves += 1;

        debug!(
            "[Session] {} -> +{} pts, {} completions, spawn {:?}",
            direction.as_str(),
            outcome.points,
            outcome.completions,
            spawned
        );
        match self.status {
            SessionStatus::LevelWon => info!(
                "[Session] Level won: '{}' score={} moves={}",
                self.phrase.romaji(),
                self.score,
                self.moves
            ),
            SessionStatus::GameOver => info!(
                "[Session] Game over: '{}' score={} completed={}/{}",
                self.phrase.romaji(),
                self.score,
                self.phrases_completed,
                PHRASE_GOAL
            ),
            SessionStatus::Playing => {}
        }

        MoveReport {
            effective: true,
            points: outcome.points,
            completions: outcome.completions,
            spawned,
            status: self.status,
            new_best,
        }
    }

    /// Apply a host action. Returns whether the session changed.
    ///
    /// `NextLevel` belongs to the campaign; a bare session ignores it.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction).effective,
            GameAction::NewGame => {
                self.reset_game();
                true
            }
            GameAction::NextLevel => false,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            score: self.score,
            best_score: self.best_score,
            phrases_completed: self.phrases_completed,
            status: self.status,
            moves: self.moves,
            phrase_len: self.phrase.len(),
        }
    }
}

impl<R, S> GameSession<R, S> {
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn phrases_completed(&self) -> u32 {
        self.phrases_completed
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn is_level_won(&self) -> bool {
        self.status == SessionStatus::LevelWon
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
