//! Campaign - runs one session per phrase, in order
//!
//! The campaign owns the ordered phrase list and a single [`GameSession`]. Each
//! level change hands the session a new phrase, which resets it. Winning the
//! last phrase marks the campaign complete.

use log::info;

use crate::rng::{RandomSource, SimpleRng};
use crate::session::GameSession;
use crate::snapshot::CampaignSnapshot;
use crate::store::{MemoryScoreStore, ScoreStore};
use crate::types::{EngineError, GameAction, Phrase, SessionStatus, Syllable, PHRASE_GOAL};

/// An ordered run through a list of phrases.
#[derive(Debug, Clone)]
pub struct Campaign<R = SimpleRng, S = MemoryScoreStore> {
    phrases: Vec<Phrase>,
    level: usize,
    complete: bool,
    session: GameSession<R, S>,
}

fn check_level(level: usize, len: usize) -> Result<(), EngineError> {
    if len == 0 {
        return Err(EngineError::NoPhrases);
    }
    if level >= len {
        return Err(EngineError::LevelOutOfRange { index: level, len });
    }
    Ok(())
}

impl<R: RandomSource, S: ScoreStore> Campaign<R, S> {
    /// Start at `level` (zero-based).
    ///
    /// Fails immediately on an empty phrase list or an out-of-range level.
    pub fn new(phrases: Vec<Phrase>, level: usize, rng: R, store: S) -> Result<Self, EngineError> {
        check_level(level, phrases.len())?;
        let session = GameSession::new(phrases[level].clone(), rng, store);
        Ok(Self {
            phrases,
            level,
            complete: false,
            session,
        })
    }

    /// Jump to `level`, resetting the session on its phrase.
    pub fn select_level(&mut self, level: usize) -> Result<(), EngineError> {
        check_level(level, self.phrases.len())?;
        self.level = level;
        self.complete = false;
        self.session.set_phrase(self.phrases[level].clone());
        info!(
            "[Campaign] Level {}/{}: {}",
            level + 1,
            self.phrases.len(),
            self.phrases[level].name()
        );
        Ok(())
    }

    /// Move on after a win. Returns false unless the current level is won.
    ///
    /// Winning the last phrase completes the campaign instead of wrapping.
    pub fn advance(&mut self) -> bool {
        if self.complete || self.session.status() != SessionStatus::LevelWon {
            return false;
        }
        let next = self.level + 1;
        if next < self.phrases.len() {
            self.select_level(next).is_ok()
        } else {
            self.complete = true;
            info!("[Campaign] All {} phrases complete", self.phrases.len());
            true
        }
    }

    /// Back to the first phrase with a fresh board.
    pub fn restart_from_beginning(&mut self) {
        self.level = 0;
        self.complete = false;
        self.session.set_phrase(self.phrases[0].clone());
    }

    /// Apply a host action. Returns whether anything changed.
    ///
    /// `NewGame` restarts the current level, or the whole run once it is complete.
    /// Moves are ignored after completion.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::NextLevel if self.complete => {
                self.restart_from_beginning();
                true
            }
            GameAction::NextLevel => self.advance(),
            GameAction::NewGame if self.complete => {
                self.restart_from_beginning();
                true
            }
            GameAction::NewGame => {
                self.session.reset_game();
                true
            }
            GameAction::Move(_) if self.complete => false,
            GameAction::Move(direction) => self.session.apply_move(direction).effective,
        }
    }

    pub fn snapshot(&self) -> CampaignSnapshot {
        CampaignSnapshot {
            game: self.session.snapshot(),
            level: self.level,
            level_count: self.phrases.len(),
            complete: self.complete,
        }
    }
}

impl<R, S> Campaign<R, S> {
    /// Zero-based index of the active phrase.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn phrase(&self) -> &Phrase {
        self.session.phrase()
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn session(&self) -> &GameSession<R, S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<R, S> {
        &mut self.session
    }

    /// Completions toward the goal, clamped: `(collected, goal)`.
    pub fn goal_progress(&self) -> (u32, u32) {
        (self.session.phrases_completed().min(PHRASE_GOAL), PHRASE_GOAL)
    }

    /// The syllable the player is collecting (the last one of the phrase).
    pub fn final_syllable(&self) -> Option<&Syllable> {
        self.session.phrase().final_syllable()
    }
}
