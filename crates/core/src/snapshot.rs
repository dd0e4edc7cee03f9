use crate::grid::Grid;
use crate::types::{SessionStatus, PHRASE_GOAL};

/// Everything a renderer needs from a session, by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub best_score: u32,
    pub phrases_completed: u32,
    pub status: SessionStatus,
    pub moves: u32,
    pub phrase_len: usize,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn is_level_won(&self) -> bool {
        self.status == SessionStatus::LevelWon
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Completions toward the level goal, as `(collected, goal)`.
    pub fn goal_progress(&self) -> (u32, u32) {
        (self.phrases_completed.min(PHRASE_GOAL), PHRASE_GOAL)
    }
}

/// Session snapshot plus where the player is in the phrase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CampaignSnapshot {
    pub game: GameSnapshot,
    /// Zero-based index of the active phrase.
    pub level: usize,
    pub level_count: usize,
    /// Every phrase has been won.
    pub complete: bool,
}
