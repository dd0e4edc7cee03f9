//! Shared types - data shapes and constants used by every kana-merge crate
//!
//! Everything here is plain data. Behavior (sliding, merging, spawning) lives in
//! `kana-merge-core`; this crate only names the things the engine moves around.
//!
//! # Board
//!
//! The board is a fixed 4x4 grid. Each cell is either empty or holds a [`Tile`]
//! whose `level` is the index of a syllable in the active [`Phrase`].
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns on the board |
//! | `PHRASE_GOAL` | 5 | Phrase completions needed to win a level |
//! | `MAX_PHRASE_LEN` | 31 | Longest phrase whose completion bonus fits a `u32` |
//! | `SPAWN_LEVEL1_CHANCE` | 0.5 | Chance of spawning level 1 when counts are balanced |
//! | `SPAWN_LEVEL1_BOOSTED` | 0.75 | Chance when level 0 tiles outnumber level 1 |
//! | `SPAWN_LEVEL1_DAMPED` | 0.25 | Chance when level 1 tiles outnumber level 0 |
//!
//! # Examples
//!
//! ```
//! use kana_merge_types::{Direction, GameAction, Phrase, GRID_SIZE};
//!
//! assert_eq!(Direction::from_str("L"), Some(Direction::Left));
//! assert_eq!(GameAction::from_str("up"), Some(GameAction::Move(Direction::Up)));
//!
//! let phrase = Phrase::from_pairs("はい", "hai", &[("は", "ha"), ("い", "i")]).unwrap();
//! assert_eq!(phrase.len(), 2);
//! assert_eq!(GRID_SIZE, 4);
//! ```

use std::fmt;

/// Board width and height in cells.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Number of phrase completions that wins a level.
pub const PHRASE_GOAL: u32 = 5;

/// Longest accepted phrase. Completing it awards `2^len` points.
pub const MAX_PHRASE_LEN: usize = 31;

/// Probability of spawning a level 1 tile when level 0 and level 1 counts are close.
pub const SPAWN_LEVEL1_CHANCE: f64 = 0.5;

/// Probability of spawning a level 1 tile when level 0 tiles dominate.
pub const SPAWN_LEVEL1_BOOSTED: f64 = 0.75;

/// Probability of spawning a level 1 tile when level 1 tiles dominate.
pub const SPAWN_LEVEL1_DAMPED: f64 = 0.25;

/// How far one early-level count may exceed the other before the spawn bias kicks in.
pub const SPAWN_BIAS_MARGIN: usize = 1;

/// Direction of a slide.
///
/// `Up`/`Down` are processed as `Left`/`Right` on the transposed grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a name or single letter (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use kana_merge_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a single move letter (`u`, `d`, `l`, `r`, case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether this direction moves along columns (processed via transposition).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether lines are processed back to front (toward the far edge).
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Actions a host can apply to a session or campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction.
    Move(Direction),
    /// Start the current level over.
    NewGame,
    /// Continue to the next phrase after a level is won.
    NextLevel,
}

impl GameAction {
    /// Parse an action name. Direction names map to [`GameAction::Move`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kana_merge_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("nextlevel"), Some(GameAction::NextLevel));
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "newgame" | "restart" => Some(GameAction::NewGame),
            "nextlevel" | "next" => Some(GameAction::NextLevel),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::NewGame => "newGame",
            GameAction::NextLevel => "nextLevel",
        }
    }
}

/// A tile on the board.
///
/// `is_new` and `is_merged` are presentation hints only. The engine clears them
/// at the start of every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub id: u32,
    pub level: u8,
    pub is_new: bool,
    pub is_merged: bool,
}

impl Tile {
    /// A plain tile with no presentation hints.
    pub fn new(id: u32, level: u8) -> Self {
        Self {
            id,
            level,
            is_new: false,
            is_merged: false,
        }
    }

    /// A tile produced by a spawn.
    pub fn spawned(id: u32, level: u8) -> Self {
        Self {
            is_new: true,
            ..Self::new(id, level)
        }
    }

    /// A tile produced by a sequential merge.
    pub fn merged(id: u32, level: u8) -> Self {
        Self {
            is_merged: true,
            ..Self::new(id, level)
        }
    }

    /// Same identity and level, ignoring presentation hints.
    pub fn same_identity(&self, other: &Tile) -> bool {
        self.id == other.id && self.level == other.level
    }

    /// Whether this tile and `other` sit on consecutive levels (a sequential merge pair).
    pub fn merges_with(&self, other: &Tile) -> bool {
        self.level.abs_diff(other.level) == 1
    }

    /// Drop the `is_new` / `is_merged` hints.
    pub fn settled(self) -> Self {
        Self {
            is_new: false,
            is_merged: false,
            ..self
        }
    }
}

/// A board cell: `None` when empty.
pub type Cell = Option<Tile>;

/// One syllable of a phrase: the glyph shown on the tile and its reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Syllable {
    pub glyph: String,
    pub romaji: String,
}

impl Syllable {
    pub fn new(glyph: impl Into<String>, romaji: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            romaji: romaji.into(),
        }
    }
}

/// The target phrase for a level. Tile levels index into `syllables`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    name: String,
    romaji: String,
    syllables: Vec<Syllable>,
}

impl Phrase {
    /// Build a phrase. Fails only when it is longer than [`MAX_PHRASE_LEN`].
    ///
    /// Phrases with fewer than two syllables are accepted: they never merge
    /// and the board simply fills up.
    pub fn new(
        name: impl Into<String>,
        romaji: impl Into<String>,
        syllables: Vec<Syllable>,
    ) -> Result<Self, EngineError> {
        if syllables.len() > MAX_PHRASE_LEN {
            return Err(EngineError::PhraseTooLong {
                len: syllables.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            romaji: romaji.into(),
            syllables,
        })
    }

    /// Build a phrase from `(glyph, romaji)` pairs.
    pub fn from_pairs(name: &str, romaji: &str, pairs: &[(&str, &str)]) -> Result<Self, EngineError> {
        let syllables = pairs
            .iter()
            .map(|&(glyph, reading)| Syllable::new(glyph, reading))
            .collect();
        Self::new(name, romaji, syllables)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn romaji(&self) -> &str {
        &self.romaji
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables; also the level cap for tiles.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Syllable shown for a tile level, if the level is in range.
    pub fn syllable(&self, level: u8) -> Option<&Syllable> {
        self.syllables.get(level as usize)
    }

    /// The last syllable: the one a completion "collects".
    pub fn final_syllable(&self) -> Option<&Syllable> {
        self.syllables.last()
    }
}

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SessionStatus {
    #[default]
    Playing,
    LevelWon,
    GameOver,
}

impl SessionStatus {
    /// `LevelWon` and `GameOver` latch until a reset or level change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Playing => "playing",
            SessionStatus::LevelWon => "levelWon",
            SessionStatus::GameOver => "gameOver",
        }
    }
}

/// Caller errors the engine refuses up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A campaign was built with no phrases.
    NoPhrases,
    /// A level index outside the supplied phrase list.
    LevelOutOfRange { index: usize, len: usize },
    /// A phrase whose completion bonus would overflow the score.
    PhraseTooLong { len: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoPhrases => write!(f, "no phrases supplied"),
            EngineError::LevelOutOfRange { index, len } => {
                write!(f, "level index {} out of range (have {} phrases)", index, len)
            }
            EngineError::PhraseTooLong { len } => write!(
                f,
                "phrase has {} syllables, at most {} are supported",
                len, MAX_PHRASE_LEN
            ),
        }
    }
}

impl std::error::Error for EngineError {}
