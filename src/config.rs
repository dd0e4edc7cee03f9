//! Runtime configuration read from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_BEST_SCORE_PATH: &str = "kana-merge-best.json";

/// Settings for the terminal runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the spawn RNG.
    pub seed: u32,
    /// 1-based level to start on.
    pub level: usize,
    pub best_score_path: PathBuf,
    pub log_path: Option<PathBuf>,
    /// Keep the best score in memory only.
    pub save_disabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            level: 1,
            best_score_path: PathBuf::from(DEFAULT_BEST_SCORE_PATH),
            log_path: None,
            save_disabled: false,
        }
    }
}

impl AppConfig {
    /// Create from `KANA_MERGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("KANA_MERGE_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let level = non_empty("KANA_MERGE_LEVEL")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &usize| n >= 1)
            .unwrap_or(1);

        let best_score_path = non_empty("KANA_MERGE_BEST_SCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BEST_SCORE_PATH));

        let log_path = non_empty("KANA_MERGE_LOG_PATH").map(PathBuf::from);

        let save_disabled = non_empty("KANA_MERGE_DISABLE_SAVE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            seed,
            level,
            best_score_path,
            log_path,
            save_disabled,
        }
    }

    /// Zero-based level index for [`crate::core::Campaign`].
    pub fn level_index(&self) -> usize {
        self.level.saturating_sub(1)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
