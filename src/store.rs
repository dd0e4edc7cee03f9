//! Best score persisted as a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::ScoreStore;

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// `{"best_score": N}` on disk.
///
/// A missing or unreadable file loads as 0. Write failures are logged and
/// otherwise ignored so play continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn try_load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        let file: BestScoreFile = serde_json::from_str(&text)
            .with_context(|| format!("malformed best score file {}", self.path.display()))?;
        Ok(Some(file.best_score))
    }

    pub fn try_save(&self, best: u32) -> Result<()> {
        let text = serde_json::to_string(&BestScoreFile { best_score: best })?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        match self.try_load() {
            Ok(best) => best.unwrap_or(0),
            Err(e) => {
                warn!("[Store] {:#}; starting from 0", e);
                0
            }
        }
    }

    fn save(&mut self, best: u32) {
        if let Err(e) = self.try_save(best) {
            warn!("[Store] {:#}", e);
        }
    }
}
