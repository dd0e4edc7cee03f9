//! Logger setup for the binaries.
//!
//! The terminal runner owns the screen, so its log lines go to a file or nowhere.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

/// Log to `path` (appending) when given, otherwise discard everything.
pub fn init(path: Option<&Path>) -> Result<()> {
    let target = match path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Target::Pipe(Box::new(file))
        }
        None => Target::Pipe(Box::new(io::sink())),
    };
    builder()
        .target(target)
        .try_init()
        .context("logger already initialized")
}

/// Log to stderr, for headless tools whose stdout is data.
pub fn init_stderr() -> Result<()> {
    builder()
        .target(Target::Stderr)
        .try_init()
        .context("logger already initialized")
}
