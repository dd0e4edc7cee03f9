//! Kana Merge (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and shared type crates under one name,
//! and adds the host-side glue the binaries share: environment configuration,
//! logger setup and the JSON best-score file.

pub use kana_merge_core as core;
pub use kana_merge_input as input;
pub use kana_merge_term as term;
pub use kana_merge_types as types;

pub mod config;
pub mod logging;
pub mod store;

pub use config::AppConfig;
pub use store::JsonFileStore;
