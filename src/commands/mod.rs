//! CLI subcommand handlers.

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod show;

use anyhow::Result;
use tealtimer::{Config, TimerStore};

/// Open the timer store at the configured location.
pub fn open_store(config: &Config) -> Result<TimerStore> {
    let path = TimerStore::resolve_path(config.storage.data_dir.as_deref())?;
    Ok(TimerStore::open(path))
}
