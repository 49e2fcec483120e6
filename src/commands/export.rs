//! `export` subcommand: write a snapshot of a timer's display to a file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::error;

use tealtimer::export::export_snapshot;
use tealtimer::timer::now_local_ms;
use tealtimer::tui::current_theme;
use tealtimer::Config;

use super::open_store;

pub fn handle(config: &Config, name: &str, output: Option<&Path>) -> Result<()> {
    let store = open_store(config)?;
    let Some(record) = store.find_by_name(name).cloned() else {
        bail!("no timer named \"{}\"", name);
    };

    let out_dir = output
        .map(Path::to_path_buf)
        .or_else(|| config.export.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    match export_snapshot(&record, &out_dir, now_local_ms()) {
        Ok(path) => {
            let palette = current_theme();
            println!(
                "{}",
                palette.success_text(&format!("Saved {}", path.display()))
            );
            Ok(())
        }
        Err(e) => {
            error!(timer = %record.name, error = %e, "snapshot export failed");
            Err(e)
        }
    }
}
