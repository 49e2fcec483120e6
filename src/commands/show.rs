//! `show` subcommand: live view of one timer, or a one-shot line.

use anyhow::{bail, Result};

use tealtimer::timer::now_local_ms;
use tealtimer::tui::{current_theme, ViewApp, ViewOutcome};
use tealtimer::Config;

use super::open_store;

pub fn handle(config: &Config, name: &str, once: bool) -> Result<()> {
    let mut store = open_store(config)?;
    let Some(record) = store.find_by_name(name).cloned() else {
        bail!("no timer named \"{}\"", name);
    };

    if once {
        let remaining = record.remaining_at(now_local_ms());
        let palette = current_theme();
        println!(
            "{} {}",
            palette.primary_text(&format!("{}:", record.name)),
            palette.accent_text(&remaining.display),
        );
        return Ok(());
    }

    match ViewApp::run_for(&mut store, config, record.id)? {
        ViewOutcome::Deleted(deleted) => {
            let palette = current_theme();
            println!("{}", palette.success_text(&format!("Deleted: {}", deleted)));
        }
        ViewOutcome::Back => {}
    }
    Ok(())
}
