//! `delete` subcommand: remove a timer, with confirmation.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use tealtimer::tui::current_theme;
use tealtimer::Config;

use super::open_store;

pub fn handle(config: &Config, name: &str, yes: bool) -> Result<()> {
    let mut store = open_store(config)?;
    let Some(record) = store.find_by_name(name).cloned() else {
        bail!("no timer named \"{}\"", name);
    };

    if !yes && !prompt_confirmation(&format!("Delete \"{}\"?", record.name))? {
        let palette = current_theme();
        println!("{}", palette.primary_text("Nothing deleted."));
        return Ok(());
    }

    let removed = store.delete(record.id)?;
    let palette = current_theme();
    println!(
        "{}",
        palette.success_text(&format!("Deleted: {}", removed.name))
    );
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let palette = current_theme();

    // Check if stdin is a TTY - if not, skip prompt and return false
    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            palette.secondary_text("Non-interactive mode: use --yes to delete without a prompt")
        );
        return Ok(false);
    }

    print!("{} [y/N] ", palette.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
