//! `list` subcommand: interactive grid, or a plain table with `--plain`.

use anyhow::Result;

use tealtimer::timer::now_local_ms;
use tealtimer::tui::{current_theme, GridApp, TuiApp};
use tealtimer::Config;

use super::open_store;

pub fn handle(config: &Config, plain: bool) -> Result<()> {
    let store = open_store(config)?;

    if plain {
        print_table(&store);
        return Ok(());
    }

    GridApp::new(store, config.clone())?.run()
}

/// Print the collection as a plain table (display order, live summaries).
fn print_table(store: &tealtimer::TimerStore) {
    let palette = current_theme();
    if store.is_empty() {
        println!("{}", palette.secondary_text("No timers."));
        return;
    }

    let now_ms = now_local_ms();
    for record in store.timers() {
        let remaining = record.remaining_at(now_ms);
        println!(
            "{}  {}  {}  {}",
            palette.primary_text(&format!("{:<28}", record.name)),
            palette.secondary_text(&format!("{:<18}", record.theme.as_str())),
            palette.secondary_text(&format!("{:<18}", record.target_date)),
            palette.accent_text(&remaining.display),
        );
    }
}
