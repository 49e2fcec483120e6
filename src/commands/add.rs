//! `add` subcommand: create a timer from the command line.

use anyhow::{bail, Result};

use tealtimer::cli::AddArgs;
use tealtimer::timer::parse_target;
use tealtimer::tui::current_theme;
use tealtimer::{Config, ThemeKind, TimerRecord};

use super::open_store;

pub fn handle(config: &Config, args: AddArgs) -> Result<()> {
    if parse_target(&args.date).is_none() {
        bail!(
            "invalid target date \"{}\" (expected YYYY-MM-DDTHH:MM)",
            args.date
        );
    }

    let theme = args
        .theme
        .unwrap_or_else(|| ThemeKind::from(config.display.default_theme.clone()));
    let mut record = TimerRecord::new(args.name, args.description, args.date, theme);
    if let Some(color) = &args.color {
        if tealtimer::render::parse_hex_color(color).is_none() {
            bail!("invalid color \"{}\" (expected #rrggbb)", color);
        }
        record.set_theme_color(color);
    }
    if let Some(glow) = args.glow {
        record.set_glow_intensity(glow);
    }

    let mut store = open_store(config)?;
    let name = record.name.clone();
    store.add(record)?;

    let palette = current_theme();
    println!(
        "{}",
        palette.success_text(&format!("Created timer: {} [{}]", name, theme))
    );
    Ok(())
}
