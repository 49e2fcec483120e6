//! Command-line interface definition.
//!
//! Lives in the library so the `xtask` man-page generator can reuse it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::timer::ThemeKind;

/// Version string including git SHA and build date for dev builds.
pub fn version_string() -> &'static str {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("TEALTIMER_BUILD_DATE");
    let s = match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({} {})", base, sha, date),
        _ => format!("{} ({})", base, date),
    };
    Box::leak(s.into_boxed_str())
}

/// Terminal countdown timers with themed live displays.
#[derive(Debug, Parser)]
#[command(
    name = "tealtimer",
    version = version_string(),
    about = "Terminal countdown timers with themed live displays",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse timers in the interactive grid (the default)
    List {
        /// Print a plain table instead of opening the TUI
        #[arg(long)]
        plain: bool,
    },
    /// Create a new timer
    Add(AddArgs),
    /// Watch a single timer's live countdown
    Show {
        /// Timer name (case-insensitive)
        name: String,
        /// Print the remaining time once and exit
        #[arg(long)]
        once: bool,
    },
    /// Delete a timer
    Delete {
        /// Timer name (case-insensitive)
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export a snapshot of a timer's display to a text file
    Export {
        /// Timer name (case-insensitive)
        name: String,
        /// Output directory (default: export.output_dir or the current dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show, edit, or migrate the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Arguments for `tealtimer add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Timer name
    pub name: String,
    /// Target date and time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub date: String,
    /// Free-text description
    #[arg(long, default_value = "")]
    pub description: String,
    /// Visual theme (default: display.default_theme from config)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeKind>,
    /// Theme color as #rrggbb (default: teal)
    #[arg(long)]
    pub color: Option<String>,
    /// Glow intensity in [0, 1]
    #[arg(long)]
    pub glow: Option<f64>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Add missing fields to the configuration file
    Migrate {
        /// Apply without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_parses_theme_values() {
        let cli = Cli::parse_from([
            "tealtimer",
            "add",
            "Launch",
            "--date",
            "2030-06-15T12:30",
            "--theme",
            "chronometer-analog",
        ]);
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.theme, Some(ThemeKind::ChronometerAnalog));
        assert_eq!(args.date, "2030-06-15T12:30");
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["tealtimer"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn version_string_contains_package_version() {
        assert!(version_string().contains(env!("CARGO_PKG_VERSION")));
    }
}
