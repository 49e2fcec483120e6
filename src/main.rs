//! Binary entry point: parse the CLI, load config, dispatch.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tealtimer::cli::{Cli, Command, ConfigAction};
use tealtimer::tui::set_dark_mode;
use tealtimer::Config;

/// Environment variable controlling log verbosity.
const LOG_ENV: &str = "TEALTIMER_LOG";

fn main() -> Result<()> {
    // Logs go to stderr so they never corrupt the TUI or piped output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    set_dark_mode(config.display.dark_mode);

    match cli.command {
        // Bare invocation opens the grid
        None => commands::list::handle(&config, false),
        Some(Command::List { plain }) => commands::list::handle(&config, plain),
        Some(Command::Add(args)) => commands::add::handle(&config, args),
        Some(Command::Show { name, once }) => commands::show::handle(&config, &name, once),
        Some(Command::Delete { name, yes }) => commands::delete::handle(&config, &name, yes),
        Some(Command::Export { name, output }) => {
            commands::export::handle(&config, &name, output.as_deref())
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Migrate { yes } => commands::config::handle_migrate(yes),
        },
        Some(Command::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "tealtimer",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
