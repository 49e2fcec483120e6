//! Config subcommands handler

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use tealtimer::config::{migrate_config, MigrationResult};
use tealtimer::tui::current_theme;
use tealtimer::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let palette = current_theme();
    println!("{}", palette.primary_text(&toml_str));
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;
    let palette = current_theme();

    // Ensure config exists
    if !config_path.exists() {
        let config = Config::default();
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        palette.primary_text(&format!(
            "Opening {} with {}",
            config_path.display(),
            editor
        ))
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}

/// Migrate config file by adding missing fields.
///
/// Reads the existing config file (or empty if it doesn't exist), adds any
/// missing fields from the current defaults, shows a preview of the
/// additions, and prompts for confirmation unless `--yes` was given.
#[cfg(not(tarpaulin_include))]
pub fn handle_migrate(yes: bool) -> Result<()> {
    let palette = current_theme();
    let config_path = Config::config_path()?;
    let file_exists = config_path.exists();

    // Read existing content (empty string if file doesn't exist)
    let content = if file_exists {
        fs::read_to_string(&config_path)?
    } else {
        String::new()
    };

    let result = migrate_config(&content)?;

    if !result.has_changes() {
        println!("{}", palette.primary_text("Config is already up to date."));
        return Ok(());
    }

    if file_exists {
        println!(
            "{}",
            palette.primary_text(&format!(
                "Found {} missing field(s):",
                result.added_fields.len()
            ))
        );
    } else {
        println!(
            "{}",
            palette.primary_text("Config file does not exist. Will create with default settings.")
        );
    }
    println!();
    print_additions(&result);
    println!();

    let message = if file_exists {
        format!("Apply these changes to {}?", config_path.display())
    } else {
        format!("Create {}?", config_path.display())
    };
    if !yes && !prompt_confirmation(&message)? {
        println!("{}", palette.primary_text("No changes made."));
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&config_path, &result.content)?;
    println!("{}", palette.success_text("Config updated successfully."));

    Ok(())
}

/// Print the added fields as a diff-style preview with `+` prefixes.
fn print_additions(result: &MigrationResult) {
    let palette = current_theme();
    for section in &result.sections_added {
        println!("{}", palette.success_text(&format!("+ [{}]", section)));
    }
    for field in &result.added_fields {
        println!("{}", palette.success_text(&format!("+ {}", field)));
    }
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let palette = current_theme();

    if !atty::is(atty::Stream::Stdin) {
        println!(
            "{}",
            palette.secondary_text("Non-interactive mode: use --yes to apply changes automatically")
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
