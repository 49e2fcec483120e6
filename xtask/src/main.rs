//! Repository task runner.
//!
//! Currently a single task: generating man pages from the CLI definition.
//! Run with `cargo run -p xtask -- man`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Repository tasks")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate man pages for tealtimer and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

/// Render one page for the top-level command plus one per subcommand.
fn generate_man_pages(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let cmd = tealtimer::cli::Cli::command();

    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out_dir.join("tealtimer.1"), &buffer)?;

    for sub in cmd.get_subcommands() {
        let mut buffer = Vec::new();
        Man::new(sub.clone()).render(&mut buffer)?;
        let name = format!("tealtimer-{}.1", sub.get_name());
        fs::write(out_dir.join(name), &buffer)?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}
