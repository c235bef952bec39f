pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod formatter;
pub mod models;
pub mod predicate;
pub mod scanner;
pub mod size;

use anyhow::{bail, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::finder::Finder;
use self::formatter::OutputGenerator;

/// Parses arguments, runs the finder and prints the matching files.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    // 3. Build the Finder
    let finder = Finder::new(&config.root).apply(&config.options);
    if let Err(err) = finder.check() {
        if !config.lenient {
            bail!("Invalid search configuration for {}: {}", config.root, err);
        }
        log::warn!("Ignoring configuration error: {}", err);
    }

    // 4. Walk
    let report = finder.walk();
    for skipped in &report.skipped {
        log::info!("Skipped: {}", skipped.reason);
    }

    let mut entries = report.entries;
    if entries.is_empty() {
        log::warn!("No files matched the given filters.");
        return Ok(());
    }
    if config.sort {
        OutputGenerator::sort_entries(&mut entries);
    }

    // 5. Print to Stdout
    println!(
        "{}",
        OutputGenerator::generate_list(&entries, finder.root(), config.long_output)
    );

    Ok(())
}
