//! Shelf CLI - a single-user book collection manager.
//!
//! This is the command-line interface for Shelf. It loads the catalog
//! store once at startup, runs the interactive menu over stdin/stdout,
//! and persists only on the explicit save-and-exit choice.

use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;

use shelf_core::{CatalogStore, VERSION};

mod menu;
mod ui;

/// Shelf - track a personal book collection from the terminal
#[derive(Parser)]
#[command(name = "shelf")]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the library file
    #[arg(short, long, env = "SHELF_LIBRARY", default_value = "library.json")]
    library: String,

    /// Quiet mode (skip the startup banner)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut store = CatalogStore::load(&cli.library)
        .with_context(|| format!("Failed to load library from {}", cli.library))?;

    let term_is_dumb = std::env::var("TERM")
        .map(|term| term == "dumb")
        .unwrap_or(false);
    let ctx = ui::UiContext::resolve(io::stdout().is_terminal(), term_is_dumb);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    menu::run(&mut store, stdin, stdout, &ctx, cli.quiet)
}
