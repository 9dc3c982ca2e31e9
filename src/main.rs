//! Board Row - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use board_row::{BoardConfig, DEFAULT_LOG_FILTER, indices_text, render_row_text, tui};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            row,
            values,
            width,
            config,
        } => {
            init_stderr_logging();
            run_render(row, &values, width, config.as_deref())
        }
        Command::Indices { row } => {
            init_stderr_logging();
            run_indices(row)
        }
        Command::Play { config, numbers } => run_play(config, numbers),
    }
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Render one row headlessly and print it
#[instrument(skip(values, config))]
fn run_render(row: usize, values: &str, width: u16, config: Option<&Path>) -> Result<()> {
    let theme = BoardConfig::load(config)?.theme()?;
    for line in render_row_text(row, values, width, theme)? {
        println!("{}", line);
    }
    Ok(())
}

/// Print the flat indices a row owns
fn run_indices(row: usize) -> Result<()> {
    println!("{}", indices_text(row)?);
    Ok(())
}

/// Run the interactive board
fn run_play(config: Option<PathBuf>, numbers: bool) -> Result<()> {
    let mut config = BoardConfig::load(config.as_deref())?;
    if numbers {
        config = config.with_show_numbers(true);
    }
    tui::run(&config)
}
