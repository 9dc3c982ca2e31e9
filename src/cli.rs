//! Command-line interface for board_row.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Board Row - stateless tic-tac-toe rows in the terminal
#[derive(Parser, Debug)]
#[command(name = "board_row")]
#[command(about = "Render tic-tac-toe rows and route clicks to flat indices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one row of a board to stdout
    Render {
        /// Row to render (0, 1 or 2)
        #[arg(short, long)]
        row: usize,

        /// Nine comma-separated values, e.g. "X,O,,,X,,O,,"
        #[arg(short, long)]
        values: String,

        /// Output width in columns
        #[arg(long, default_value = "23")]
        width: u16,

        /// Path to display config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the flat indices owned by a row
    Indices {
        /// Row to inspect (0, 1 or 2)
        #[arg(short, long)]
        row: usize,
    },

    /// Run the interactive board
    Play {
        /// Path to display config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show positions in empty squares
        #[arg(long)]
        numbers: bool,
    },
}
