//! Board Row - stateless tic-tac-toe widgets
//!
//! Renders a 3x3 board from two pieces: a [`Cell`] that shows one value and
//! forwards clicks, and a [`Row`] that maps a row of the flat nine-value
//! board onto three cells. Clicks travel back to the parent as flat indices
//! (`row * 3 + column`).
//!
//! # Example
//!
//! ```
//! use board_row::{Board, Column, Row, RowIndex, RowProps};
//! use std::cell::Cell;
//!
//! let board: Board = "X,O,,,X,,O,,".parse().unwrap();
//! let clicked = Cell::new(None);
//! let on_click = |index: usize| clicked.set(Some(index));
//!
//! let row = Row::new(RowProps::new(RowIndex::Middle, &board, &on_click));
//! let labels: Vec<String> = row.cells().iter().map(|c| c.label().to_string()).collect();
//! assert_eq!(labels, ["", "X", ""]);
//!
//! row.click(Column::Center);
//! assert_eq!(clicked.get(), Some(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod components;
mod config;
mod error;
mod output;

pub mod tui;

// Crate-level exports - Board values and addressing
pub use board::{
    BOARD_LEN, Board, CellValue, Column, Mark, ROW_LEN, RowIndex, flat_index, split_flat_index,
};

// Crate-level exports - Widgets
pub use components::{Cell, Row, RowProps, Theme, buffer_lines, cell_areas, render_lines};

// Crate-level exports - Command output
pub use output::{ROW_HEIGHT, indices_text, render_row_text, row_text};

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError, DEFAULT_LOG_FILTER};

// Crate-level exports - Errors
pub use error::BoardError;
