//! Plain-text output for the non-interactive commands.

use crate::board::{Board, RowIndex};
use crate::components::{Row, RowProps, Theme, render_lines};
use crate::error::BoardError;
use tracing::{debug, instrument};

/// Height of a rendered row: the value line with one line of padding either side.
pub const ROW_HEIGHT: u16 = 3;

/// Renders one row of `board` as text lines, trailing blanks trimmed.
#[instrument(skip(board, theme))]
pub fn row_text(row_index: RowIndex, board: &Board, width: u16, theme: Theme) -> Vec<String> {
    let on_click = |index: usize| debug!(index, "Click during render");
    let row = Row::new(RowProps::new(row_index, board, &on_click)).theme(theme);
    render_lines(&row, width, ROW_HEIGHT)
        .into_iter()
        .map(|line| line.trim_end().to_string())
        .collect()
}

/// Parses raw command input and renders the requested row.
#[instrument(skip(theme))]
pub fn render_row_text(
    row: usize,
    values: &str,
    width: u16,
    theme: Theme,
) -> Result<Vec<String>, BoardError> {
    let row_index = RowIndex::try_from(row)?;
    let board: Board = values.parse()?;
    Ok(row_text(row_index, &board, width, theme))
}

/// Space-separated flat indices owned by `row`, e.g. `"6 7 8"`.
#[instrument]
pub fn indices_text(row: usize) -> Result<String, BoardError> {
    let row_index = RowIndex::try_from(row)?;
    let board = Board::new();
    let on_click = |_: usize| {};
    let indices = Row::new(RowProps::new(row_index, &board, &on_click))
        .flat_indices()
        .map(|index| index.to_string())
        .join(" ");
    Ok(indices)
}
