//! Row and column addressing into the flat board.
//!
//! A board position is addressed by a flat index in `0..9`, computed as
//! `row * 3 + column`. Each row owns exactly the three indices
//! `base..base + 3` where `base = row * 3`.

use crate::error::BoardError;
use tracing::instrument;

/// Number of cells in a row.
pub const ROW_LEN: usize = 3;

/// One of the three rows of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum RowIndex {
    /// Row 0.
    Top,
    /// Row 1.
    Middle,
    /// Row 2.
    Bottom,
}

impl RowIndex {
    /// All rows, top to bottom.
    pub const ALL: [RowIndex; 3] = [RowIndex::Top, RowIndex::Middle, RowIndex::Bottom];

    /// Row number (0-2).
    pub fn index(self) -> usize {
        match self {
            RowIndex::Top => 0,
            RowIndex::Middle => 1,
            RowIndex::Bottom => 2,
        }
    }

    /// Flat index of the first cell in this row.
    pub fn base(self) -> usize {
        self.index() * ROW_LEN
    }

    /// Row above, staying put at the top edge.
    pub fn up(self) -> Self {
        match self {
            RowIndex::Top | RowIndex::Middle => RowIndex::Top,
            RowIndex::Bottom => RowIndex::Middle,
        }
    }

    /// Row below, staying put at the bottom edge.
    pub fn down(self) -> Self {
        match self {
            RowIndex::Top => RowIndex::Middle,
            RowIndex::Middle | RowIndex::Bottom => RowIndex::Bottom,
        }
    }
}

impl TryFrom<usize> for RowIndex {
    type Error = BoardError;

    #[instrument]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(RowIndex::Top),
            1 => Ok(RowIndex::Middle),
            2 => Ok(RowIndex::Bottom),
            _ => Err(BoardError::new(format!("Row index {} not in 0..3", index))),
        }
    }
}

/// Column offset within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Column {
    /// Offset 0.
    Left,
    /// Offset 1.
    Center,
    /// Offset 2.
    Right,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; 3] = [Column::Left, Column::Center, Column::Right];

    /// Offset from the row base (0-2).
    pub fn offset(self) -> usize {
        match self {
            Column::Left => 0,
            Column::Center => 1,
            Column::Right => 2,
        }
    }

    /// Column to the left, staying put at the edge.
    pub fn left(self) -> Self {
        match self {
            Column::Left | Column::Center => Column::Left,
            Column::Right => Column::Center,
        }
    }

    /// Column to the right, staying put at the edge.
    pub fn right(self) -> Self {
        match self {
            Column::Left => Column::Center,
            Column::Center | Column::Right => Column::Right,
        }
    }
}

impl TryFrom<usize> for Column {
    type Error = BoardError;

    #[instrument]
    fn try_from(offset: usize) -> Result<Self, Self::Error> {
        match offset {
            0 => Ok(Column::Left),
            1 => Ok(Column::Center),
            2 => Ok(Column::Right),
            _ => Err(BoardError::new(format!("Column offset {} not in 0..3", offset))),
        }
    }
}

/// Flat board index of a row/column pair.
pub fn flat_index(row: RowIndex, column: Column) -> usize {
    row.base() + column.offset()
}

/// Splits a flat index back into its row and column.
#[instrument]
pub fn split_flat_index(index: usize) -> Result<(RowIndex, Column), BoardError> {
    let row = RowIndex::try_from(index / ROW_LEN)?;
    let column = Column::try_from(index % ROW_LEN)?;
    Ok((row, column))
}
