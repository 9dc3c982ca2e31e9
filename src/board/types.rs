//! Core value types for the board.

use crate::error::BoardError;
use std::ops::Index;
use std::str::FromStr;
use tracing::instrument;

/// Number of positions on the board.
pub const BOARD_LEN: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Player A.
    X,
    /// Player B.
    O,
}

/// The value held by one board position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellValue {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Position holds a mark.
    Marked(Mark),
}

impl CellValue {
    /// Text shown for this value. Empty positions show nothing.
    pub fn label(self) -> &'static str {
        match self {
            CellValue::Empty => "",
            CellValue::Marked(Mark::X) => "X",
            CellValue::Marked(Mark::O) => "O",
        }
    }
}

impl FromStr for CellValue {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "." | "_" | "-" => Ok(CellValue::Empty),
            "X" | "x" => Ok(CellValue::Marked(Mark::X)),
            "O" | "o" => Ok(CellValue::Marked(Mark::O)),
            other => Err(BoardError::new(format!("Unknown cell value: {:?}", other))),
        }
    }
}

/// Nine board values in row-major order (0-8).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    values: [CellValue; BOARD_LEN],
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing set of values.
    pub fn from_values(values: [CellValue; BOARD_LEN]) -> Self {
        Self { values }
    }

    /// Gets the value at the given flat index.
    pub fn get(&self, index: usize) -> Option<CellValue> {
        self.values.get(index).copied()
    }

    /// Sets the value at the given flat index.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, value: CellValue) -> Result<(), BoardError> {
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| BoardError::new(format!("Flat index {} out of bounds", index)))?;
        *slot = value;
        Ok(())
    }

    /// Resets every position to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.values = [CellValue::Empty; BOARD_LEN];
    }

    /// Returns all values.
    pub fn values(&self) -> &[CellValue; BOARD_LEN] {
        &self.values
    }
}

impl Index<usize> for Board {
    type Output = CellValue;

    fn index(&self, index: usize) -> &CellValue {
        &self.values[index]
    }
}

/// Parses nine comma-separated values, e.g. `X,O,,,X,,O,,`.
impl FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split(',')
            .map(CellValue::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let values: [CellValue; BOARD_LEN] = parsed.try_into().map_err(|v: Vec<CellValue>| {
            BoardError::new(format!("Expected {} values, got {}", BOARD_LEN, v.len()))
        })?;
        Ok(Self { values })
    }
}

impl TryFrom<[&str; BOARD_LEN]> for Board {
    type Error = BoardError;

    fn try_from(labels: [&str; BOARD_LEN]) -> Result<Self, Self::Error> {
        let mut values = [CellValue::Empty; BOARD_LEN];
        for (slot, label) in values.iter_mut().zip(labels) {
            *slot = label.parse()?;
        }
        Ok(Self { values })
    }
}
