//! Styling shared by cells and rows.

use crate::board::{CellValue, Mark};
use ratatui::style::{Color, Modifier, Style};

/// Colors and display options for board widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    x: Color,
    o: Color,
    hint: Color,
    show_numbers: bool,
}

impl Theme {
    /// Creates a theme from mark colors, hint color and the numbering flag.
    pub fn new(x: Color, o: Color, hint: Color, show_numbers: bool) -> Self {
        Self {
            x,
            o,
            hint,
            show_numbers,
        }
    }

    /// Whether empty cells show their 1-based position.
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    /// Style for a cell holding the given value.
    pub fn value_style(&self, value: CellValue) -> Style {
        match value {
            CellValue::Empty => Style::default().fg(self.hint),
            CellValue::Marked(Mark::X) => Style::default().fg(self.x).add_modifier(Modifier::BOLD),
            CellValue::Marked(Mark::O) => Style::default().fg(self.o).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for grid lines between cells and rows.
    pub fn separator_style(&self) -> Style {
        Style::default().fg(self.hint)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Color::Blue, Color::Red, Color::DarkGray, false)
    }
}
