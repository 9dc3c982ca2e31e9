//! Application state and logic.

use super::input::{Cursor, move_cursor};
use crate::board::{Board, CellValue, Column, Mark, RowIndex};
use crate::components::{Row, RowProps, Theme};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use std::cell::Cell;
use tracing::{debug, info, warn};

/// Parent of the board rows: owns the values and handles clicks.
///
/// Clicking writes the current pen into the clicked position. There are no
/// game rules here.
pub struct App {
    board: Board,
    pen: CellValue,
    cursor: Cursor,
    theme: Theme,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application with an empty board.
    pub fn new(theme: Theme) -> Self {
        Self {
            board: Board::new(),
            pen: CellValue::Marked(Mark::X),
            cursor: (RowIndex::Top, Column::Left),
            theme,
            status_message: "Click a square or press Enter.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the value written by the next click.
    pub fn pen(&self) -> CellValue {
        self.pen
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the widget theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cursor(),
            KeyCode::Char('x') => self.set_pen(CellValue::Marked(Mark::X)),
            KeyCode::Char('o') => self.set_pen(CellValue::Marked(Mark::O)),
            KeyCode::Char('e') => self.set_pen(CellValue::Empty),
            KeyCode::Char('c') => {
                debug!("Clearing board");
                self.board.clear();
                self.status_message = "Board cleared.".to_string();
            }
            _ => {}
        }
    }

    /// Clicks the cell under the keyboard cursor.
    pub fn click_cursor(&mut self) {
        let (row_index, column) = self.cursor;
        let clicked = Cell::new(None);
        let on_click = |index: usize| clicked.set(Some(index));
        Row::new(RowProps::new(row_index, &self.board, &on_click)).click(column);
        if let Some(index) = clicked.get() {
            self.apply_click(index);
        }
    }

    /// Clicks whichever cell lies under `(x, y)`, given the rendered row areas.
    pub fn click_at(&mut self, row_areas: &[Rect; 3], x: u16, y: u16) {
        let clicked = Cell::new(None);
        let on_click = |index: usize| clicked.set(Some(index));
        for (row_index, area) in RowIndex::ALL.into_iter().zip(row_areas) {
            let row = Row::new(RowProps::new(row_index, &self.board, &on_click));
            if let Some(index) = row.click_at(*area, x, y) {
                self.cursor = (row_index, Column::ALL[index - row_index.base()]);
                break;
            }
        }
        if let Some(index) = clicked.get() {
            self.apply_click(index);
        }
    }

    fn set_pen(&mut self, pen: CellValue) {
        debug!(?pen, "Pen changed");
        self.pen = pen;
        self.status_message = format!("Pen: {}", pen_name(pen));
    }

    fn apply_click(&mut self, index: usize) {
        match self.board.set(index, self.pen) {
            Ok(()) => {
                info!(index, pen = ?self.pen, "Square clicked");
                self.status_message =
                    format!("Clicked square {} ({})", index + 1, pen_name(self.pen));
            }
            Err(e) => {
                warn!(error = %e, "Click rejected");
                self.status_message = format!("Click error: {}", e.message);
            }
        }
    }
}

fn pen_name(pen: CellValue) -> &'static str {
    match pen {
        CellValue::Empty => "erase",
        CellValue::Marked(Mark::X) => "X",
        CellValue::Marked(Mark::O) => "O",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::cell_areas;

    #[test]
    fn test_enter_writes_pen_at_cursor() {
        let mut app = App::new(Theme::default());
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.board().get(4), Some(CellValue::Marked(Mark::X)));
        assert_eq!(app.status_message(), "Clicked square 5 (X)");
    }

    #[test]
    fn test_pen_switch_and_erase() {
        let mut app = App::new(Theme::default());
        app.handle_key(KeyCode::Char('o'));
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.board().get(0), Some(CellValue::Marked(Mark::O)));

        app.handle_key(KeyCode::Char('e'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.board().get(0), Some(CellValue::Empty));
    }

    #[test]
    fn test_mouse_click_hits_row_cell() {
        let mut app = App::new(Theme::default());
        let rows = [
            Rect::new(0, 0, 32, 3),
            Rect::new(0, 4, 32, 3),
            Rect::new(0, 8, 32, 3),
        ];
        let target = cell_areas(rows[2])[2];
        app.click_at(&rows, target.x, target.y + 1);
        assert_eq!(app.board().get(8), Some(CellValue::Marked(Mark::X)));
        assert_eq!(app.cursor(), (RowIndex::Bottom, Column::Right));
    }

    #[test]
    fn test_mouse_click_on_separator_is_ignored() {
        let mut app = App::new(Theme::default());
        let rows = [
            Rect::new(0, 0, 32, 3),
            Rect::new(0, 4, 32, 3),
            Rect::new(0, 8, 32, 3),
        ];
        // Row 3 is the horizontal rule between the first two rows.
        app.click_at(&rows, 5, 3);
        assert_eq!(app.board(), &Board::new());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Theme::default());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
