//! Frame layout for the interactive board.

use super::app::App;
use crate::board::{CellValue, Mark, RowIndex};
use crate::components::{Row, RowProps, cell_areas};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Draws the whole screen and returns the areas the three rows occupy.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new(vec![
        Line::styled(
            "Board Row - Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "arrows/enter/mouse click, x/o/e pen, c clear, q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let row_areas = draw_board(frame, chunks[1], app);

    let status = format!(
        "{}  |  pen: {}",
        app.status_message(),
        pen_symbol(app.pen())
    );
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    row_areas
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 3] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);
    let row_areas = [rows[0], rows[2], rows[4]];

    // Rendering never clicks, so the handler is inert.
    let on_click = |_: usize| {};
    for (row_index, row_area) in RowIndex::ALL.into_iter().zip(row_areas) {
        let row = Row::new(RowProps::new(row_index, app.board(), &on_click)).theme(app.theme());
        frame.render_widget(&row, row_area);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    let (cursor_row, cursor_column) = app.cursor();
    let cursor_area = cell_areas(row_areas[cursor_row.index()])[cursor_column.offset()];
    frame
        .buffer_mut()
        .set_style(cursor_area, Style::default().bg(Color::White).fg(Color::Black));

    row_areas
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn pen_symbol(pen: CellValue) -> &'static str {
    match pen {
        CellValue::Empty => "·",
        CellValue::Marked(Mark::X) => "X",
        CellValue::Marked(Mark::O) => "O",
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
