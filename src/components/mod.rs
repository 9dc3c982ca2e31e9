//! Stateless board widgets.

mod cell;
mod row;
mod theme;

pub use cell::Cell;
pub use row::{Row, RowProps, cell_areas};
pub use theme::Theme;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Renders a widget into a fresh buffer and returns its text, one string per line.
pub fn render_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_lines(&buf)
}

/// Text content of a buffer, one string per line.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
