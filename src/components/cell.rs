//! A single clickable board position.

use super::Theme;
use crate::board::CellValue;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};
use tracing::{instrument, trace};

/// Displays one value and forwards clicks to its callback.
///
/// The callback runs only from [`Cell::click`]; rendering never calls it.
pub struct Cell<F> {
    value: CellValue,
    on_click: F,
    placeholder: Option<String>,
    theme: Theme,
}

impl<F: FnMut()> Cell<F> {
    /// Creates a cell showing `value` that calls `on_click` when clicked.
    pub fn new(value: CellValue, on_click: F) -> Self {
        Self {
            value,
            on_click,
            placeholder: None,
            theme: Theme::default(),
        }
    }

    /// Text shown in place of an empty value.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the styling used when rendering.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The value this cell displays.
    pub fn value(&self) -> CellValue {
        self.value
    }

    /// The text this cell renders.
    pub fn label(&self) -> &str {
        match (self.value, &self.placeholder) {
            (CellValue::Empty, Some(placeholder)) => placeholder.as_str(),
            (value, _) => value.label(),
        }
    }

    /// Handles one user interaction by calling the callback once.
    #[instrument(skip(self), fields(value = ?self.value))]
    pub fn click(&mut self) {
        trace!("Cell clicked");
        (self.on_click)();
    }
}

impl<F: FnMut()> Widget for &Cell<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        // Single line, vertically centered.
        let line = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Paragraph::new(self.label())
            .style(self.theme.value_style(self.value))
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}
