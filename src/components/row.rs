//! Three consecutive cells of the board.

use super::{Cell, Theme};
use crate::board::{Board, Column, ROW_LEN, RowIndex, flat_index};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    widgets::{Paragraph, Widget},
};
use tracing::{debug, instrument};

/// Inputs for a [`Row`].
pub struct RowProps<'a, F> {
    /// Which third of the board to show.
    pub row_index: RowIndex,
    /// The full board, owned by the parent.
    pub values: &'a Board,
    /// Parent click handler, called with the flat index clicked.
    pub on_click: &'a F,
}

impl<'a, F: Fn(usize)> RowProps<'a, F> {
    /// Bundles the row inputs.
    pub fn new(row_index: RowIndex, values: &'a Board, on_click: &'a F) -> Self {
        Self {
            row_index,
            values,
            on_click,
        }
    }
}

/// Maps one row of the flat board onto three cells.
///
/// The cells of a row cover exactly the flat indices `base..base + 3`,
/// where `base = row_index * 3`.
pub struct Row<'a, F> {
    props: RowProps<'a, F>,
    theme: Theme,
}

impl<'a, F: Fn(usize)> Row<'a, F> {
    /// Creates a row from its inputs.
    #[instrument(skip_all, fields(row = %props.row_index))]
    pub fn new(props: RowProps<'a, F>) -> Self {
        debug!(base = props.row_index.base(), "Building row");
        Self {
            props,
            theme: Theme::default(),
        }
    }

    /// Sets the styling passed on to each cell.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The row this instance renders.
    pub fn row_index(&self) -> RowIndex {
        self.props.row_index
    }

    /// Flat index of the first cell.
    pub fn base(&self) -> usize {
        self.props.row_index.base()
    }

    /// The three flat indices this row renders, left to right.
    pub fn flat_indices(&self) -> [usize; ROW_LEN] {
        Column::ALL.map(|column| flat_index(self.props.row_index, column))
    }

    /// Builds the three cells, each wired to call the parent with its own flat index.
    pub fn cells(&self) -> [Cell<impl Fn() + 'a>; ROW_LEN] {
        let row_index = self.props.row_index;
        let values = self.props.values;
        let on_click = self.props.on_click;
        let theme = self.theme;
        Column::ALL.map(move |column| {
            let index = flat_index(row_index, column);
            let handler = move || on_click(index);
            let cell = Cell::new(values[index], handler).theme(theme);
            if theme.show_numbers() {
                cell.placeholder((index + 1).to_string())
            } else {
                cell
            }
        })
    }

    /// Clicks the cell in `column`, returning the flat index reported to the parent.
    #[instrument(skip(self), fields(row = %self.props.row_index))]
    pub fn click(&self, column: Column) -> usize {
        let mut cells = self.cells();
        cells[column.offset()].click();
        let index = flat_index(self.props.row_index, column);
        debug!(index, "Row click forwarded");
        index
    }

    /// Clicks the cell rendered under `(x, y)` when the row occupies `area`.
    ///
    /// Returns the flat index clicked, or `None` when the point is on a
    /// separator or outside the row.
    #[instrument(skip(self), fields(row = %self.props.row_index))]
    pub fn click_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let point = Position::new(x, y);
        let column = cell_areas(area)
            .iter()
            .position(|cell_area| cell_area.contains(point))
            .map(Column::try_from)?
            .ok()?;
        Some(self.click(column))
    }
}

/// Screen areas of the three cells when a row is rendered into `area`.
pub fn cell_areas(area: Rect) -> [Rect; ROW_LEN] {
    let [left, _, center, _, right] = row_layout().areas(area);
    [left, center, right]
}

fn row_layout() -> Layout {
    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
}

impl<F: Fn(usize)> Widget for &Row<'_, F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = row_layout().split(area);
        for (cell, cell_area) in self.cells().iter().zip([cols[0], cols[2], cols[4]]) {
            cell.render(cell_area, buf);
        }
        for sep_area in [cols[1], cols[3]] {
            render_vertical_sep(sep_area, buf, self.theme);
        }
    }
}

fn render_vertical_sep(area: Rect, buf: &mut Buffer, theme: Theme) {
    let lines = vec!["│"; area.height as usize].join("\n");
    Paragraph::new(lines)
        .style(theme.separator_style())
        .alignment(Alignment::Center)
        .render(area, buf);
}
