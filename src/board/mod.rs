mod index;
mod types;

pub use index::{Column, ROW_LEN, RowIndex, flat_index, split_flat_index};
pub use types::{BOARD_LEN, Board, CellValue, Mark};
