//! Tests for board values and row/column addressing.

use board_row::{Board, CellValue, Column, Mark, RowIndex, flat_index};

#[test]
fn test_parse_board_from_csv() {
    let board: Board = "X,O,,,X,,O,,".parse().expect("Valid board");
    assert_eq!(board.get(0), Some(CellValue::Marked(Mark::X)));
    assert_eq!(board.get(1), Some(CellValue::Marked(Mark::O)));
    assert_eq!(board.get(2), Some(CellValue::Empty));
    assert_eq!(board.get(4), Some(CellValue::Marked(Mark::X)));
    assert_eq!(board.get(8), Some(CellValue::Empty));
    assert_eq!(board.get(9), None);
}

#[test]
fn test_parse_rejects_wrong_length() {
    let err = "X,O,X".parse::<Board>().unwrap_err();
    assert!(err.message.contains("Expected 9 values, got 3"));

    assert!("X,,,,,,,,,O".parse::<Board>().is_err());
}

#[test]
fn test_parse_rejects_unknown_value() {
    let err = "X,O,Z,,,,,,".parse::<Board>().unwrap_err();
    assert!(err.message.contains("Unknown cell value"));
}

#[test]
fn test_cell_value_labels() {
    assert_eq!(CellValue::Empty.label(), "");
    assert_eq!(CellValue::Marked(Mark::X).label(), "X");
    assert_eq!(CellValue::Marked(Mark::O).label(), "O");
    assert_eq!("o".parse::<CellValue>().unwrap(), CellValue::Marked(Mark::O));
    assert_eq!(".".parse::<CellValue>().unwrap(), CellValue::Empty);
}

#[test]
fn test_set_and_clear() {
    let mut board = Board::new();
    board.set(7, CellValue::Marked(Mark::O)).expect("In bounds");
    assert_eq!(board[7], CellValue::Marked(Mark::O));
    assert!(board.set(9, CellValue::Marked(Mark::X)).is_err());

    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_row_index_conversion() {
    assert_eq!(RowIndex::try_from(0usize).unwrap(), RowIndex::Top);
    assert_eq!(RowIndex::try_from(2usize).unwrap(), RowIndex::Bottom);
    let err = RowIndex::try_from(3usize).unwrap_err();
    assert!(err.message.contains("Row index 3"));
    assert!(err.file.ends_with("index.rs"));
}

#[test]
fn test_column_conversion() {
    assert_eq!(Column::try_from(1usize).unwrap(), Column::Center);
    assert!(Column::try_from(3usize).is_err());
}

#[test]
fn test_flat_index_formula() {
    for row in RowIndex::ALL {
        assert_eq!(row.base(), row.index() * 3);
        for column in Column::ALL {
            assert_eq!(flat_index(row, column), row.index() * 3 + column.offset());
        }
    }
    assert_eq!(flat_index(RowIndex::Middle, Column::Center), 4);
}

#[test]
fn test_strum_iteration_matches_all() {
    use strum::IntoEnumIterator;
    assert_eq!(RowIndex::iter().collect::<Vec<_>>(), RowIndex::ALL.to_vec());
    assert_eq!(Column::iter().collect::<Vec<_>>(), Column::ALL.to_vec());
}
