use super::*;

#[test]
fn whole_numbers_render_without_fraction() {
    assert_eq!(Cell::Number(3.0).as_text(), "3");
    assert_eq!(Cell::Number(6285609918821.0).as_text(), "6285609918821");
}

#[test]
fn fractional_numbers_keep_fraction() {
    assert_eq!(Cell::Number(2.5).as_text(), "2.5");
}

#[test]
fn blank_detection() {
    assert!(Cell::Empty.is_blank());
    assert!(Cell::Text("   ".to_string()).is_blank());
    assert!(!Cell::Text("x".to_string()).is_blank());
    assert!(!Cell::Number(0.0).is_blank());
}

#[test]
fn row_blank_when_all_cells_blank() {
    assert!(row_is_blank(&[]));
    assert!(row_is_blank(&[Cell::Empty, Cell::from(" ")]));
    assert!(!row_is_blank(&[Cell::Empty, Cell::from("Ana")]));
}

#[test]
fn empty_str_converts_to_empty_cell() {
    assert_eq!(Cell::from(""), Cell::Empty);
    assert_eq!(Cell::from("a"), Cell::Text("a".to_string()));
}
