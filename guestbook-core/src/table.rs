use serde::{Deserialize, Serialize};

/// A single untyped cell decoded from a spreadsheet or CSV file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Rows of cells in file order. No schema, rows may differ in length.
pub type RawTable = Vec<Vec<Cell>>;

impl Cell {
    /// Render the cell as text the way a user would read it in the sheet.
    ///
    /// Whole numbers lose their fractional part, so a spreadsheet `3.0`
    /// becomes `"3"` and a phone stored as a number keeps all its digits.
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Self::Bool(b) => b.to_string(),
        }
    }

    /// True for empty cells and text that is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// True when every cell in the row is blank (or the row has no cells).
pub fn row_is_blank(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
