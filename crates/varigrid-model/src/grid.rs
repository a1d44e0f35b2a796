#![deny(unsafe_code)]

use std::borrow::Cow;

/// One cell of a grid. Absent cells behave the same as `Blank`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// The trimmed display text, or `None` when the cell is blank.
    pub fn trimmed(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Cow::Borrowed(trimmed))
                }
            }
            Self::Number(value) => Some(Cow::Owned(value.to_string())),
            Self::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_none()
    }

    /// Display text for export ("" for blank cells).
    pub fn render(&self) -> String {
        match self {
            Self::Text(raw) => raw.clone(),
            Self::Number(value) => value.to_string(),
            Self::Blank => String::new(),
        }
    }
}

/// A rectangular-ish grid of cells. Rows may be ragged; a position past the
/// end of its row reads as blank.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn trimmed(&self, row: usize, column: usize) -> Option<Cow<'_, str>> {
        self.cell(row, column).and_then(CellValue::trimmed)
    }

    pub fn is_blank(&self, row: usize, column: usize) -> bool {
        self.trimmed(row, column).is_none()
    }

    /// The highest column index holding a non-blank value in any row.
    pub fn last_populated_column(&self) -> Option<usize> {
        let mut last = None;
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate().rev() {
                if !cell.is_blank() {
                    if last.is_none_or(|current| index > current) {
                        last = Some(index);
                    }
                    break;
                }
            }
        }
        last
    }
}
