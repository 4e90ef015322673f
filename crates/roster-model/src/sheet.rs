use serde::{Deserialize, Serialize};

use crate::cell::CellValue;
use crate::column::Column;
use crate::error::{ModelError, Result};

/// One spreadsheet row, positionally aligned with the sheet's columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub data: Vec<CellValue>,
}

impl Row {
    pub fn new(data: Vec<CellValue>) -> Self {
        Self { data }
    }

    /// Cell at `index`, if the row is wide enough.
    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.data.get(index)
    }
}

impl<T: Into<CellValue>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A configured import source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub title: String,
    /// When set, row 0 holds headers and is excluded from validation and resolution.
    pub first_row_is_headers: bool,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(title: impl Into<String>, first_row_is_headers: bool) -> Self {
        Self {
            title: title.into(),
            first_row_is_headers,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Check that every row has one cell per column.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ShapeMismatch`] for the first row that does not.
    pub fn check_shape(&self) -> Result<()> {
        let expected = self.columns.len();
        for (row, data) in self.rows.iter().enumerate() {
            let found = data.data.len();
            if found != expected {
                return Err(ModelError::ShapeMismatch {
                    row,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Number of leading rows that are not data (0 or 1).
    pub fn header_rows(&self) -> usize {
        usize::from(self.first_row_is_headers)
    }

    /// Rows that carry person data, skipping the header row when present.
    pub fn data_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().skip(self.header_rows())
    }

    /// Number of data rows.
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(self.header_rows())
    }

    /// Cells of column `index` across data rows.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ColumnOutOfRange`] if `index` is not a column.
    pub fn column_cells(&self, index: usize) -> Result<impl Iterator<Item = &CellValue>> {
        if index >= self.columns.len() {
            return Err(ModelError::ColumnOutOfRange {
                index,
                len: self.columns.len(),
            });
        }
        Ok(self.data_rows().filter_map(move |row| row.cell(index)))
    }

    /// Header text for column `index`, when the first row is headers.
    pub fn header(&self, index: usize) -> Option<String> {
        if !self.first_row_is_headers {
            return None;
        }
        self.rows
            .first()
            .and_then(|row| row.cell(index))
            .map(|cell| cell.as_text().trim().to_string())
    }

    /// Selected columns with their positions, in sheet order.
    pub fn selected_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.is_selected())
    }
}
