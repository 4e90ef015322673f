//! Distinct values of one column.

use std::collections::HashMap;

use roster_model::{ModelError, Sheet};

/// A distinct trimmed value and the number of data rows carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub rows: usize,
}

/// Summary of the values in one column, header row excluded.
///
/// Values are compared after trimming and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnValues {
    entries: Vec<ValueCount>,
    /// Value to its position in `entries`.
    index: HashMap<String, usize>,
    empty: usize,
}

impl ColumnValues {
    /// Collect the values of column `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::ColumnOutOfRange`] if `index` is not a column.
    pub fn collect(sheet: &Sheet, index: usize) -> Result<Self, ModelError> {
        let mut values = Self::default();
        for cell in sheet.column_cells(index)? {
            let text = cell.as_text();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                values.empty += 1;
                continue;
            }
            match values.index.get(trimmed) {
                Some(&position) => values.entries[position].rows += 1,
                None => {
                    values
                        .index
                        .insert(trimmed.to_string(), values.entries.len());
                    values.entries.push(ValueCount {
                        value: trimmed.to_string(),
                        rows: 1,
                    });
                }
            }
        }
        Ok(values)
    }

    pub fn entries(&self) -> &[ValueCount] {
        &self.entries
    }

    /// Distinct values in first-seen order.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.value.as_str())
    }

    /// Number of distinct non-empty values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Data rows whose value is `value` (compared trimmed).
    pub fn rows_with(&self, value: &str) -> usize {
        self.index
            .get(value.trim())
            .map_or(0, |&position| self.entries[position].rows)
    }

    /// Data rows with an empty cell in this column.
    pub fn empty_cells(&self) -> usize {
        self.empty
    }

    /// Up to `limit` distinct values, for hints next to a column.
    pub fn samples(&self, limit: usize) -> Vec<&str> {
        self.distinct().take(limit).collect()
    }
}
