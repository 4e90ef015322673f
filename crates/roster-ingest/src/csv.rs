//! CSV file reading.
//!
//! A CSV file becomes a [`Sheet`] with every row kept, the header row
//! included, exactly as a spreadsheet upload would be. Whether the first row
//! is a header is part of the sheet, not of the rows. Every column starts out
//! unmapped and unselected until a configuration is applied.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::ReaderBuilder;
use roster_model::{CellValue, Column, IdFieldKind, Row, Sheet};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (50 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 50 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// How to read a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub delimiter: u8,
    pub first_row_is_headers: bool,
    pub max_size: u64,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            first_row_is_headers: true,
            max_size: MAX_CSV_FILE_SIZE,
        }
    }
}

/// Placeholder for a column nobody has configured yet.
pub fn unmapped_column() -> Column {
    Column::Identifier {
        id_field: IdFieldKind::Undeclared,
        selected: false,
    }
}

/// Read a CSV file into a [`Sheet`].
///
/// The sheet title is the file stem. Cells are kept as text; a UTF-8 BOM is
/// dropped.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] for I/O problems
/// - [`IngestError::FileTooLarge`] above `options.max_size`
/// - [`IngestError::UnsupportedEncoding`] for UTF-16 files
/// - [`IngestError::CsvParse`] for malformed CSV, including ragged rows
/// - [`IngestError::EmptyCsv`] when the file has no rows
pub fn read_sheet(path: &Path, options: &ReadOptions) -> Result<Sheet> {
    let bytes = read_bytes(path, options.max_size)?;
    check_encoding(path, &bytes)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .delimiter(options.delimiter)
        .from_reader(content);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        rows.push(Row::new(
            record
                .iter()
                .map(|field| CellValue::Text(field.to_string()))
                .collect(),
        ));
    }

    let width = match rows.first() {
        Some(row) => row.data.len(),
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = width,
        "read CSV sheet"
    );

    Ok(Sheet::new(title, options.first_row_is_headers)
        .with_columns(vec![unmapped_column(); width])
        .with_rows(rows))
}

fn read_bytes(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(|e| IngestError::io(path, e))?;
    Ok(bytes)
}

fn check_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    let encoding = match bytes.get(..2) {
        Some([0xFF, 0xFE]) => "UTF-16 LE",
        Some([0xFE, 0xFF]) => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}
