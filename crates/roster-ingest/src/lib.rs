//! Sheet ingestion for the people-import checker.
//!
//! # Features
//!
//! - **CSV Loading**: read a CSV file into a [`Sheet`](roster_model::Sheet), header row kept
//! - **Configuration**: load JSON column mappings and apply them to a sheet
//! - **Suggestions**: guess column mappings from header text
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{ReadOptions, SheetConfig, read_sheet};
//!
//! let sheet = read_sheet(Path::new("people.csv"), &ReadOptions::default())?;
//! let config = SheetConfig::load(Path::new("people.json"))?;
//! let sheet = config.apply(sheet)?;
//! ```

mod config;
mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{MAX_CSV_FILE_SIZE, ReadOptions, read_sheet, unmapped_column};

// === Configuration ===
pub use config::{SheetConfig, suggest_columns};
