//! Data model for people-import sheets.
//!
//! This crate holds the plain data the import checker works on:
//!
//! - **Sheet** (`sheet`): the configured import source, its rows and header flag
//! - **Columns** (`column`): data-field and identifier columns as a tagged union
//! - **Field registry** (`field`): the closed set of target fields and their types
//! - **Error kinds** (`error_kind`): the categories reported by validation
//! - **Mapping results** (`mapping`): aggregate resolution counts per column
//!
//! Nothing here validates or resolves data; see `roster-validate` and `roster-map`.

pub mod cell;
pub mod column;
pub mod country;
pub mod error;
pub mod error_kind;
pub mod field;
pub mod mapping;
pub mod sheet;

pub use cell::CellValue;
pub use column::{Column, IdFieldKind};
pub use country::CountryCode;
pub use error::{ModelError, Result};
pub use error_kind::ErrorKind;
pub use field::{FieldName, FieldType};
pub use mapping::MappingResult;
pub use sheet::{Row, Sheet};
