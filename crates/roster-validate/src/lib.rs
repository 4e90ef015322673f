//! Validation for people-import sheets.
//!
//! This crate answers "what is wrong with this sheet?" before an import runs:
//!
//! - **Field validators** (`validators`): one pure check per field type
//! - **Classifier** (`classifier`): decides whether people can be identified at all
//! - **Forecast** (`foresee`): walks the sheet once and lists each problem category once
//!
//! Results are plain [`ErrorKind`] values in a fixed order: identifier problems
//! first, then format problems in column order.
//!
//! # Example
//!
//! ```ignore
//! use roster_model::CountryCode;
//! use roster_validate::forsee_errors;
//!
//! let country = CountryCode::new("SE")?;
//! let errors = forsee_errors(&sheet, &country)?;
//! for kind in &errors {
//!     println!("{kind}: {}", kind.description());
//! }
//! ```

pub mod classifier;
mod context;
mod error;
mod foresee;
pub mod validators;

pub use classifier::{Classification, IdentifierColumn, classify};
pub use context::ValidationContext;
pub use error::{Result, ValidateError};
pub use foresee::{forsee_errors, forsee_errors_with};

pub use roster_model::ErrorKind;
