//! Error forecasting for a configured sheet.
//!
//! [`forsee_errors`] lists every problem category present in a sheet, once
//! each, in a fixed order:
//!
//! 1. the classifier's identifier outcome
//! 2. [`ErrorKind::Id`] for missing external ids or malformed internal ids,
//!    only when the classifier had no outcome
//! 3. format problems, in the order of the first offending column
//!
//! The UI keys messages and its "can we continue?" gate on this list, so the
//! order is part of the contract.

use roster_model::{Column, CountryCode, ErrorKind, IdFieldKind, Sheet};

use crate::classifier::{IdentifierColumn, classify};
use crate::context::ValidationContext;
use crate::error::Result;
use crate::validators::{self, is_present, is_well_formed_internal_id};

/// List the problem categories present in `sheet`.
///
/// Phone numbers are read in `country`. The sheet is not modified.
///
/// # Errors
///
/// Returns [`ValidateError::Structure`](crate::ValidateError::Structure) if a
/// row's width differs from the number of columns.
pub fn forsee_errors(sheet: &Sheet, country: &CountryCode) -> Result<Vec<ErrorKind>> {
    forsee_errors_with(sheet, &ValidationContext::new(country.clone()))
}

/// Same as [`forsee_errors`] with a prepared validation context.
///
/// # Errors
///
/// Returns [`ValidateError::Structure`](crate::ValidateError::Structure) if a
/// row's width differs from the number of columns.
pub fn forsee_errors_with(sheet: &Sheet, context: &ValidationContext) -> Result<Vec<ErrorKind>> {
    sheet.check_shape()?;

    let _span = tracing::debug_span!(
        "forsee_errors",
        sheet = %sheet.title,
        country = %context.country(),
        rows = sheet.data_row_count()
    )
    .entered();

    let mut errors = ErrorList::default();

    let classification = classify(sheet);
    match classification.outcome {
        // A classifier outcome ends the identifier checks for this pass.
        Some(outcome) => errors.push(outcome),
        None => {
            if let Some(identifier) = classification.identifier
                && has_bad_identifier_values(sheet, identifier)
            {
                errors.push(ErrorKind::Id);
            }
        }
    }

    for (index, column) in sheet.selected_columns() {
        let Column::Field { field, .. } = column else {
            continue;
        };
        let field_type = field.field_type();
        let Some(kind) = ErrorKind::for_field_type(field_type) else {
            continue;
        };
        if errors.contains(kind) {
            continue;
        }

        let first_invalid = sheet
            .data_rows()
            .filter_map(|row| row.cell(index))
            .position(|cell| !validators::is_valid(field_type, cell, context));
        if let Some(position) = first_invalid {
            tracing::trace!(
                column = index,
                field = %field,
                data_row = position,
                kind = %kind,
                "invalid value"
            );
            errors.push(kind);
        }
    }

    let errors = errors.into_vec();
    tracing::debug!(count = errors.len(), "forecast complete");
    Ok(errors)
}

/// Content problems in the identifier column that the classifier does not report.
fn has_bad_identifier_values(sheet: &Sheet, identifier: IdentifierColumn) -> bool {
    let mut cells = sheet
        .data_rows()
        .filter_map(|row| row.cell(identifier.index));
    match identifier.kind {
        IdFieldKind::External => cells.any(|cell| !is_present(cell)),
        IdFieldKind::Internal => {
            cells.any(|cell| is_present(cell) && !is_well_formed_internal_id(cell))
        }
        IdFieldKind::Undeclared => false,
    }
}

/// Insertion-ordered list that keeps each kind once.
#[derive(Debug, Default)]
struct ErrorList {
    kinds: Vec<ErrorKind>,
}

impl ErrorList {
    fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn push(&mut self, kind: ErrorKind) {
        if !self.contains(kind) {
            self.kinds.push(kind);
        }
    }

    fn into_vec(self) -> Vec<ErrorKind> {
        self.kinds
    }
}
