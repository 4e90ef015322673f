//! Identifier classification.
//!
//! Before any field is checked, a sheet has to be able to tell people apart.
//! The classifier finds the identifier column and decides which single
//! identifier problem, if any, the sheet has. The checks run in this order and
//! the first that applies wins:
//!
//! 1. no identifier column and no name column: [`ErrorKind::NoIdentifier`]
//! 2. no identifier column but a name column: [`ErrorKind::IdMissing`]
//! 3. identifier column with undeclared kind: [`ErrorKind::NotSelectedIdType`]
//! 4. internal identifier column with empty cells: [`ErrorKind::IdValueMissing`]

use roster_model::{Column, ErrorKind, IdFieldKind, Sheet};

use crate::validators::is_present;

/// The identifier column that takes part in identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierColumn {
    /// Position in the sheet.
    pub index: usize,
    pub kind: IdFieldKind,
}

/// What the classifier learned about a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Positions of all selected columns, in sheet order.
    pub selected: Vec<usize>,
    /// First selected identifier column.
    pub identifier: Option<IdentifierColumn>,
    /// A selected column maps to `first_name` or `last_name`.
    pub has_name_columns: bool,
    /// The identifier problem, if any.
    pub outcome: Option<ErrorKind>,
}

impl Classification {
    /// Returns true if the sheet can identify people without problems.
    pub fn is_identifiable(&self) -> bool {
        self.outcome.is_none()
    }
}

/// Classify a sheet's columns.
///
/// Only the first selected identifier column is considered; later ones are
/// treated as if they were not there.
pub fn classify(sheet: &Sheet) -> Classification {
    let mut selected = Vec::new();
    let mut identifier = None;
    let mut has_name_columns = false;

    for (index, column) in sheet.selected_columns() {
        selected.push(index);
        match column {
            Column::Identifier { id_field, .. } => {
                if identifier.is_none() {
                    identifier = Some(IdentifierColumn {
                        index,
                        kind: *id_field,
                    });
                }
            }
            Column::Field { field, .. } => {
                has_name_columns |= field.is_name();
            }
        }
    }

    let outcome = identifier_outcome(sheet, identifier, has_name_columns);
    tracing::trace!(
        selected = selected.len(),
        identifier = ?identifier,
        has_name_columns,
        outcome = ?outcome,
        "classified sheet"
    );

    Classification {
        selected,
        identifier,
        has_name_columns,
        outcome,
    }
}

fn identifier_outcome(
    sheet: &Sheet,
    identifier: Option<IdentifierColumn>,
    has_name_columns: bool,
) -> Option<ErrorKind> {
    let Some(identifier) = identifier else {
        return Some(if has_name_columns {
            ErrorKind::IdMissing
        } else {
            ErrorKind::NoIdentifier
        });
    };

    match identifier.kind {
        IdFieldKind::Undeclared => Some(ErrorKind::NotSelectedIdType),
        IdFieldKind::Internal => {
            let any_empty = sheet
                .data_rows()
                .filter_map(|row| row.cell(identifier.index))
                .any(|cell| !is_present(cell));
            any_empty.then_some(ErrorKind::IdValueMissing)
        }
        IdFieldKind::External => None,
    }
}

#[cfg(test)]
mod tests {
    use roster_model::{FieldName, Row};

    use super::*;

    fn sheet(columns: Vec<Column>, rows: Vec<Row>) -> Sheet {
        Sheet::new("Test", true)
            .with_columns(columns)
            .with_rows(rows)
    }

    #[test]
    fn nothing_selected_means_no_identifier() {
        let sheet = sheet(
            vec![Column::field(FieldName::Phone).with_selected(false)],
            vec![],
        );
        let classification = classify(&sheet);
        assert!(classification.selected.is_empty());
        assert_eq!(classification.outcome, Some(ErrorKind::NoIdentifier));
    }

    #[test]
    fn a_single_name_column_is_enough_for_id_missing() {
        let sheet = sheet(vec![Column::field(FieldName::LastName)], vec![]);
        assert_eq!(classify(&sheet).outcome, Some(ErrorKind::IdMissing));
    }

    #[test]
    fn unselected_name_column_does_not_count() {
        let sheet = sheet(
            vec![
                Column::field(FieldName::FirstName).with_selected(false),
                Column::field(FieldName::Email),
            ],
            vec![],
        );
        assert_eq!(classify(&sheet).outcome, Some(ErrorKind::NoIdentifier));
    }

    #[test]
    fn first_selected_identifier_wins() {
        let sheet = sheet(
            vec![
                Column::identifier(IdFieldKind::Internal).with_selected(false),
                Column::identifier(IdFieldKind::External),
                Column::identifier(IdFieldKind::Undeclared),
            ],
            vec![Row::from_iter(["a", "b", "c"]), Row::from_iter(["", "x", ""])],
        );
        let classification = classify(&sheet);
        assert_eq!(
            classification.identifier,
            Some(IdentifierColumn {
                index: 1,
                kind: IdFieldKind::External
            })
        );
        assert!(classification.is_identifiable());
    }

    #[test]
    fn empty_internal_id_in_header_row_is_ignored() {
        let sheet = sheet(
            vec![Column::identifier(IdFieldKind::Internal)],
            vec![Row::from_iter([""]), Row::new(vec![7.into()])],
        );
        assert_eq!(classify(&sheet).outcome, None);
    }

    #[test]
    fn empty_internal_id_in_data_row() {
        let sheet = sheet(
            vec![Column::identifier(IdFieldKind::Internal)],
            vec![Row::from_iter(["ID"]), Row::from_iter([""])],
        );
        assert_eq!(classify(&sheet).outcome, Some(ErrorKind::IdValueMissing));
    }
}
