//! Column value resolution.
//!
//! [`resolve_column`] asks the directory about every distinct value in a
//! column and reports how many values matched and how many data rows those
//! values cover. At most [`MAX_CONCURRENT_LOOKUPS`] lookups are in flight per
//! column, and all of them finish before anything is counted.

use futures_util::{StreamExt, TryStreamExt, stream};
use roster_model::{Column, FieldType, IdFieldKind, MappingResult, ModelError, Sheet};

use crate::directory::Directory;
use crate::error::{LookupError, ResolveError, Result};
use crate::values::ColumnValues;

/// Upper bound on directory lookups in flight for one column.
pub const MAX_CONCURRENT_LOOKUPS: usize = 16;

/// What a column's values are looked up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveTarget {
    Organization,
    Tag,
    Person(IdFieldKind),
}

impl ResolveTarget {
    /// The lookup for `column`, or `None` if it cannot be resolved.
    ///
    /// Identifier columns resolve only once their kind is declared.
    pub fn for_column(column: &Column) -> Option<Self> {
        match column {
            Column::Identifier { id_field, .. } => match id_field {
                IdFieldKind::Undeclared => None,
                kind => Some(Self::Person(*kind)),
            },
            Column::Field { field, .. } => match field.field_type() {
                FieldType::Organization => Some(Self::Organization),
                FieldType::Tag => Some(Self::Tag),
                _ => None,
            },
        }
    }

    async fn matches(
        self,
        directory: &dyn Directory,
        value: &str,
    ) -> std::result::Result<bool, LookupError> {
        Ok(match self {
            Self::Organization => directory.lookup_organization(value).await?.is_some(),
            Self::Tag => directory.lookup_tag(value).await?.is_some(),
            Self::Person(kind) => directory.lookup_person_id(value, kind).await?.is_some(),
        })
    }
}

/// Resolve column `index` of `sheet` against `directory`.
///
/// Values are trimmed, empty cells are skipped, and the header row is never
/// looked up. A value the directory does not know counts towards neither
/// total.
///
/// # Errors
///
/// - [`ResolveError::NotResolvable`] for columns that are not organization,
///   tag or declared identifier columns
/// - [`ResolveError::Unavailable`] once, if any lookup fails
/// - [`ResolveError::Structure`] for a malformed sheet or unknown column
pub async fn resolve_column(
    sheet: &Sheet,
    index: usize,
    directory: &dyn Directory,
) -> Result<MappingResult> {
    sheet.check_shape()?;
    let column = sheet
        .columns
        .get(index)
        .ok_or(ModelError::ColumnOutOfRange {
            index,
            len: sheet.columns.len(),
        })?;
    let target = ResolveTarget::for_column(column).ok_or_else(|| ResolveError::NotResolvable {
        index,
        label: column.label(),
    })?;

    let values = ColumnValues::collect(sheet, index)?;
    tracing::debug!(
        column = index,
        target = ?target,
        distinct = values.len(),
        "resolving column"
    );

    let matched: Vec<bool> = stream::iter(values.distinct())
        .map(|value| target.matches(directory, value))
        .buffered(MAX_CONCURRENT_LOOKUPS)
        .try_collect()
        .await
        .map_err(|source| {
            tracing::warn!(column = index, error = %source, "directory lookup failed");
            ResolveError::Unavailable { source }
        })?;

    let mut result = MappingResult::default();
    for (entry, found) in values.entries().iter().zip(matched) {
        if found {
            result.num_mapped_to += 1;
            result.num_people += entry.rows;
        }
    }

    tracing::debug!(
        column = index,
        num_mapped_to = result.num_mapped_to,
        num_people = result.num_people,
        "column resolved"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use roster_model::FieldName;

    use super::*;

    #[test]
    fn targets_follow_field_type() {
        assert_eq!(
            ResolveTarget::for_column(&Column::field(FieldName::Organization)),
            Some(ResolveTarget::Organization)
        );
        assert_eq!(
            ResolveTarget::for_column(&Column::field(FieldName::Tag)),
            Some(ResolveTarget::Tag)
        );
        assert_eq!(
            ResolveTarget::for_column(&Column::identifier(IdFieldKind::External)),
            Some(ResolveTarget::Person(IdFieldKind::External))
        );
        assert_eq!(
            ResolveTarget::for_column(&Column::identifier(IdFieldKind::Undeclared)),
            None
        );
        assert_eq!(ResolveTarget::for_column(&Column::field(FieldName::Phone)), None);
    }
}
