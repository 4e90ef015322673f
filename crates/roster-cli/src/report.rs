//! Report types produced by the `check` and `resolve` commands.

use futures_util::future::join_all;
use roster_map::{
    ColumnValues, Directory, MappingStatus, ResolutionTracker, ResolveError, ResolveTarget,
    mapping_status, resolve_column,
};
use roster_model::{CountryCode, ErrorKind, MappingResult, Sheet};
use roster_validate::{ValidateError, forsee_errors};
use serde::{Serialize, Serializer};

use crate::logging::redact_value;

/// Number of sample values shown next to a column.
pub const SAMPLE_LIMIT: usize = 3;

/// Outcome of `roster check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub sheet: String,
    pub country: String,
    pub data_rows: usize,
    pub errors: Vec<ErrorKind>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Forecast the problems of `sheet`.
pub fn check_sheet(sheet: &Sheet, country: &CountryCode) -> Result<CheckReport, ValidateError> {
    let errors = forsee_errors(sheet, country)?;
    tracing::info!(
        sheet = %sheet.title,
        errors = errors.len(),
        "checked sheet"
    );
    Ok(CheckReport {
        sheet: sheet.title.clone(),
        country: country.to_string(),
        data_rows: sheet.data_row_count(),
        errors,
    })
}

/// One column of `roster resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub label: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: MappingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<MappingResult>,
    pub distinct_values: usize,
    pub samples: Vec<String>,
}

/// Outcome of `roster resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub sheet: String,
    pub columns: Vec<ColumnReport>,
    /// Set once if the directory could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
}

impl ResolveReport {
    /// Returns true if a selected column still needs configuration or mapping.
    pub fn has_pending(&self) -> bool {
        self.columns
            .iter()
            .any(|column| column.status.is_pending())
    }
}

/// The wire and table name of `status`.
pub fn status_label(status: &MappingStatus) -> &'static str {
    match status {
        MappingStatus::Unselected => "unselected",
        MappingStatus::Ready => "ready",
        MappingStatus::NeedsConfig => "needs config",
        MappingStatus::NeedsMapping => "needs mapping",
        MappingStatus::Mapped(_) => "mapped",
    }
}

fn serialize_status<S: Serializer>(
    status: &MappingStatus,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(status_label(status))
}

/// Resolve every selected resolvable column of `sheet` concurrently.
///
/// A directory outage does not fail the report; it is recorded once and the
/// affected columns keep their pending status.
///
/// # Errors
///
/// Returns [`ResolveError::Structure`] for a malformed sheet.
pub async fn resolve_sheet(
    sheet: &Sheet,
    directory: &dyn Directory,
) -> Result<ResolveReport, ResolveError> {
    sheet.check_shape()?;

    let mut tracker = ResolutionTracker::new();
    let pending: Vec<_> = sheet
        .selected_columns()
        .filter(|(_, column)| ResolveTarget::for_column(column).is_some())
        .map(|(index, _)| tracker.begin(index))
        .collect();

    let outcomes = join_all(
        pending
            .iter()
            .map(|ticket| resolve_column(sheet, ticket.column(), directory)),
    )
    .await;

    let mut unavailable = None;
    for (ticket, outcome) in pending.into_iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                tracker.complete(ticket, result);
            }
            Err(ResolveError::Unavailable { source }) => {
                unavailable.get_or_insert_with(|| source.to_string());
            }
            Err(other) => return Err(other),
        }
    }

    let mut columns = Vec::with_capacity(sheet.columns.len());
    for (index, column) in sheet.columns.iter().enumerate() {
        let values = ColumnValues::collect(sheet, index)?;
        for value in values.samples(SAMPLE_LIMIT) {
            tracing::trace!(column = index, value = redact_value(value), "sample value");
        }
        let status = mapping_status(column, tracker.result(index));
        columns.push(ColumnReport {
            index,
            header: sheet.header(index),
            label: column.label(),
            status,
            mapping: match status {
                MappingStatus::Mapped(result) => Some(result),
                _ => None,
            },
            distinct_values: values.len(),
            samples: values
                .samples(SAMPLE_LIMIT)
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    if let Some(reason) = &unavailable {
        tracing::warn!(reason = %reason, "directory unavailable; mappings left pending");
    }

    Ok(ResolveReport {
        sheet: sheet.title.clone(),
        columns,
        unavailable,
    })
}
