//! Mapping feedback shown next to each column.

use roster_model::{Column, MappingResult};

use crate::resolve::ResolveTarget;

/// Where a column stands in the mapping step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingStatus {
    Unselected,
    /// Selected and needs no directory configuration.
    Ready,
    /// Identifier column without a resolution yet.
    NeedsConfig,
    /// Organization or tag column without a resolution yet.
    NeedsMapping,
    Mapped(MappingResult),
}

impl MappingStatus {
    /// Returns true if the operator still has to act on the column.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::NeedsConfig | Self::NeedsMapping)
    }
}

/// Status of `column` given its latest accepted resolution.
///
/// An undeclared identifier column always needs configuration.
pub fn mapping_status(column: &Column, result: Option<&MappingResult>) -> MappingStatus {
    if !column.is_selected() {
        return MappingStatus::Unselected;
    }
    let is_identifier = matches!(column, Column::Identifier { .. });
    if !is_identifier && !column.field_type().is_resolvable() {
        return MappingStatus::Ready;
    }
    match (ResolveTarget::for_column(column), result) {
        (Some(_), Some(result)) => MappingStatus::Mapped(*result),
        _ if is_identifier => MappingStatus::NeedsConfig,
        _ => MappingStatus::NeedsMapping,
    }
}
