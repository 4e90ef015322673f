//! Sheet columns.
//!
//! A column either maps to a target field or carries person identifiers.
//! The two roles are variants of [`Column`] so every consumer has to handle
//! both explicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{FieldName, FieldType};

/// Which kind of identifier an identifier column carries.
///
/// `Undeclared` means the operator has not chosen yet. It is distinct from
/// the column being absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdFieldKind {
    #[default]
    Undeclared,
    /// Record ids assigned by the target system.
    Internal,
    /// Ids from some other system, stored alongside the person.
    External,
}

impl IdFieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undeclared => "undeclared",
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl fmt::Display for IdFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positional slot of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Column {
    /// Maps to a named target field.
    Field { field: FieldName, selected: bool },
    /// Carries person identifiers.
    Identifier {
        #[serde(default)]
        id_field: IdFieldKind,
        selected: bool,
    },
}

impl Column {
    /// Selected data column mapped to `field`.
    pub fn field(field: FieldName) -> Self {
        Self::Field {
            field,
            selected: true,
        }
    }

    /// Selected identifier column of the given kind.
    pub fn identifier(id_field: IdFieldKind) -> Self {
        Self::Identifier {
            id_field,
            selected: true,
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Self::Field { selected, .. } | Self::Identifier { selected, .. } => *selected,
        }
    }

    /// Returns a copy with the selection flag replaced.
    #[must_use]
    pub fn with_selected(self, selected: bool) -> Self {
        match self {
            Self::Field { field, .. } => Self::Field { field, selected },
            Self::Identifier { id_field, .. } => Self::Identifier { id_field, selected },
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Field { field, .. } => field.field_type(),
            Self::Identifier { .. } => FieldType::Identifier,
        }
    }

    /// The mapped field, if this is a data column.
    pub fn field_name(&self) -> Option<FieldName> {
        match self {
            Self::Field { field, .. } => Some(*field),
            Self::Identifier { .. } => None,
        }
    }

    /// The identifier kind, if this is an identifier column.
    pub fn id_kind(&self) -> Option<IdFieldKind> {
        match self {
            Self::Field { .. } => None,
            Self::Identifier { id_field, .. } => Some(*id_field),
        }
    }

    /// Short label for logs and tables, e.g. `phone` or `id (internal)`.
    pub fn label(&self) -> String {
        match self {
            Self::Field { field, .. } => field.as_str().to_string(),
            Self::Identifier { id_field, .. } => format!("id ({id_field})"),
        }
    }
}
