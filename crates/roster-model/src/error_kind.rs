//! Validation error categories.
//!
//! An [`ErrorKind`] says that a class of problem occurs somewhere in a sheet.
//! It does not point at cells; message rendering is keyed on the wire name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// Category of a data-quality problem found while checking a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// No identifier column and no name columns: people cannot be matched at all.
    NoIdentifier,
    /// Internal identifier column has empty cells.
    IdValueMissing,
    /// Identifier column selected but its kind is undeclared.
    NotSelectedIdType,
    /// Name columns present but no identifier column.
    IdMissing,
    /// Identifier column has missing or malformed values.
    Id,
    Phone,
    AltPhone,
    Gender,
    Email,
    PostCode,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 10] = [
        Self::NoIdentifier,
        Self::IdValueMissing,
        Self::NotSelectedIdType,
        Self::IdMissing,
        Self::Id,
        Self::Phone,
        Self::AltPhone,
        Self::Gender,
        Self::Email,
        Self::PostCode,
    ];

    /// Wire name used by message catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoIdentifier => "noIdentifier",
            Self::IdValueMissing => "idValueMissing",
            Self::NotSelectedIdType => "notSelectedIdType",
            Self::IdMissing => "idMissing",
            Self::Id => "id",
            Self::Phone => "phone",
            Self::AltPhone => "altPhone",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::PostCode => "postCode",
        }
    }

    /// The kind reported for a failing cell of the given field type, if any.
    pub fn for_field_type(field_type: FieldType) -> Option<Self> {
        match field_type {
            FieldType::Phone => Some(Self::Phone),
            FieldType::AltPhone => Some(Self::AltPhone),
            FieldType::Gender => Some(Self::Gender),
            FieldType::Email => Some(Self::Email),
            FieldType::Postcode => Some(Self::PostCode),
            FieldType::Text
            | FieldType::Identifier
            | FieldType::Organization
            | FieldType::Tag => None,
        }
    }

    /// Returns true for the kinds that concern person identification.
    pub fn is_identifier_kind(&self) -> bool {
        matches!(
            self,
            Self::NoIdentifier
                | Self::IdValueMissing
                | Self::NotSelectedIdType
                | Self::IdMissing
                | Self::Id
        )
    }

    /// Short English description, for command-line output and logs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoIdentifier => "no column can identify people (select an id or name column)",
            Self::IdValueMissing => "some rows have no value in the internal id column",
            Self::NotSelectedIdType => "the id column is not declared as internal or external",
            Self::IdMissing => "names are selected but there is no id column",
            Self::Id => "the id column has missing or malformed values",
            Self::Phone => "some phone numbers are invalid",
            Self::AltPhone => "some alternative phone numbers are invalid",
            Self::Gender => "some genders are not one of f, m, o or empty",
            Self::Email => "some email addresses are invalid",
            Self::PostCode => "some post codes are longer than 10 characters",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_names() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn validated_types_have_kinds() {
        assert_eq!(
            ErrorKind::for_field_type(FieldType::AltPhone),
            Some(ErrorKind::AltPhone)
        );
        assert_eq!(ErrorKind::for_field_type(FieldType::Text), None);
        assert_eq!(ErrorKind::for_field_type(FieldType::Tag), None);
    }
}
