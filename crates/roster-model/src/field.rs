//! Target field registry.
//!
//! The import target has a fixed set of person fields. Each field has exactly
//! one [`FieldType`], and the type alone decides which validator or resolver
//! applies to a column mapped to that field:
//!
//! - [`FieldType::Text`] - free text, never rejected
//! - [`FieldType::Phone`] / [`FieldType::AltPhone`] - phone numbers, locale aware
//! - [`FieldType::Email`], [`FieldType::Gender`], [`FieldType::Postcode`] - syntactic checks
//! - [`FieldType::Organization`] / [`FieldType::Tag`] - resolved against a directory
//! - [`FieldType::Identifier`] - the identifier column role
//!
//! # Example
//!
//! ```
//! use roster_model::{FieldName, FieldType};
//!
//! let field: FieldName = "zip_code".parse().unwrap();
//! assert_eq!(field.field_type(), FieldType::Postcode);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Syntactic category of a target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Text,
    Phone,
    AltPhone,
    Email,
    Gender,
    Postcode,
    Identifier,
    Organization,
    Tag,
}

impl FieldType {
    /// Returns true if values of this type are checked by a syntactic validator.
    pub fn has_validator(&self) -> bool {
        matches!(
            self,
            Self::Phone | Self::AltPhone | Self::Email | Self::Gender | Self::Postcode
        )
    }

    /// Returns true if values of this type are resolved against a directory.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Self::Identifier | Self::Organization | Self::Tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Phone => "PHONE",
            Self::AltPhone => "ALT_PHONE",
            Self::Email => "EMAIL",
            Self::Gender => "GENDER",
            Self::Postcode => "POSTCODE",
            Self::Identifier => "IDENTIFIER",
            Self::Organization => "ORGANIZATION",
            Self::Tag => "TAG",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    AltPhone,
    Gender,
    StreetAddress,
    CoAddress,
    ZipCode,
    City,
    Country,
    Organization,
    Tag,
}

impl FieldName {
    /// Every registered field, in display order.
    pub const ALL: [FieldName; 13] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::AltPhone,
        Self::Gender,
        Self::StreetAddress,
        Self::CoAddress,
        Self::ZipCode,
        Self::City,
        Self::Country,
        Self::Organization,
        Self::Tag,
    ];

    /// The field's type in the registry.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::FirstName
            | Self::LastName
            | Self::StreetAddress
            | Self::CoAddress
            | Self::City
            | Self::Country => FieldType::Text,
            Self::Email => FieldType::Email,
            Self::Phone => FieldType::Phone,
            Self::AltPhone => FieldType::AltPhone,
            Self::Gender => FieldType::Gender,
            Self::ZipCode => FieldType::Postcode,
            Self::Organization => FieldType::Organization,
            Self::Tag => FieldType::Tag,
        }
    }

    /// The field's slug, as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AltPhone => "alt_phone",
            Self::Gender => "gender",
            Self::StreetAddress => "street_address",
            Self::CoAddress => "co_address",
            Self::ZipCode => "zip_code",
            Self::City => "city",
            Self::Country => "country",
            Self::Organization => "organization",
            Self::Tag => "tag",
        }
    }

    /// Returns true for the name fields that can loosely identify a person.
    pub fn is_name(&self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_round_trips_through_its_slug() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        let err = "shoe_size".parse::<FieldName>().unwrap_err();
        assert_eq!(err, ModelError::UnknownField("shoe_size".to_string()));
    }

    #[test]
    fn validator_and_resolver_types_are_disjoint() {
        for field in FieldName::ALL {
            let ty = field.field_type();
            assert!(!(ty.has_validator() && ty.is_resolvable()), "{field}");
        }
    }
}
