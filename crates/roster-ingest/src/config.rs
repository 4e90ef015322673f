//! Sheet configuration files.
//!
//! A configuration says how the columns of a CSV map onto person fields. It is
//! JSON, one entry per CSV column, in column order:
//!
//! ```json
//! {
//!   "first_row_is_headers": true,
//!   "country": "SE",
//!   "columns": [
//!     {"kind": "identifier", "id_field": "internal", "selected": true},
//!     {"kind": "field", "field": "phone", "selected": true}
//!   ]
//! }
//! ```

use std::path::Path;

use roster_model::{Column, CountryCode, FieldName, IdFieldKind, Sheet};
use serde::{Deserialize, Serialize};

use crate::csv::unmapped_column;
use crate::error::{IngestError, Result};

/// Column mapping and sheet options for one CSV layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Overrides the file-derived sheet title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default = "default_true")]
    pub first_row_is_headers: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
    pub columns: Vec<Column>,
}

fn default_true() -> bool {
    true
}

impl SheetConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error variant if the file cannot be read, or
    /// [`IngestError::ConfigParse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| IngestError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            columns = config.columns.len(),
            "loaded sheet configuration"
        );
        Ok(config)
    }

    /// The configured country, or the [`CountryCode::default`] region.
    pub fn country(&self) -> CountryCode {
        self.country.clone().unwrap_or_default()
    }

    /// Apply this configuration to a freshly read sheet.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::WidthMismatch`] if the column counts differ.
    pub fn apply(&self, sheet: Sheet) -> Result<Sheet> {
        if self.columns.len() != sheet.columns.len() {
            return Err(IngestError::WidthMismatch {
                expected: self.columns.len(),
                found: sheet.columns.len(),
            });
        }
        let mut sheet = sheet.with_columns(self.columns.clone());
        sheet.first_row_is_headers = self.first_row_is_headers;
        if let Some(title) = &self.title {
            sheet.title.clone_from(title);
        }
        Ok(sheet)
    }

    /// A starting configuration for `sheet`, built from its header row.
    ///
    /// Columns with a recognized header are selected; the rest are left
    /// unmapped.
    pub fn suggest(sheet: &Sheet) -> Self {
        let headers: Vec<String> = (0..sheet.columns.len())
            .map(|index| sheet.header(index).unwrap_or_default())
            .collect();
        let columns = suggest_columns(&headers)
            .into_iter()
            .map(|column| column.unwrap_or_else(unmapped_column))
            .collect();
        Self {
            title: None,
            first_row_is_headers: sheet.first_row_is_headers,
            country: Some(CountryCode::default()),
            columns,
        }
    }
}

/// Header aliases, normalized, beyond the field slugs themselves.
const FIELD_ALIASES: &[(&str, FieldName)] = &[
    ("first name", FieldName::FirstName),
    ("given name", FieldName::FirstName),
    ("förnamn", FieldName::FirstName),
    ("last name", FieldName::LastName),
    ("surname", FieldName::LastName),
    ("family name", FieldName::LastName),
    ("efternamn", FieldName::LastName),
    ("e mail", FieldName::Email),
    ("mail", FieldName::Email),
    ("email address", FieldName::Email),
    ("e post", FieldName::Email),
    ("phone number", FieldName::Phone),
    ("mobile", FieldName::Phone),
    ("telephone", FieldName::Phone),
    ("telefon", FieldName::Phone),
    ("mobil", FieldName::Phone),
    ("alternative phone", FieldName::AltPhone),
    ("secondary phone", FieldName::AltPhone),
    ("sex", FieldName::Gender),
    ("kön", FieldName::Gender),
    ("address", FieldName::StreetAddress),
    ("street", FieldName::StreetAddress),
    ("adress", FieldName::StreetAddress),
    ("care of", FieldName::CoAddress),
    ("c o", FieldName::CoAddress),
    ("zip", FieldName::ZipCode),
    ("postcode", FieldName::ZipCode),
    ("post code", FieldName::ZipCode),
    ("postal code", FieldName::ZipCode),
    ("postnummer", FieldName::ZipCode),
    ("town", FieldName::City),
    ("ort", FieldName::City),
    ("land", FieldName::Country),
    ("organisation", FieldName::Organization),
    ("org", FieldName::Organization),
    ("tags", FieldName::Tag),
    ("label", FieldName::Tag),
];

const ID_ALIASES: &[(&str, IdFieldKind)] = &[
    ("id", IdFieldKind::Internal),
    ("member id", IdFieldKind::Internal),
    ("internal id", IdFieldKind::Internal),
    ("external id", IdFieldKind::External),
    ("ext id", IdFieldKind::External),
];

/// Lower-case, with separators folded to single spaces.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Suggest a column for each header, or `None` if nothing matches.
///
/// A header matches a field when its normalized text equals the field slug
/// or a known alias. Suggested columns are selected. A field is suggested at
/// most once; later headers with the same match get `None`.
pub fn suggest_columns(headers: &[String]) -> Vec<Option<Column>> {
    let mut taken_fields = Vec::new();
    let mut identifier_taken = false;

    headers
        .iter()
        .map(|header| {
            let normalized = normalize_header(header);
            if normalized.is_empty() {
                return None;
            }
            if let Some((_, kind)) = ID_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
                if identifier_taken {
                    return None;
                }
                identifier_taken = true;
                return Some(Column::identifier(*kind));
            }
            let field = FieldName::ALL
                .iter()
                .copied()
                .find(|field| normalize_header(field.as_str()) == normalized)
                .or_else(|| {
                    FIELD_ALIASES
                        .iter()
                        .find(|(alias, _)| *alias == normalized)
                        .map(|(_, field)| *field)
                })?;
            if taken_fields.contains(&field) {
                return None;
            }
            taken_fields.push(field);
            Some(Column::field(field))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use roster_model::Row;

    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  Zip_Code "), "zip code");
        assert_eq!(normalize_header("E-mail"), "e mail");
    }

    #[test]
    fn test_suggests_slugs_and_aliases() {
        let suggested = suggest_columns(&headers(&[
            "E-mail",
            "Postcode",
            "Member ID",
            "External ID",
            "first_name",
            "Notes",
        ]));
        assert_eq!(
            suggested,
            vec![
                Some(Column::field(FieldName::Email)),
                Some(Column::field(FieldName::ZipCode)),
                Some(Column::identifier(IdFieldKind::Internal)),
                None,
                Some(Column::field(FieldName::FirstName)),
                None,
            ]
        );
    }

    #[test]
    fn test_each_field_suggested_once() {
        let suggested = suggest_columns(&headers(&["Phone", "Mobile"]));
        assert_eq!(suggested, vec![Some(Column::field(FieldName::Phone)), None]);
    }

    #[test]
    fn test_apply_checks_width() {
        let config = SheetConfig {
            title: None,
            first_row_is_headers: true,
            country: None,
            columns: vec![Column::field(FieldName::Email)],
        };
        let sheet = Sheet::new("people", true)
            .with_columns(vec![unmapped_column(); 2])
            .with_rows(vec![Row::from_iter(["a", "b"])]);
        let err = config.apply(sheet).unwrap_err();
        assert!(matches!(
            err,
            IngestError::WidthMismatch {
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn test_apply_overrides_sheet_options() {
        let config = SheetConfig {
            title: Some("Volunteers".to_string()),
            first_row_is_headers: false,
            country: None,
            columns: vec![Column::field(FieldName::Email)],
        };
        let sheet = Sheet::new("people", true)
            .with_columns(vec![unmapped_column()])
            .with_rows(vec![Row::from_iter(["a@b.se"])]);
        let sheet = config.apply(sheet).unwrap();
        assert_eq!(sheet.title, "Volunteers");
        assert!(!sheet.first_row_is_headers);
        assert_eq!(sheet.columns, vec![Column::field(FieldName::Email)]);
        assert_eq!(config.country().as_str(), "SE");
    }

    #[test]
    fn test_suggest_from_sheet() {
        let sheet = Sheet::new("people", true)
            .with_columns(vec![unmapped_column(); 2])
            .with_rows(vec![Row::from_iter(["Phone", "Favourite colour"])]);
        let config = SheetConfig::suggest(&sheet);
        assert_eq!(
            config.columns,
            vec![Column::field(FieldName::Phone), unmapped_column()]
        );
        assert!(config.first_row_is_headers);
    }
}
