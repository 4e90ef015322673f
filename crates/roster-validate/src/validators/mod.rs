//! Per-field-type cell validators.
//!
//! Every validator is a pure `(cell, context) -> bool`. [`is_valid`] picks the
//! validator for a [`FieldType`]; types without a syntactic rule always pass.
//! Organization and tag values are checked by resolution, not here.

mod email;
mod gender;
mod identifier;
mod phone;
mod postcode;

use roster_model::{CellValue, FieldType};

use crate::context::ValidationContext;

pub use email::is_valid_email;
pub use gender::{GENDER_CODES, is_valid_gender};
pub use identifier::{is_present, is_well_formed_internal_id};
pub use phone::is_valid_phone;
pub use postcode::{MAX_POSTCODE_LENGTH, is_valid_postcode};

/// Check one cell against the rule for `field_type`.
pub fn is_valid(field_type: FieldType, cell: &CellValue, context: &ValidationContext) -> bool {
    match field_type {
        FieldType::Phone | FieldType::AltPhone => is_valid_phone(&cell.as_text(), context),
        FieldType::Email => is_valid_email(&cell.as_text()),
        FieldType::Gender => is_valid_gender(&cell.as_text()),
        FieldType::Postcode => is_valid_postcode(&cell.as_text()),
        FieldType::Text | FieldType::Identifier | FieldType::Organization | FieldType::Tag => {
            true
        }
    }
}
