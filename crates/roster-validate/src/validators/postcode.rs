/// Longest post code accepted by the import target.
pub const MAX_POSTCODE_LENGTH: usize = 10;

/// Check that a post code fits the target field. Any characters are allowed.
pub fn is_valid_postcode(value: &str) -> bool {
    value.chars().count() <= MAX_POSTCODE_LENGTH
}
