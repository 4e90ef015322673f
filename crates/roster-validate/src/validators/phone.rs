use crate::context::ValidationContext;

/// Check that a value parses as a valid phone number.
///
/// National numbers are read in the context's country; numbers starting with
/// `+` carry their own country code. Empty values are invalid.
pub fn is_valid_phone(value: &str, context: &ValidationContext) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    match phonenumber::parse(context.phone_region(), trimmed) {
        Ok(number) => phonenumber::is_valid(&number),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use roster_model::CountryCode;

    use super::*;

    fn sweden() -> ValidationContext {
        ValidationContext::new(CountryCode::new("SE").unwrap())
    }

    #[test]
    fn national_mobile_number() {
        assert!(is_valid_phone("0739567148", &sweden()));
        assert!(is_valid_phone(" 073-956 71 48 ", &sweden()));
    }

    #[test]
    fn international_number() {
        assert!(is_valid_phone("+46739567148", &sweden()));
    }

    #[test]
    fn rejects_garbage_and_short_numbers() {
        let ctx = sweden();
        assert!(!is_valid_phone("missing", &ctx));
        assert!(!is_valid_phone("no alt phone", &ctx));
        assert!(!is_valid_phone("6", &ctx));
        assert!(!is_valid_phone("", &ctx));
        assert!(!is_valid_phone("   ", &ctx));
    }
}
