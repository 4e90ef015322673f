/// Accepted gender codes: female, male, other.
pub const GENDER_CODES: [&str; 3] = ["f", "m", "o"];

/// Check a gender value. Case-insensitive; empty is allowed since gender is optional.
pub fn is_valid_gender(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    normalized.is_empty() || GENDER_CODES.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_in_any_case() {
        for value in ["f", "m", "o", "F", "M", " O ", ""] {
            assert!(is_valid_gender(value), "{value:?}");
        }
    }

    #[test]
    fn words_are_rejected() {
        for value in ["female", "Man", "x", "0"] {
            assert!(!is_valid_gender(value), "{value:?}");
        }
    }
}
