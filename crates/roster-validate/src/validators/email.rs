use std::sync::LazyLock;

use regex::Regex;

/// Single address: local part, one `@`, and a domain containing a dot.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Check that a value is a single email address, ignoring surrounding whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}
