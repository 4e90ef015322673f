use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A raw spreadsheet cell: either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// The cell as a string, the way a spreadsheet would print it.
    ///
    /// Whole numbers render without a fractional part (`12`, not `12.0`).
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_str()),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// True when the cell is text containing only whitespace.
    ///
    /// Numbers are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(CellValue::from(12).as_text(), "12");
        assert_eq!(CellValue::from(739_567_148_i64).as_text(), "739567148");
        assert_eq!(CellValue::from(1.5).as_text(), "1.5");
    }

    #[test]
    fn blank_detection() {
        assert!(CellValue::from("").is_blank());
        assert!(CellValue::from("   ").is_blank());
        assert!(!CellValue::from("x").is_blank());
        assert!(!CellValue::from(0).is_blank());
    }

    #[test]
    fn untagged_json() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[1, "Angela"]"#).unwrap();
        assert_eq!(cells, vec![CellValue::from(1), CellValue::from("Angela")]);
    }
}
