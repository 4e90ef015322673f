use roster_model::CellValue;

/// True when an identifier cell has a value.
pub fn is_present(cell: &CellValue) -> bool {
    !cell.is_blank()
}

/// True when a non-empty internal id is a positive whole number.
///
/// Internal ids are record numbers assigned by the target system.
pub fn is_well_formed_internal_id(cell: &CellValue) -> bool {
    match cell {
        CellValue::Number(number) => number.is_finite() && number.fract() == 0.0 && *number >= 1.0,
        CellValue::Text(text) => text
            .trim()
            .parse::<u64>()
            .is_ok_and(|id| id > 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence() {
        assert!(is_present(&CellValue::from(12)));
        assert!(is_present(&CellValue::from("abc")));
        assert!(!is_present(&CellValue::from(" ")));
    }

    #[test]
    fn internal_ids_are_positive_integers() {
        assert!(is_well_formed_internal_id(&CellValue::from(1)));
        assert!(is_well_formed_internal_id(&CellValue::from(" 42 ")));
        assert!(!is_well_formed_internal_id(&CellValue::from("id")));
        assert!(!is_well_formed_internal_id(&CellValue::from(0)));
        assert!(!is_well_formed_internal_id(&CellValue::from(1.5)));
        assert!(!is_well_formed_internal_id(&CellValue::from("-3")));
    }
}
