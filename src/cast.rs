use crate::error::{GeneratorError, GeneratorResult};

/// Safely cast usize to u16 for Excel column indices.
/// Excel has a maximum of 16,384 columns (2^14).
pub(crate) fn column_index(value: usize) -> GeneratorResult<u16> {
    const MAX_EXCEL_COLUMNS: usize = 16_384;

    if value >= MAX_EXCEL_COLUMNS {
        return Err(GeneratorError::Layout(format!(
            "too many columns for Excel: {value} (max: {MAX_EXCEL_COLUMNS})"
        )));
    }

    u16::try_from(value)
        .map_err(|_| GeneratorError::Layout(format!("column index {value} cannot fit in u16")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_indices_pass_through() {
        assert_eq!(column_index(0).unwrap(), 0);
        assert_eq!(column_index(3).unwrap(), 3);
    }

    #[test]
    fn excel_column_limit_is_enforced() {
        assert!(matches!(
            column_index(16_384),
            Err(GeneratorError::Layout(_))
        ));
    }
}
