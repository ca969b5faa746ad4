//! Coefficient-table loading for the bundled reference data.
//!
//! Each model ships its published regression coefficients as a CSV under
//! `data/`, embedded at compile time. Files start with one `#` citation
//! line, then a header row naming the fields, then one row per spectral
//! period. Row order is meaningful and preserved.

use serde::de::DeserializeOwned;

use crate::error::{ModelError, ModelResult};

/// Parse an embedded coefficient CSV into typed rows.
///
/// Lines starting with `#` are citation comments. The first real line is
/// the header; field names must match the row struct. Any parse failure
/// becomes a `DataLoad` error naming the underlying problem.
pub fn load_csv<T: DeserializeOwned>(raw: &str) -> ModelResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(raw.as_bytes());

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ModelError::data_load(e.to_string()))
}

/// Reject a row containing non-finite fields.
///
/// `label` identifies the row (typically its period) in the error message.
pub fn check_finite(model: &str, label: f64, fields: &[f64]) -> ModelResult<()> {
    if fields.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::data_load(format!(
            "{model}: non-finite coefficient in row for period {label}"
        )));
    }
    Ok(())
}

/// Check the table has exactly the expected number of rows.
pub fn check_row_count<T>(model: &str, rows: &[T], expected: usize) -> ModelResult<()> {
    if rows.len() != expected {
        return Err(ModelError::data_load(format!(
            "{model}: expected {expected} coefficient rows, found {}",
            rows.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        period: f64,
        c1: f64,
    }

    #[test]
    fn parses_rows_in_file_order() {
        let raw = "# citation line\nperiod,c1\n0,1.5\n0.1,2.5\n";
        let rows: Vec<Row> = load_csv(raw).unwrap();
        assert_eq!(
            rows,
            vec![
                Row {
                    period: 0.0,
                    c1: 1.5
                },
                Row {
                    period: 0.1,
                    c1: 2.5
                },
            ]
        );
    }

    #[test]
    fn missing_field_is_data_load_error() {
        let raw = "period,c1\n0\n";
        let err = load_csv::<Row>(raw).unwrap_err();
        assert!(matches!(err, ModelError::DataLoad { .. }));
    }

    #[test]
    fn non_numeric_field_is_data_load_error() {
        let raw = "period,c1\n0,abc\n";
        assert!(load_csv::<Row>(raw).is_err());
    }

    #[test]
    fn check_finite_rejects_nan() {
        assert!(check_finite("m", 0.0, &[1.0, f64::NAN]).is_err());
        assert!(check_finite("m", 0.0, &[1.0, f64::INFINITY]).is_err());
        assert!(check_finite("m", 0.0, &[1.0, -2.0]).is_ok());
    }

    #[test]
    fn check_row_count_enforces_expected() {
        let rows = [1, 2, 3];
        assert!(check_row_count("m", &rows, 3).is_ok());
        let err = check_row_count("m", &rows, 23).unwrap_err();
        assert!(err.to_string().contains("expected 23"));
    }
}
