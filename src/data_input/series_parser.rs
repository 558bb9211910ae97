// src/data_input/series_parser.rs

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::{INPUT_COMMENT_PREFIX, SERIES_COLUMN_INDEX};
use crate::error::{HistogramError, Result};

/// Loads the second column (index 1) of a headerless delimited file.
pub fn load_second_column(input_file_path: &Path, delimiter: u8) -> Result<Vec<f64>> {
    load_column(input_file_path, delimiter, SERIES_COLUMN_INDEX)
}

/// Loads one column of a headerless delimited file as a numeric series.
///
/// Values keep file order. Lines starting with `#` and blank lines are
/// skipped. Every remaining row must have a field at `column` that parses as
/// a finite number; the first row that does not aborts the load.
pub fn load_column(input_file_path: &Path, delimiter: u8, column: usize) -> Result<Vec<f64>> {
    let file = File::open(input_file_path).map_err(|source| HistogramError::Open {
        path: input_file_path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .comment(Some(INPUT_COMMENT_PREFIX))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut values: Vec<f64> = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        let row = record.position().map(|p| p.line()).unwrap_or(values.len() as u64 + 1);
        values.push(parse_field(&record, row, column)?);
    }

    if values.is_empty() {
        return Err(HistogramError::EmptySeries {
            path: input_file_path.to_path_buf(),
        });
    }

    info!(
        "Read {} values from column {} of '{}'",
        values.len(),
        column,
        input_file_path.display()
    );
    Ok(values)
}

fn parse_field(record: &StringRecord, row: u64, column: usize) -> Result<f64> {
    let field = record.get(column).ok_or(HistogramError::MissingColumn {
        row,
        expected: column + 1,
        found: record.len(),
    })?;

    let value = field.parse::<f64>().map_err(|_| HistogramError::NonNumeric {
        row,
        column,
        value: field.to_string(),
    })?;

    if !value.is_finite() {
        debug!("Rejecting non-finite value '{}' on line {}", field, row);
        return Err(HistogramError::NonFinite {
            row,
            column,
            value: field.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_second_column_in_file_order() {
        let file = write_input("10\t5\n11\t3\n12\t3\n13\t1\n");
        let values = load_second_column(file.path(), b'\t').unwrap();
        assert_eq!(values, vec![5.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn accepts_integers_and_floats() {
        let file = write_input("0\t44257\n1\t-2.5\n2\t1e3\n");
        let values = load_second_column(file.path(), b'\t').unwrap();
        assert_eq!(values, vec![44257.0, -2.5, 1000.0]);
    }

    #[test]
    fn skips_comment_and_blank_lines() {
        let file = write_input("#x\ty\n44257\t22128\n\n22128\t11064\n");
        let values = load_second_column(file.path(), b'\t').unwrap();
        assert_eq!(values, vec![22128.0, 11064.0]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_input("1\t2\t3\n4\t5\t6\n");
        let values = load_second_column(file.path(), b'\t').unwrap();
        assert_eq!(values, vec![2.0, 5.0]);
    }

    #[test]
    fn other_columns_can_be_selected() {
        let file = write_input("1\t2\t3\n4\t5\t6\n");
        let values = load_column(file.path(), b'\t', 2).unwrap();
        assert_eq!(values, vec![3.0, 6.0]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_second_column(&dir.path().join("absent.csv"), b'\t').unwrap_err();
        assert!(matches!(err, HistogramError::Open { .. }), "got {err:?}");
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let file = write_input("1\t2\n2\tabc\n");
        let err = load_second_column(file.path(), b'\t').unwrap_err();
        match err {
            HistogramError::NonNumeric { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, 1);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn wrong_delimiter_leaves_a_single_field() {
        let file = write_input("1,2\n3,4\n");
        let err = load_second_column(file.path(), b'\t').unwrap_err();
        assert!(
            matches!(err, HistogramError::MissingColumn { expected: 2, found: 1, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn nan_is_rejected() {
        let file = write_input("1\t2\n2\tNaN\n");
        let err = load_second_column(file.path(), b'\t').unwrap_err();
        assert!(matches!(err, HistogramError::NonFinite { row: 2, .. }), "got {err:?}");
    }

    #[test]
    fn file_with_only_comments_is_empty() {
        let file = write_input("#x\ty\n");
        let err = load_second_column(file.path(), b'\t').unwrap_err();
        assert!(matches!(err, HistogramError::EmptySeries { .. }), "got {err:?}");
    }
}
