//! Pendulum-period sample tables.
//!
//! Input is a comma-delimited text file with a header row. Only the `time`
//! and `nattempts` columns are used; any other columns are carried through
//! the field-count check and otherwise ignored. Attempt counts must be
//! whole numbers; `10` and `10.0` both read as ten. Blank lines and lines
//! starting with `#` are skipped, and whitespace around fields is trimmed.

use std::path::Path;

use crate::error::{ReduceError, ReduceResult};

pub const TIME_COLUMN: &str = "time";
pub const ATTEMPTS_COLUMN: &str = "nattempts";

/// One timed run: total elapsed time over a number of swings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time_s: f64,
    pub attempts: u32,
}

impl Sample {
    /// Period of a single swing.
    pub fn period_s(&self) -> f64 {
        self.time_s / f64::from(self.attempts)
    }
}

/// Ordered samples, read once and never mutated.
#[derive(Clone, Debug, Default)]
pub struct SampleTable {
    rows: Vec<Sample>,
}

impl SampleTable {
    pub fn from_rows(rows: Vec<Sample>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Sample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-row periods (time / attempts).
    pub fn periods(&self) -> Vec<f64> {
        self.rows.iter().map(Sample::period_s).collect()
    }
}

pub fn load(path: &Path) -> ReduceResult<SampleTable> {
    let text = std::fs::read_to_string(path).map_err(|source| ReduceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_str(&text)?;
    tracing::debug!(path = %path.display(), rows = table.len(), "loaded sample table");
    Ok(table)
}

pub fn parse_str(text: &str) -> ReduceResult<SampleTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (_, header) = lines.next().ok_or(ReduceError::MissingHeader)?;
    let columns: Vec<&str> = split_fields(header).collect();
    let time_idx = column_index(&columns, TIME_COLUMN)?;
    let attempts_idx = column_index(&columns, ATTEMPTS_COLUMN)?;

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = split_fields(line).collect();
        if fields.len() != columns.len() {
            return Err(ReduceError::FieldCount {
                line: line_no,
                expected: columns.len(),
                found: fields.len(),
            });
        }

        let time_s = fields[time_idx]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ReduceError::Parse {
                line: line_no,
                column: TIME_COLUMN,
                value: fields[time_idx].to_string(),
            })?;
        let attempts =
            parse_count(fields[attempts_idx]).ok_or_else(|| ReduceError::Parse {
                line: line_no,
                column: ATTEMPTS_COLUMN,
                value: fields[attempts_idx].to_string(),
            })?;
        if attempts == 0 {
            return Err(ReduceError::ZeroAttempts { line: line_no });
        }

        rows.push(Sample { time_s, attempts });
    }

    Ok(SampleTable { rows })
}

/// Attempt counts are whole numbers, but may be written as `10.0`.
fn parse_count(field: &str) -> Option<u32> {
    if let Ok(n) = field.parse::<u32>() {
        return Some(n);
    }
    let v = field.parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX)).then(|| v as u32)
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}

fn column_index(columns: &[&str], name: &'static str) -> ReduceResult<usize> {
    columns
        .iter()
        .position(|c| *c == name)
        .ok_or(ReduceError::MissingColumn { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_comments_and_spaces() {
        let text = "# pendulum run, 2021-10-04\n\
                    time, nattempts, who\n\
                    15.0, 10, anna\n\
                    \n\
                    # retake\n\
                    30.4,  20, boris\n";
        let table = parse_str(text).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[1],
            Sample {
                time_s: 30.4,
                attempts: 20
            }
        );
        let periods = table.periods();
        assert!((periods[0] - 1.5).abs() < 1e-12);
        assert!((periods[1] - 1.52).abs() < 1e-12);
    }

    #[test]
    fn columns_are_found_by_name() {
        let table = parse_str("nattempts,time\n4,6.0\n").unwrap();
        assert!((table.periods()[0] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_str("time,n\n1.0,1\n").unwrap_err();
        assert!(matches!(
            err,
            ReduceError::MissingColumn { name: "nattempts" }
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        assert!(matches!(
            parse_str("# only a comment\n\n").unwrap_err(),
            ReduceError::MissingHeader
        ));
    }

    #[test]
    fn bad_number_reports_line() {
        let err = parse_str("time,nattempts\n1.0,1\nabc,1\n").unwrap_err();
        match err {
            ReduceError::Parse { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, TIME_COLUMN);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_row_is_rejected() {
        let err = parse_str("time,nattempts\n1.0\n").unwrap_err();
        assert!(matches!(
            err,
            ReduceError::FieldCount {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn integral_float_counts_are_accepted() {
        let table = parse_str("time,nattempts\n15.0,10.0\n").unwrap();
        assert_eq!(table.rows()[0].attempts, 10);
        let err = parse_str("time,nattempts\n15.0,10.5\n").unwrap_err();
        assert!(matches!(
            err,
            ReduceError::Parse {
                line: 2,
                column: ATTEMPTS_COLUMN,
                ..
            }
        ));
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let err = parse_str("time,nattempts\n1.0,0\n").unwrap_err();
        assert!(matches!(err, ReduceError::ZeroAttempts { line: 2 }));
    }
}
