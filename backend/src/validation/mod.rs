//! Structural validation of uploaded FIFA player CSV payloads.
//!
//! The validator parses raw bytes, infers a primitive type for every column
//! and checks the result against [`BASE_CONTRACT`]. It checks structure only:
//! value ranges and cross-field consistency are the record mapper's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use fifa_csv::validate_fifa_csv;
//!
//! let bytes = std::fs::read("players.csv")?;
//! let report = validate_fifa_csv(&bytes);
//! if !report.is_valid {
//!     eprintln!("rejected: {}", report.message);
//! }
//! ```

pub mod columns;

pub use columns::{
    Column, ColumnType, BASE_COLUMNS, BASE_CONTRACT, EXTENDED_COLUMNS, FLOAT_COERCED,
};

use std::collections::HashMap;

use crate::parser::{is_missing, read_table_bytes, CsvTable};

pub const VALID_MESSAGE: &str = "expected columns present with correct types";

/// Outcome of [`validate_fifa_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationReport {
    fn valid() -> Self {
        Self { is_valid: true, message: VALID_MESSAGE.to_string() }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self { is_valid: false, message: message.into() }
    }

    /// `(is_valid, message)` pair.
    pub fn into_parts(self) -> (bool, String) {
        (self.is_valid, self.message)
    }
}

/// Infer the type of a column from its cells.
///
/// Missing cells are skipped. Integers with gaps widen to `float64`, a column
/// whose cells are all missing is `float64`, and a column without rows is `text`.
pub fn infer_column_type<'a>(cells: impl IntoIterator<Item = &'a str>) -> ColumnType {
    let mut seen = false;
    let mut any_missing = false;
    let mut all_int = true;

    for cell in cells {
        seen = true;
        if is_missing(cell) {
            any_missing = true;
            continue;
        }
        let cell = cell.trim();
        if cell.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if cell.parse::<f64>().is_err() {
            return ColumnType::Text;
        }
    }

    if !seen {
        ColumnType::Text
    } else if all_int && !any_missing {
        ColumnType::Int64
    } else {
        ColumnType::Float64
    }
}

/// Infer the type of every contract column present in `table`.
fn infer_types(table: &CsvTable) -> HashMap<Column, ColumnType> {
    BASE_CONTRACT
        .iter()
        .filter_map(|(column, _)| {
            let pos = table.position(column.header())?;
            Some((*column, infer_column_type(table.column_cells(pos))))
        })
        .collect()
}

/// Validate raw CSV bytes against the base column contract.
pub fn validate_fifa_csv(bytes: &[u8]) -> ValidationReport {
    let table = match read_table_bytes(bytes) {
        Ok(t) => t,
        Err(e) => return ValidationReport::invalid(format!("read error: {}", e)),
    };

    let mut types = infer_types(&table);

    // Height and weight may be integer encoded; text cannot be coerced.
    for column in FLOAT_COERCED {
        if let Some(inferred) = types.get_mut(&column) {
            match *inferred {
                ColumnType::Int64 => *inferred = ColumnType::Float64,
                ColumnType::Float64 => {}
                // No rows: nothing to convert.
                ColumnType::Text if table.is_empty() => *inferred = ColumnType::Float64,
                ColumnType::Text => {
                    return ValidationReport::invalid(format!(
                        "read error: column {} cannot be converted to {}",
                        column,
                        ColumnType::Float64
                    ));
                }
            }
        }
    }

    let missing: Vec<&str> = BASE_CONTRACT
        .iter()
        .filter(|(column, _)| !types.contains_key(column))
        .map(|(column, _)| column.header())
        .collect();
    if !missing.is_empty() {
        return ValidationReport::invalid(format!("missing columns: {}", missing.join(", ")));
    }

    for (column, expected) in BASE_CONTRACT.iter() {
        let actual = types[column];
        if actual != *expected {
            return ValidationReport::invalid(format!(
                "column {} has type {}, expected {}",
                column, actual, expected
            ));
        }
    }

    ValidationReport::valid()
}

/// Quick check: true if the payload satisfies the base contract.
pub fn is_valid_fifa_csv(bytes: &[u8]) -> bool {
    validate_fifa_csv(bytes).is_valid
}
