//! CSV reading for FIFA player datasets.
//!
//! Loads a whole CSV into memory as a [`CsvTable`] (headers + string cells),
//! resolves the columns a model needs into a [`ColumnIndex`], and exposes typed
//! accessors on [`RawRow`] that the record mappers use field by field.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;

use crate::error::DatasourceResult;
use crate::validation::Column;

/// Cell values treated as missing, in addition to the empty string.
pub const NA_TOKENS: [&str; 12] = [
    "NA", "N/A", "n/a", "#N/A", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>",
];

/// CSV parsing error with context
#[derive(Debug, Clone, PartialEq)]
pub struct CsvError {
    pub line: usize,
    pub column: Option<String>,
    pub value: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => {
                write!(f, "Line {}, column '{}' (value '{}'): {}", self.line, col, val, self.message)
            }
            (Some(col), None) => {
                write!(f, "Line {}, column '{}': {}", self.line, col, self.message)
            }
            _ => {
                write!(f, "Line {}: {}", self.line, self.message)
            }
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    fn from_reader_error(fallback_line: usize, err: &csv::Error) -> Self {
        let line = err
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_line);
        Self::new(line, err.to_string())
    }
}

/// One data row of a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based physical line of the row in the source.
    pub line: usize,
    pub cells: Vec<String>,
}

/// A whole CSV file held in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl CsvTable {
    /// Drop the first column, the unlabelled row index written by dataframe exports.
    pub fn drop_index_column(&mut self) {
        if self.headers.is_empty() {
            return;
        }
        self.headers.remove(0);
        for row in &mut self.rows {
            if !row.cells.is_empty() {
                row.cells.remove(0);
            }
        }
    }

    /// Position of the first column named `header`.
    pub fn position(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cells of the column at `position`. Short rows yield an empty cell.
    pub fn column_cells(&self, position: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.cells.get(position).map(String::as_str).unwrap_or(""))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse CSV from a reader into a table.
///
/// Rows may have more or fewer fields than the header. Invalid UTF-8 is an error.
pub fn read_table<R: Read>(reader: R) -> Result<CsvTable, CsvError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| CsvError::from_reader_error(1, &e))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(CsvError::new(1, "CSV file is empty"));
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let fallback_line = idx + 2;
        let record = result.map_err(|e| CsvError::from_reader_error(fallback_line, &e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_line);
        rows.push(TableRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(CsvTable { headers, rows })
}

/// Parse CSV bytes held in memory.
pub fn read_table_bytes(bytes: &[u8]) -> Result<CsvTable, CsvError> {
    read_table(bytes)
}

/// Parse a CSV file from disk.
///
/// Open failures surface as `DatasourceError::Io`, parse failures as
/// `DatasourceError::Csv`.
pub fn read_table_file<P: AsRef<Path>>(path: P) -> DatasourceResult<CsvTable> {
    let file = File::open(path)?;
    Ok(read_table(file)?)
}

// =============================================================================
// Cell helpers
// =============================================================================

/// True for empty cells and NA tokens.
pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || NA_TOKENS.contains(&cell)
}

pub fn parse_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok()
}

/// Integer parse that also accepts integral floats such as `"27.0"`.
pub fn parse_integer(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    cell.parse::<i64>().ok().or_else(|| {
        parse_float(cell)
            .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Column resolution
// =============================================================================

/// Positions of a model's columns within a table, resolved once per file.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    positions: HashMap<Column, usize>,
}

impl ColumnIndex {
    /// Resolve every column in `columns` against `headers`.
    ///
    /// Fails with a single error listing every missing column.
    pub fn resolve(headers: &[String], columns: &[Column]) -> Result<Self, CsvError> {
        let mut positions = HashMap::with_capacity(columns.len());
        let mut missing = Vec::new();

        for column in columns {
            match headers.iter().position(|h| h == column.header()) {
                Some(pos) => {
                    positions.insert(*column, pos);
                }
                None => missing.push(column.header()),
            }
        }

        if !missing.is_empty() {
            return Err(CsvError::new(1, format!("missing columns: {}", missing.join(", "))));
        }

        Ok(Self { positions })
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// View `row` through this index.
    pub fn row<'a>(&'a self, row: &'a TableRow) -> RawRow<'a> {
        RawRow { row, index: self }
    }
}

/// A table row with typed, column-keyed accessors.
#[derive(Debug, Clone, Copy)]
pub struct RawRow<'a> {
    row: &'a TableRow,
    index: &'a ColumnIndex,
}

impl<'a> RawRow<'a> {
    pub fn line(&self) -> usize {
        self.row.line
    }

    fn error(&self, column: Column, value: &str, message: impl Into<String>) -> CsvError {
        CsvError::new(self.row.line, message)
            .with_column(column.header())
            .with_value(value)
    }

    /// Raw cell text. A short row yields an empty cell.
    pub fn raw(&self, column: Column) -> Result<&'a str, CsvError> {
        let pos = self.index.position(column).ok_or_else(|| {
            CsvError::new(self.row.line, "column was not resolved for this file")
                .with_column(column.header())
        })?;
        Ok(self.row.cells.get(pos).map(String::as_str).unwrap_or(""))
    }

    /// Cell text, or `None` when the cell is missing.
    pub fn cell(&self, column: Column) -> Result<Option<&'a str>, CsvError> {
        let raw = self.raw(column)?;
        Ok(if is_missing(raw) { None } else { Some(raw) })
    }

    /// Text field, passed through unchanged.
    pub fn text(&self, column: Column) -> Result<String, CsvError> {
        self.raw(column).map(str::to_string)
    }

    /// Optional text field: missing cells and the literal `None` become `None`.
    pub fn optional_text(&self, column: Column) -> Result<Option<String>, CsvError> {
        Ok(self.cell(column)?.map(str::to_string))
    }

    pub fn integer(&self, column: Column) -> Result<i64, CsvError> {
        let raw = self.raw(column)?;
        if is_missing(raw) {
            return Err(self.error(column, raw, "missing integer value"));
        }
        parse_integer(raw).ok_or_else(|| self.error(column, raw, "expected an integer"))
    }

    /// Numeric field defaulting to `0.0` when missing.
    pub fn float_or_zero(&self, column: Column) -> Result<f64, CsvError> {
        match self.cell(column)? {
            None => Ok(0.0),
            Some(raw) => parse_float(raw).ok_or_else(|| self.error(column, raw, "expected a number")),
        }
    }

    /// Numeric field that is `NaN` when missing, leaving the decision to callers.
    pub fn float_or_nan(&self, column: Column) -> Result<f64, CsvError> {
        match self.cell(column)? {
            None => Ok(f64::NAN),
            Some(raw) => parse_float(raw).ok_or_else(|| self.error(column, raw, "expected a number")),
        }
    }

    /// Currency amount: missing is `0.0`, thousands separators are stripped,
    /// negative amounts are rejected.
    pub fn currency(&self, column: Column) -> Result<f64, CsvError> {
        let Some(raw) = self.cell(column)? else {
            return Ok(0.0);
        };
        let amount = parse_float(&raw.replace(',', ""))
            .ok_or_else(|| self.error(column, raw, "expected a currency amount"))?;
        if amount < 0.0 {
            return Err(self.error(column, raw, "currency amount must not be negative"));
        }
        Ok(amount)
    }

    /// ISO `YYYY-MM-DD` date, `None` when missing.
    pub fn date(&self, column: Column) -> Result<Option<NaiveDate>, CsvError> {
        match self.cell(column)? {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|e| self.error(column, raw, format!("expected a YYYY-MM-DD date ({})", e))),
        }
    }

    /// `Yes`/`No` flag.
    pub fn yes_no(&self, column: Column) -> Result<bool, CsvError> {
        let raw = self.raw(column)?;
        match raw.trim() {
            "Yes" | "yes" | "YES" => Ok(true),
            "No" | "no" | "NO" => Ok(false),
            _ => Err(self.error(column, raw, "expected Yes or No")),
        }
    }
}
