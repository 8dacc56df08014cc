//! Parameters objects for the load and save pipelines.

use std::fmt;
use std::path::PathBuf;

use super::outcome::Parameters;
use crate::error::{LoadCsvError, SaveCsvError};

/// Input of a load: the CSV path and the year contracts must reach.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCsvParameters {
    pub file_path: PathBuf,
    /// `None` means the current calendar year, read when the use case runs.
    pub reference_year: Option<i32>,
    pub error: LoadCsvError,
}

impl LoadCsvParameters {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            reference_year: None,
            error: LoadCsvError::default(),
        }
    }

    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn with_error(mut self, error: LoadCsvError) -> Self {
        self.error = error;
        self
    }
}

impl Parameters for LoadCsvParameters {
    type Error = LoadCsvError;

    fn error(&self) -> &LoadCsvError {
        &self.error
    }
}

impl fmt::Display for LoadCsvParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LoadCsvParameters(error={}, file_path='{}')",
            self.error,
            self.file_path.display()
        )
    }
}

/// Input of a save: the dataset name and the raw uploaded bytes.
#[derive(Clone, PartialEq)]
pub struct SaveCsvParameters {
    pub csv_name: String,
    pub bytes_csv: Vec<u8>,
    pub error: SaveCsvError,
}

impl SaveCsvParameters {
    pub fn new(csv_name: impl Into<String>, bytes_csv: impl Into<Vec<u8>>) -> Self {
        Self {
            csv_name: csv_name.into(),
            bytes_csv: bytes_csv.into(),
            error: SaveCsvError::default(),
        }
    }

    pub fn with_error(mut self, error: SaveCsvError) -> Self {
        self.error = error;
        self
    }
}

impl Parameters for SaveCsvParameters {
    type Error = SaveCsvError;

    fn error(&self) -> &SaveCsvError {
        &self.error
    }
}

// Payloads can be whole datasets: print their size only.
impl fmt::Debug for SaveCsvParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveCsvParameters")
            .field("csv_name", &self.csv_name)
            .field("bytes_csv", &format_args!("<{} bytes>", self.bytes_csv.len()))
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for SaveCsvParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SaveCsvParameters(error={}, csv_name='{}')", self.error, self.csv_name)
    }
}
