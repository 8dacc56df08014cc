//! Save pipeline: uploaded bytes -> validation -> `<datasets_dir>/<name>.csv`.

use std::path::PathBuf;

use super::outcome::{result_datasource, Datasource, Outcome, UseCase};
use super::parameters::SaveCsvParameters;
use crate::error::{DatasourceError, DatasourceResult, SaveCsvError};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::storage::DatasetStore;
use crate::validation::validate_fifa_csv;

/// Validates the payload, then writes it verbatim to the store.
///
/// Nothing is written unless the payload passes validation.
#[derive(Debug, Clone, Default)]
pub struct SaveCsvDatasource {
    store: DatasetStore,
}

impl SaveCsvDatasource {
    pub fn new(store: DatasetStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }
}

impl Datasource<SaveCsvParameters> for SaveCsvDatasource {
    type Data = PathBuf;

    fn fetch(&self, parameters: &SaveCsvParameters) -> DatasourceResult<PathBuf> {
        self.store.path_for(&parameters.csv_name)?;

        let (is_valid, message) = validate_fifa_csv(&parameters.bytes_csv).into_parts();
        if !is_valid {
            log_warning(format!("Rejected '{}': {}", parameters.csv_name, message));
            return Err(DatasourceError::InvalidCsv(message));
        }

        log_info(format!(
            "Writing {} bytes to dataset '{}'",
            parameters.bytes_csv.len(),
            parameters.csv_name
        ));
        log_info_indent(message, 1);
        self.store.write(&parameters.csv_name, &parameters.bytes_csv)
    }
}

/// Saves a payload through `D` and returns the written path.
#[derive(Debug, Clone, Default)]
pub struct SaveCsvUseCase<D = SaveCsvDatasource> {
    datasource: D,
}

impl<D> SaveCsvUseCase<D> {
    pub fn new(datasource: D) -> Self {
        Self { datasource }
    }
}

impl<D> UseCase<SaveCsvParameters> for SaveCsvUseCase<D>
where
    D: Datasource<SaveCsvParameters, Data = PathBuf>,
{
    type Output = PathBuf;

    fn call(&self, parameters: &SaveCsvParameters) -> Outcome<PathBuf, SaveCsvError> {
        result_datasource(&self.datasource, parameters).map(|path| {
            log_success(format!("Saved {}", path.display()));
            path
        })
    }
}
