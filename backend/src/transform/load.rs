//! Load pipeline: CSV file -> typed players -> ranked records.

use std::marker::PhantomData;

use super::outcome::{result_datasource, Datasource, Outcome, UseCase};
use super::parameters::LoadCsvParameters;
use super::ranking::{current_year, rank_players};
use crate::error::{DatasourceResult, LoadCsvError};
use crate::logs::{log_error, log_info, log_success};
use crate::models::{Player, PlayerRow, Record};
use crate::parser::{read_table_file, ColumnIndex};

// =============================================================================
// Datasource
// =============================================================================

/// Reads the CSV at `file_path` and maps every row to `P`.
///
/// The leading unnamed index column is dropped. Headers must contain every
/// column `P` reads; extra columns are ignored.
#[derive(Debug)]
pub struct LoadCsvDatasource<P = Player> {
    _row: PhantomData<fn() -> P>,
}

impl<P> LoadCsvDatasource<P> {
    pub fn new() -> Self {
        Self { _row: PhantomData }
    }
}

impl<P> Default for LoadCsvDatasource<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for LoadCsvDatasource<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<P: PlayerRow> Datasource<LoadCsvParameters> for LoadCsvDatasource<P> {
    type Data = Vec<P>;

    fn fetch(&self, parameters: &LoadCsvParameters) -> DatasourceResult<Vec<P>> {
        let mut table = read_table_file(&parameters.file_path)?;
        table.drop_index_column();

        let index = ColumnIndex::resolve(&table.headers, P::COLUMNS)?;
        let players = table
            .rows
            .iter()
            .map(|row| P::from_row(&index.row(row)))
            .collect::<Result<Vec<_>, _>>()?;

        log_info(format!(
            "Read {} rows from {}",
            players.len(),
            parameters.file_path.display()
        ));
        Ok(players)
    }
}

// =============================================================================
// Use case
// =============================================================================

/// Loads players through `D`, keeps the active ones and ranks them.
#[derive(Debug, Clone, Default)]
pub struct LoadCsvUseCase<D = LoadCsvDatasource> {
    datasource: D,
}

impl<D> LoadCsvUseCase<D> {
    pub fn new(datasource: D) -> Self {
        Self { datasource }
    }
}

impl<D, P> UseCase<LoadCsvParameters> for LoadCsvUseCase<D>
where
    D: Datasource<LoadCsvParameters, Data = Vec<P>>,
    P: PlayerRow,
{
    type Output = Vec<Record>;

    fn call(&self, parameters: &LoadCsvParameters) -> Outcome<Vec<Record>, LoadCsvError> {
        let players = match result_datasource(&self.datasource, parameters) {
            Outcome::Success(players) => players,
            Outcome::Error(e) => return Outcome::Error(e),
        };

        let year = parameters.reference_year.unwrap_or_else(current_year);
        let total = players.len();
        match rank_players(players, year) {
            Ok(records) => {
                log_success(format!(
                    "Kept {} of {} players under contract until {} or later",
                    records.len(),
                    total,
                    year
                ));
                Outcome::Success(records)
            }
            Err(e) => {
                log_error(format!("Ranking failed: {}", e));
                Outcome::Error(LoadCsvError::new(e.to_string()))
            }
        }
    }
}
