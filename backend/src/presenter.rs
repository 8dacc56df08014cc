//! Caller boundary for UI and CLI front ends.
//!
//! Builds the pipelines from [`AppConfig`], runs them and turns their
//! [`Outcome`]s back into `Result`s. Holds no business rules.

use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::{PresenterError, PresenterResult};
use crate::models::{ExtendedPlayer, Player, PlayerRow, Record};
use crate::storage::DatasetStore;
use crate::transform::{
    LoadCsvDatasource, LoadCsvParameters, LoadCsvUseCase, Outcome, SaveCsvDatasource,
    SaveCsvParameters, SaveCsvUseCase, UseCase,
};

#[derive(Debug, Clone, Default)]
pub struct FeaturesPresenter {
    config: AppConfig,
}

impl FeaturesPresenter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn store(&self) -> DatasetStore {
        DatasetStore::with_dir(&self.config.datasets_dir)
    }

    /// Load, filter and rank the base players of the CSV at `path`.
    pub fn load_csv(&self, path: impl AsRef<Path>) -> PresenterResult<Vec<Record>> {
        self.load::<Player>(path.as_ref())
    }

    /// Same as [`FeaturesPresenter::load_csv`], keeping the extended attributes.
    pub fn load_csv_extended(&self, path: impl AsRef<Path>) -> PresenterResult<Vec<Record>> {
        self.load::<ExtendedPlayer>(path.as_ref())
    }

    fn load<P: PlayerRow>(&self, path: &Path) -> PresenterResult<Vec<Record>> {
        if !path.exists() {
            return Err(PresenterError::FileNotFound(path.to_path_buf()));
        }

        let mut parameters = LoadCsvParameters::new(path);
        if let Some(year) = self.config.reference_year {
            parameters = parameters.with_reference_year(year);
        }

        let use_case = LoadCsvUseCase::new(LoadCsvDatasource::<P>::new());
        match use_case.call(&parameters) {
            Outcome::Success(records) => Ok(records),
            Outcome::Error(e) => Err(e.into()),
        }
    }

    /// Validate `bytes` and store them as `<datasets_dir>/<name>.csv`.
    pub fn save_csv(&self, name: &str, bytes: impl Into<Vec<u8>>) -> PresenterResult<PathBuf> {
        let parameters = SaveCsvParameters::new(name, bytes);
        let use_case = SaveCsvUseCase::new(SaveCsvDatasource::new(self.store()));
        Ok(use_case.call(&parameters).into_result()?)
    }

    /// Names of the stored datasets, sorted.
    pub fn list_datasets(&self) -> PresenterResult<Vec<String>> {
        Ok(self.store().list()?)
    }

    // =========================================================================
    // Worker-thread dispatch
    // =========================================================================

    /// Run [`FeaturesPresenter::load_csv`] (or its extended form) on the blocking pool.
    pub async fn load_csv_in_background(
        &self,
        path: PathBuf,
        extended: bool,
    ) -> PresenterResult<Vec<Record>> {
        let presenter = self.clone();
        tokio::task::spawn_blocking(move || {
            if extended {
                presenter.load_csv_extended(&path)
            } else {
                presenter.load_csv(&path)
            }
        })
        .await
        .map_err(|e| PresenterError::Worker(e.to_string()))?
    }

    /// Run [`FeaturesPresenter::save_csv`] on the blocking pool.
    pub async fn save_csv_in_background(
        &self,
        name: String,
        bytes: Vec<u8>,
    ) -> PresenterResult<PathBuf> {
        let presenter = self.clone();
        tokio::task::spawn_blocking(move || presenter.save_csv(&name, bytes))
            .await
            .map_err(|e| PresenterError::Worker(e.to_string()))?
    }
}
