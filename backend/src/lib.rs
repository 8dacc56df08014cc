//! # FIFA CSV - player dataset ingestion, validation and storage
//!
//! Reads FIFA player exports, checks them against the expected column/type
//! contract, maps rows to typed players, keeps the active ones ranked by
//! overall rating, and stores validated uploads on disk.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Models    │────▶│   Ranking   │──▶ records
//! │   (UTF-8)   │     │ (col index) │     │ (PlayerRow) │     │ (filter/sort)│
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Upload    │────▶│ Validation  │────▶│   Storage   │──▶ <dir>/<name>.csv
//! │   (bytes)   │     │ (contract)  │     │ (flat dir)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fifa_csv::{AppConfig, FeaturesPresenter};
//!
//! let presenter = FeaturesPresenter::new(AppConfig::from_env()?);
//! let records = presenter.load_csv("datasets/fifa23.csv")?;
//! println!("{} active players", records.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and failure kinds
//! - [`config`] - Runtime configuration
//! - [`logs`] - Log broadcasting
//! - [`parser`] - CSV reading and typed cell access
//! - [`validation`] - Column contract and schema validation
//! - [`models`] - Player models
//! - [`transform`] - Load/save pipelines and ranking
//! - [`storage`] - Dataset directory
//! - [`presenter`] - Caller boundary

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Pipelines
pub mod transform;

// Storage
pub mod storage;

// Caller boundary
pub mod presenter;

#[cfg(test)]
mod fixtures;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, DatasourceError, FailureKind, LoadCsvError, PresenterError, SaveCsvError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{ExtendedPlayer, Player, PlayerRow, Record};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    is_valid_fifa_csv, validate_fifa_csv, Column, ColumnType, ValidationReport, BASE_CONTRACT,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{read_table, read_table_bytes, read_table_file, CsvError, CsvTable};

// =============================================================================
// Re-exports - Pipelines
// =============================================================================

pub use transform::{
    rank_players, LoadCsvDatasource, LoadCsvParameters, LoadCsvUseCase, Outcome,
    SaveCsvDatasource, SaveCsvParameters, SaveCsvUseCase, UseCase,
};

// =============================================================================
// Re-exports - Config, storage, presenter
// =============================================================================

pub use config::AppConfig;
pub use presenter::FeaturesPresenter;
pub use storage::DatasetStore;
