//! Pipelines module.
//!
//! Every operation is a datasource (I/O, may fail) wrapped by a use case
//! (business rules, never fails, returns an [`Outcome`]):
//! - Outcome: the success/error protocol and the stage traits
//! - Parameters: inputs bundled with their failure kind
//! - Load: CSV file to ranked player records
//! - Save: validated upload to the datasets directory
//! - Ranking: active-player filter and overall sort

pub mod load;
pub mod outcome;
pub mod parameters;
pub mod ranking;
pub mod save;

pub use load::{LoadCsvDatasource, LoadCsvUseCase};
pub use outcome::{result_datasource, Datasource, Outcome, Parameters, UseCase};
pub use parameters::{LoadCsvParameters, SaveCsvParameters};
pub use ranking::{current_year, rank_players, retain_active, RankingError};
pub use save::{SaveCsvDatasource, SaveCsvUseCase};
