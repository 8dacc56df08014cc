//! Domain models for FIFA player datasets.
//!
//! - [`Player`] - the base 17-column player record
//! - [`ExtendedPlayer`] - base record plus the extended dataset attributes
//! - [`PlayerRow`] - mapping contract from a CSV row to a typed player
//! - [`Record`] - generic key/value form handed back to callers
//!
//! Typed players exist only for the duration of a load: they are built from a
//! row, ranked, flattened into [`Record`]s and dropped.

pub mod extended;

pub use extended::ExtendedPlayer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parser::{round2, CsvError, RawRow};
use crate::validation::{Column, BASE_COLUMNS};

/// A player flattened to primitive values, keyed by field name.
pub type Record = Map<String, Value>;

/// Pounds to kilograms factor used by the source datasets.
pub const LBS_TO_KG: f64 = 0.453;

// =============================================================================
// Row mapping contract
// =============================================================================

/// A typed player that can be built from one CSV row.
pub trait PlayerRow: Sized + Serialize + Send + 'static {
    /// Columns the mapper reads. Resolved against the headers once per file.
    const COLUMNS: &'static [Column];

    /// Build a player from a resolved row.
    fn from_row(row: &RawRow<'_>) -> Result<Self, CsvError>;

    /// Overall rating, 0 to 100.
    fn overall(&self) -> u8;

    /// Year the contract runs until, as stored in the source. `NaN` when missing.
    fn contract_valid_until(&self) -> f64;

    fn id(&self) -> i64;

    /// Flatten to a generic record. `joined` renders as an ISO date or `null`.
    fn to_record(&self) -> Result<Record, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(serde::ser::Error::custom("player did not serialize to an object")),
        }
    }
}

// =============================================================================
// Player
// =============================================================================

/// One player of a FIFA dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub photo: String,
    pub nationality: String,
    pub flag: String,
    pub overall: u8,
    pub club: String,
    pub club_logo: String,
    /// Market value in pounds.
    pub value: f64,
    /// Weekly wage in pounds.
    pub wage: f64,
    pub position: String,
    pub joined: Option<NaiveDate>,
    pub contract_valid_until: f64,
    pub height_m: f64,
    pub weight_kg: f64,
    pub release_clause: f64,
}

/// Centimeters to meters, two decimals. Missing is `0.0`.
fn height_m(row: &RawRow<'_>) -> Result<f64, CsvError> {
    Ok(round2(row.float_or_zero(Column::Height)? / 100.0))
}

/// Pounds to kilograms, two decimals. Missing is `0.0`.
fn weight_kg(row: &RawRow<'_>) -> Result<f64, CsvError> {
    Ok(round2(row.float_or_zero(Column::Weight)? * LBS_TO_KG))
}

fn bounded<T: TryFrom<i64>>(row: &RawRow<'_>, column: Column, max: i64) -> Result<T, CsvError> {
    let value = row.integer(column)?;
    if !(0..=max).contains(&value) {
        return Err(CsvError::new(row.line(), format!("must be between 0 and {}", max))
            .with_column(column.header())
            .with_value(value.to_string()));
    }
    T::try_from(value).map_err(|_| {
        CsvError::new(row.line(), "value out of range")
            .with_column(column.header())
            .with_value(value.to_string())
    })
}

impl PlayerRow for Player {
    const COLUMNS: &'static [Column] = &BASE_COLUMNS;

    fn from_row(row: &RawRow<'_>) -> Result<Self, CsvError> {
        Ok(Self {
            id: row.integer(Column::Id)?,
            name: row.text(Column::Name)?,
            age: bounded(row, Column::Age, u32::MAX as i64)?,
            photo: row.text(Column::Photo)?,
            nationality: row.text(Column::Nationality)?,
            flag: row.text(Column::Flag)?,
            overall: bounded(row, Column::Overall, 100)?,
            club: row.text(Column::Club)?,
            club_logo: row.text(Column::ClubLogo)?,
            value: row.currency(Column::Value)?,
            wage: row.currency(Column::Wage)?,
            position: row.text(Column::Position)?,
            joined: row.date(Column::Joined)?,
            contract_valid_until: row.float_or_nan(Column::ContractValidUntil)?,
            height_m: height_m(row)?,
            weight_kg: weight_kg(row)?,
            release_clause: row.currency(Column::ReleaseClause)?,
        })
    }

    fn overall(&self) -> u8 {
        self.overall
    }

    fn contract_valid_until(&self) -> f64 {
        self.contract_valid_until
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::parser::{read_table_bytes, ColumnIndex, CsvTable};

    fn players(table: &CsvTable) -> Vec<Result<Player, CsvError>> {
        let index = ColumnIndex::resolve(&table.headers, Player::COLUMNS).unwrap();
        table.rows.iter().map(|r| Player::from_row(&index.row(r))).collect()
    }

    fn fixture_table() -> CsvTable {
        let mut table = read_table_bytes(fixtures::VALID_CSV.as_bytes()).unwrap();
        table.drop_index_column();
        table
    }

    #[test]
    fn test_from_row_maps_every_field() {
        let table = fixture_table();
        let player = players(&table).remove(0).unwrap();

        assert_eq!(player.id, 209658);
        assert_eq!(player.name, "L. Goretzka");
        assert_eq!(player.age, 27);
        assert_eq!(player.nationality, "Germany");
        assert_eq!(player.overall, 87);
        assert_eq!(player.club, "FC Bayern München");
        assert_eq!(player.value, 91000000.0);
        assert_eq!(player.wage, 115000.0);
        assert_eq!(player.position, "SUB");
        assert_eq!(player.joined, NaiveDate::from_ymd_opt(2018, 7, 1));
        assert_eq!(player.contract_valid_until, 2026.0);
        assert_eq!(player.release_clause, 157000000.0);
    }

    #[test]
    fn test_unit_conversions() {
        let table = fixture_table();
        let player = players(&table).remove(0).unwrap();

        assert_eq!(player.height_m, 1.89);
        assert_eq!(player.weight_kg, 81.91);
    }

    #[test]
    fn test_missing_values_default() {
        let csv = fixtures::VALID_CSV
            .replace(",91000000.0,115000.0,", ",,\"1,150\",")
            .replace(",2018-07-01,", ",,")
            .replace(",189.0,180.81,", ",,,");
        let mut table = read_table_bytes(csv.as_bytes()).unwrap();
        table.drop_index_column();
        let player = players(&table).remove(0).unwrap();

        assert_eq!(player.value, 0.0);
        assert_eq!(player.wage, 1150.0);
        assert_eq!(player.joined, None);
        assert_eq!(player.height_m, 0.0);
        assert_eq!(player.weight_kg, 0.0);
    }

    #[test]
    fn test_missing_contract_is_nan() {
        let csv = fixtures::VALID_CSV.replace(",None,2026.0,189.0,", ",None,,189.0,");
        let mut table = read_table_bytes(csv.as_bytes()).unwrap();
        table.drop_index_column();
        let player = players(&table).remove(0).unwrap();

        assert!(player.contract_valid_until.is_nan());
    }

    #[test]
    fn test_unparsable_integer_fails() {
        let mut table = read_table_bytes(fixtures::BAD_TYPES_CSV.as_bytes()).unwrap();
        table.drop_index_column();
        let err = players(&table).remove(0).unwrap_err();

        assert_eq!(err.column.as_deref(), Some("ID"));
        assert_eq!(err.value.as_deref(), Some("invalid_id"));
    }

    #[test]
    fn test_overall_out_of_range_fails() {
        let csv = fixtures::VALID_CSV.replace("23_60.png,Germany,https://cdn.sofifa.net/flags/de.png,87,", "23_60.png,Germany,https://cdn.sofifa.net/flags/de.png,187,");
        let mut table = read_table_bytes(csv.as_bytes()).unwrap();
        table.drop_index_column();
        let err = players(&table).remove(0).unwrap_err();

        assert_eq!(err.column.as_deref(), Some("Overall"));
    }

    #[test]
    fn test_to_record_round_trips_primitives() {
        let table = fixture_table();
        let player = players(&table).remove(0).unwrap();
        let record = player.to_record().unwrap();

        assert_eq!(record.len(), 17);
        assert_eq!(record["id"], 209658);
        assert_eq!(record["name"], "L. Goretzka");
        assert_eq!(record["overall"], 87);
        assert_eq!(record["value"], 91000000.0);
        assert_eq!(record["height_m"], 1.89);
        assert_eq!(record["club_logo"], "https://cdn.sofifa.net/teams/21/30.png");
        assert_eq!(record["joined"], "2018-07-01");

        let back: Player = serde_json::from_value(Value::Object(record)).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn test_to_record_absent_joined_is_null() {
        let mut table = fixture_table();
        table.rows[0].cells[21] = String::new();
        let player = players(&table).remove(0).unwrap();
        let record = player.to_record().unwrap();

        assert_eq!(record["joined"], Value::Null);
    }
}
