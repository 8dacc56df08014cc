//! Extended player record for datasets carrying the full attribute set.

use serde::{Deserialize, Serialize};

use super::{Player, PlayerRow};
use crate::parser::{CsvError, RawRow};
use crate::validation::{Column, EXTENDED_COLUMNS};

/// A [`Player`] plus the attributes found in full FIFA exports.
///
/// The record form flattens the base fields beside the extended ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedPlayer {
    #[serde(flatten)]
    pub base: Player,
    pub potential: i64,
    pub special: i64,
    pub preferred_foot: String,
    pub international_reputation: f64,
    pub weak_foot: f64,
    pub skill_moves: f64,
    pub work_rate: String,
    pub body_type: String,
    pub real_face: bool,
    pub loaned_from: Option<String>,
    pub kit_number: f64,
    pub best_overall_rating: f64,
    pub year_joined: i64,
}

impl PlayerRow for ExtendedPlayer {
    const COLUMNS: &'static [Column] = &EXTENDED_COLUMNS;

    fn from_row(row: &RawRow<'_>) -> Result<Self, CsvError> {
        Ok(Self {
            base: Player::from_row(row)?,
            potential: row.integer(Column::Potential)?,
            special: row.integer(Column::Special)?,
            preferred_foot: row.text(Column::PreferredFoot)?,
            international_reputation: row.float_or_zero(Column::InternationalReputation)?,
            weak_foot: row.float_or_zero(Column::WeakFoot)?,
            skill_moves: row.float_or_zero(Column::SkillMoves)?,
            work_rate: row.text(Column::WorkRate)?,
            body_type: row.text(Column::BodyType)?,
            real_face: row.yes_no(Column::RealFace)?,
            loaned_from: row.optional_text(Column::LoanedFrom)?,
            kit_number: row.float_or_zero(Column::KitNumber)?,
            best_overall_rating: row.float_or_zero(Column::BestOverallRating)?,
            year_joined: row.integer(Column::YearJoined)?,
        })
    }

    fn overall(&self) -> u8 {
        self.base.overall
    }

    fn contract_valid_until(&self) -> f64 {
        self.base.contract_valid_until
    }

    fn id(&self) -> i64 {
        self.base.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::parser::{read_table_bytes, ColumnIndex};
    use serde_json::Value;

    fn first_player(csv: &str) -> Result<ExtendedPlayer, CsvError> {
        let mut table = read_table_bytes(csv.as_bytes()).unwrap();
        table.drop_index_column();
        let index = ColumnIndex::resolve(&table.headers, ExtendedPlayer::COLUMNS).unwrap();
        ExtendedPlayer::from_row(&index.row(&table.rows[0]))
    }

    #[test]
    fn test_extended_fields() {
        let player = first_player(fixtures::VALID_CSV).unwrap();

        assert_eq!(player.base.name, "L. Goretzka");
        assert_eq!(player.potential, 88);
        assert_eq!(player.special, 2312);
        assert_eq!(player.preferred_foot, "Right");
        assert_eq!(player.international_reputation, 4.0);
        assert_eq!(player.work_rate, "High/ Medium");
        assert!(player.real_face);
        assert_eq!(player.loaned_from, None);
        assert_eq!(player.kit_number, 8.0);
        assert_eq!(player.year_joined, 2018);
    }

    #[test]
    fn test_loaned_from_kept_when_present() {
        let csv = fixtures::VALID_CSV.replace(",2018-07-01,None,", ",2018-07-01,Chelsea,");
        let player = first_player(&csv).unwrap();
        assert_eq!(player.loaned_from.as_deref(), Some("Chelsea"));
    }

    #[test]
    fn test_record_flattens_base_fields() {
        let player = first_player(fixtures::VALID_CSV).unwrap();
        let record = player.to_record().unwrap();

        assert_eq!(record.len(), 30);
        assert_eq!(record["name"], "L. Goretzka");
        assert_eq!(record["potential"], 88);
        assert_eq!(record["loaned_from"], Value::Null);
        assert_eq!(record["real_face"], true);
    }

    #[test]
    fn test_text_year_joined_fails() {
        let csv = fixtures::VALID_CSV.replace(",8.0,0.0,2018", ",8.0,0.0,soon");
        let err = first_player(&csv).unwrap_err();
        assert_eq!(err.column.as_deref(), Some("Year_Joined"));
        assert_eq!(err.value.as_deref(), Some("soon"));
    }
}
