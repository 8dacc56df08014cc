//! Business filters applied to loaded players.
//!
//! Keeps players with a positive overall rating whose contract runs at least
//! until the reference year, sorts them by overall (best first, ties keep file
//! order) and flattens them to [`Record`]s.

use chrono::Datelike;
use thiserror::Error;

use crate::models::{PlayerRow, Record};

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("player {id} has a non-finite contract end ({value})")]
    NonFiniteContract { id: i64, value: f64 },

    #[error("cannot build record for player {id}: {source}")]
    Record {
        id: i64,
        source: serde_json::Error,
    },
}

/// Current calendar year, local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// True if `player` is rated and under contract in `reference_year` or later.
pub fn is_active<P: PlayerRow>(player: &P, reference_year: i32) -> Result<bool, RankingError> {
    if player.overall() == 0 {
        return Ok(false);
    }
    let contract = player.contract_valid_until();
    if !contract.is_finite() {
        return Err(RankingError::NonFiniteContract {
            id: player.id(),
            value: contract,
        });
    }
    Ok(contract.trunc() as i64 >= i64::from(reference_year))
}

/// Filter and sort `players`, best overall first.
pub fn retain_active<P: PlayerRow>(
    players: Vec<P>,
    reference_year: i32,
) -> Result<Vec<P>, RankingError> {
    let mut kept = Vec::with_capacity(players.len());
    for player in players {
        if is_active(&player, reference_year)? {
            kept.push(player);
        }
    }
    // Stable: equal ratings keep their relative order.
    kept.sort_by(|a, b| b.overall().cmp(&a.overall()));
    Ok(kept)
}

/// Filter, sort and flatten `players` to records.
pub fn rank_players<P: PlayerRow>(
    players: Vec<P>,
    reference_year: i32,
) -> Result<Vec<Record>, RankingError> {
    retain_active(players, reference_year)?
        .iter()
        .map(|p| {
            p.to_record()
                .map_err(|source| RankingError::Record { id: p.id(), source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use chrono::NaiveDate;

    fn player(id: i64, name: &str, overall: u8, contract: f64) -> Player {
        Player {
            id,
            name: name.to_string(),
            age: 27,
            photo: format!("https://cdn.sofifa.net/players/{}.png", id),
            nationality: "Germany".to_string(),
            flag: "https://cdn.sofifa.net/flags/de.png".to_string(),
            overall,
            club: "FC Bayern München".to_string(),
            club_logo: "https://cdn.sofifa.net/teams/21/30.png".to_string(),
            value: 91000000.0,
            wage: 115000.0,
            position: "SUB".to_string(),
            joined: NaiveDate::from_ymd_opt(2018, 7, 1),
            contract_valid_until: contract,
            height_m: 1.89,
            weight_kg: 81.91,
            release_clause: 157000000.0,
        }
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r["name"].as_str().unwrap()).collect()
    }

    #[test]
    fn test_sorted_by_overall_descending() {
        let players = vec![
            player(1, "L. Goretzka", 75, 2026.0),
            player(2, "Bruno Fernandes", 86, 2026.0),
            player(3, "K. De Bruyne", 91, 2025.0),
        ];
        let records = rank_players(players, 2025).unwrap();
        assert_eq!(names(&records), vec!["K. De Bruyne", "Bruno Fernandes", "L. Goretzka"]);
    }

    #[test]
    fn test_zero_overall_excluded_regardless_of_contract() {
        let players = vec![
            player(1, "A", 87, 2030.0),
            player(2, "B", 0, 2099.0),
            player(3, "C", 91, 2030.0),
        ];
        let records = rank_players(players, 2025).unwrap();
        assert_eq!(names(&records), vec!["C", "A"]);
    }

    #[test]
    fn test_expired_contracts_excluded() {
        let players = vec![
            player(1, "A", 87, 2024.0),
            player(2, "B", 80, 2025.9),
            player(3, "C", 70, 2026.0),
        ];
        let kept = retain_active(players, 2026).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "C");
    }

    #[test]
    fn test_ties_keep_file_order() {
        let players = vec![
            player(1, "first", 80, 2030.0),
            player(2, "top", 90, 2030.0),
            player(3, "second", 80, 2030.0),
        ];
        let records = rank_players(players, 2025).unwrap();
        assert_eq!(names(&records), vec!["top", "first", "second"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_players(Vec::<Player>::new(), 2025).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_contract_is_an_error() {
        let players = vec![player(1, "A", 87, 2030.0), player(9, "B", 80, f64::NAN)];
        let err = rank_players(players, 2025).unwrap_err();
        assert!(matches!(err, RankingError::NonFiniteContract { id: 9, .. }));
    }

    #[test]
    fn test_non_finite_contract_ignored_when_unrated() {
        let players = vec![player(1, "A", 0, f64::INFINITY)];
        assert!(rank_players(players, 2025).unwrap().is_empty());
    }
}
