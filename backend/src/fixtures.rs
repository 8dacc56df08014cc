//! Shared CSV payloads for unit tests.

/// Three valid players (overall 87, 86, 85; contracts until 2026, 2026, 2024).
pub const VALID_CSV: &str = ",ID,Name,Age,Photo,Nationality,Flag,Overall,Potential,Club,Club Logo,Value(£),Wage(£),Special,Preferred Foot,International Reputation,Weak Foot,Skill Moves,Work Rate,Body Type,Real Face,Position,Joined,Loaned From,Contract Valid Until,Height(cm.),Weight(lbs.),Release Clause(£),Kit Number,Best Overall Rating,Year_Joined
0,209658,L. Goretzka,27,https://cdn.sofifa.net/players/209/658/23_60.png,Germany,https://cdn.sofifa.net/flags/de.png,87,88,FC Bayern München,https://cdn.sofifa.net/teams/21/30.png,91000000.0,115000.0,2312,Right,4.0,4.0,3.0,High/ Medium,Unique,Yes,SUB,2018-07-01,None,2026.0,189.0,180.81,157000000.0,8.0,0.0,2018
1,212198,Bruno Fernandes,27,https://cdn.sofifa.net/players/212/198/23_60.png,Portugal,https://cdn.sofifa.net/flags/pt.png,86,87,Manchester United,https://cdn.sofifa.net/teams/11/30.png,78500000.0,190000.0,2305,Right,3.0,3.0,4.0,High/ High,Unique,Yes,LCM,2020-01-30,None,2026.0,179.0,152.145,155000000.0,8.0,0.0,2020
2,224334,M. Acuña,30,https://cdn.sofifa.net/players/224/334/23_60.png,Argentina,https://cdn.sofifa.net/flags/ar.png,85,85,Sevilla FC,https://cdn.sofifa.net/teams/481/30.png,46500000.0,46000.0,2303,Left,2.0,3.0,3.0,High/ High,Stocky (170-185),No,LB,2020-09-14,None,2024.0,172.0,152.145,97700000.0,19.0,0.0,2020
";

/// Only two of the expected columns, ragged rows.
pub const TWO_COLUMNS_CSV: &str = ",ID,Name
0,abc,123,
1,def,xyz,";

/// All columns present, `ID` and several numeric cells hold text.
pub const BAD_TYPES_CSV: &str = ",ID,Name,Age,Photo,Nationality,Flag,Overall,Potential,Club,Club Logo,Value(£),Wage(£),Special,Preferred Foot,International Reputation,Weak Foot,Skill Moves,Work Rate,Body Type,Real Face,Position,Joined,Loaned From,Contract Valid Until,Height(cm.),Weight(lbs.),Release Clause(£),Kit Number,Best Overall Rating,Year_Joined
0,invalid_id,L. Goretzka,abc,https://photo.png,Germany,https://flag.png,not_number,88,Club,https://logo.png,invalid,115000.0,2312,Right,4.0,4.0,3.0,High/ Medium,Unique,Yes,SUB,2018-07-01,None,2026.0,189.0,180.81,157000000.0,8.0,0.0,text";

/// Not UTF-8.
pub const CORRUPTED_BYTES: &[u8] = b"\x80\x81\x82\x83";
