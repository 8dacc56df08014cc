//! Column contract for FIFA player CSV files.
//!
//! Each known column has a fixed header. The base contract pairs the 17 columns
//! every dataset must provide with the primitive type their cells must infer to.

use std::fmt;

/// Primitive type inferred for a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 64-bit signed integer, no missing cells.
    Int64,
    /// 64-bit float; integers with missing cells land here too.
    Float64,
    /// Anything else.
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known FIFA dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Name,
    Age,
    Photo,
    Nationality,
    Flag,
    Overall,
    Club,
    ClubLogo,
    Value,
    Wage,
    Position,
    Joined,
    ContractValidUntil,
    Height,
    Weight,
    ReleaseClause,
    // Extended dataset columns
    Potential,
    Special,
    PreferredFoot,
    InternationalReputation,
    WeakFoot,
    SkillMoves,
    WorkRate,
    BodyType,
    RealFace,
    LoanedFrom,
    KitNumber,
    BestOverallRating,
    YearJoined,
}

impl Column {
    /// Header text as it appears in the CSV file.
    pub fn header(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Photo => "Photo",
            Self::Nationality => "Nationality",
            Self::Flag => "Flag",
            Self::Overall => "Overall",
            Self::Club => "Club",
            Self::ClubLogo => "Club Logo",
            Self::Value => "Value(£)",
            Self::Wage => "Wage(£)",
            Self::Position => "Position",
            Self::Joined => "Joined",
            Self::ContractValidUntil => "Contract Valid Until",
            Self::Height => "Height(cm.)",
            Self::Weight => "Weight(lbs.)",
            Self::ReleaseClause => "Release Clause(£)",
            Self::Potential => "Potential",
            Self::Special => "Special",
            Self::PreferredFoot => "Preferred Foot",
            Self::InternationalReputation => "International Reputation",
            Self::WeakFoot => "Weak Foot",
            Self::SkillMoves => "Skill Moves",
            Self::WorkRate => "Work Rate",
            Self::BodyType => "Body Type",
            Self::RealFace => "Real Face",
            Self::LoanedFrom => "Loaned From",
            Self::KitNumber => "Kit Number",
            Self::BestOverallRating => "Best Overall Rating",
            Self::YearJoined => "Year_Joined",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Expected columns and types of a base dataset, in declaration order.
///
/// Order matters: the validator reports the first type mismatch in this order.
pub const BASE_CONTRACT: [(Column, ColumnType); 17] = [
    (Column::Id, ColumnType::Int64),
    (Column::Name, ColumnType::Text),
    (Column::Age, ColumnType::Int64),
    (Column::Photo, ColumnType::Text),
    (Column::Nationality, ColumnType::Text),
    (Column::Flag, ColumnType::Text),
    (Column::Overall, ColumnType::Int64),
    (Column::Club, ColumnType::Text),
    (Column::ClubLogo, ColumnType::Text),
    (Column::Value, ColumnType::Float64),
    (Column::Wage, ColumnType::Float64),
    (Column::Position, ColumnType::Text),
    (Column::Joined, ColumnType::Text),
    (Column::ContractValidUntil, ColumnType::Float64),
    (Column::Height, ColumnType::Float64),
    (Column::Weight, ColumnType::Float64),
    (Column::ReleaseClause, ColumnType::Float64),
];

/// Columns coerced to `float64` before type checking.
pub const FLOAT_COERCED: [Column; 2] = [Column::Height, Column::Weight];

/// Columns read by [`Player`](crate::models::Player).
pub const BASE_COLUMNS: [Column; 17] = [
    Column::Id,
    Column::Name,
    Column::Age,
    Column::Photo,
    Column::Nationality,
    Column::Flag,
    Column::Overall,
    Column::Club,
    Column::ClubLogo,
    Column::Value,
    Column::Wage,
    Column::Position,
    Column::Joined,
    Column::ContractValidUntil,
    Column::Height,
    Column::Weight,
    Column::ReleaseClause,
];

/// Columns read by [`ExtendedPlayer`](crate::models::ExtendedPlayer).
pub const EXTENDED_COLUMNS: [Column; 30] = [
    Column::Id,
    Column::Name,
    Column::Age,
    Column::Photo,
    Column::Nationality,
    Column::Flag,
    Column::Overall,
    Column::Club,
    Column::ClubLogo,
    Column::Value,
    Column::Wage,
    Column::Position,
    Column::Joined,
    Column::ContractValidUntil,
    Column::Height,
    Column::Weight,
    Column::ReleaseClause,
    Column::Potential,
    Column::Special,
    Column::PreferredFoot,
    Column::InternationalReputation,
    Column::WeakFoot,
    Column::SkillMoves,
    Column::WorkRate,
    Column::BodyType,
    Column::RealFace,
    Column::LoanedFrom,
    Column::KitNumber,
    Column::BestOverallRating,
    Column::YearJoined,
];
