//! Stat resolution: maps a [`StatKey`] to a number for any stat row, honoring
//! the per-game / per-40 display mode.

use crate::cli::types::PlayerId;
use crate::error::{Result, StatsError};
use crate::models::PlayerSeasonStat;
use crate::StatMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;


/// Minutes basis for per-40 normalization.
pub const PER_40_MINUTES: f64 = 40.0;

/// Every statistic the engine can resolve.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    Points,
    Rebounds,
    OffensiveRebounds,
    DefensiveRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    FoulsCommitted,
    TwoPointersMade,
    TwoPointersAttempted,
    ThreePointersMade,
    ThreePointersAttempted,
    FreeThrowsMade,
    FreeThrowsAttempted,
    Pir,
    TwoPointPercentage,
    ThreePointPercentage,
    FreeThrowPercentage,
    EffectiveFieldGoalPercentage,
    AssistsToTurnovers,
    MinutesPlayed,
    GamesPlayed,
    GamesStarted,
}

/// How a stat behaves under normalization and validity filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Box-score count with a per-40 representation.
    Counting,
    /// Shooting percentage; never normalized, zero means "did not attempt".
    Percentage,
    /// Assists-to-turnovers; computed from mode-resolved counts, zero is not ranked.
    Ratio,
    /// Minutes and games; never normalized.
    Volume,
}

impl StatKey {
    pub const ALL: [StatKey; 24] = [
        StatKey::Points,
        StatKey::Rebounds,
        StatKey::OffensiveRebounds,
        StatKey::DefensiveRebounds,
        StatKey::Assists,
        StatKey::Steals,
        StatKey::Blocks,
        StatKey::Turnovers,
        StatKey::FoulsCommitted,
        StatKey::TwoPointersMade,
        StatKey::TwoPointersAttempted,
        StatKey::ThreePointersMade,
        StatKey::ThreePointersAttempted,
        StatKey::FreeThrowsMade,
        StatKey::FreeThrowsAttempted,
        StatKey::Pir,
        StatKey::TwoPointPercentage,
        StatKey::ThreePointPercentage,
        StatKey::FreeThrowPercentage,
        StatKey::EffectiveFieldGoalPercentage,
        StatKey::AssistsToTurnovers,
        StatKey::MinutesPlayed,
        StatKey::GamesPlayed,
        StatKey::GamesStarted,
    ];

    pub fn kind(self) -> StatKind {
        match self {
            StatKey::TwoPointPercentage
            | StatKey::ThreePointPercentage
            | StatKey::FreeThrowPercentage
            | StatKey::EffectiveFieldGoalPercentage => StatKind::Percentage,
            StatKey::AssistsToTurnovers => StatKind::Ratio,
            StatKey::MinutesPlayed | StatKey::GamesPlayed | StatKey::GamesStarted => {
                StatKind::Volume
            }
            _ => StatKind::Counting,
        }
    }

    /// Percentage and ratio stats treat `0` as "no attempts" when ranking.
    pub fn requires_positive(self) -> bool {
        matches!(self.kind(), StatKind::Percentage | StatKind::Ratio)
    }

    /// Canonical key, matching the provider's per-game column name.
    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::Points => "points_scored",
            StatKey::Rebounds => "total_rebounds",
            StatKey::OffensiveRebounds => "offensive_rebounds",
            StatKey::DefensiveRebounds => "defensive_rebounds",
            StatKey::Assists => "assists",
            StatKey::Steals => "steals",
            StatKey::Blocks => "blocks",
            StatKey::Turnovers => "turnovers",
            StatKey::FoulsCommitted => "fouls_committed",
            StatKey::TwoPointersMade => "two_pointers_made",
            StatKey::TwoPointersAttempted => "two_pointers_attempted",
            StatKey::ThreePointersMade => "three_pointers_made",
            StatKey::ThreePointersAttempted => "three_pointers_attempted",
            StatKey::FreeThrowsMade => "free_throws_made",
            StatKey::FreeThrowsAttempted => "free_throws_attempted",
            StatKey::Pir => "pir",
            StatKey::TwoPointPercentage => "two_pointers_percentage",
            StatKey::ThreePointPercentage => "three_pointers_percentage",
            StatKey::FreeThrowPercentage => "free_throws_percentage",
            StatKey::EffectiveFieldGoalPercentage => "effective_field_goal_percentage",
            StatKey::AssistsToTurnovers => "assists_to_turnovers_ratio",
            StatKey::MinutesPlayed => "minutes_played",
            StatKey::GamesPlayed => "games_played",
            StatKey::GamesStarted => "games_started",
        }
    }

    /// Short column label for tables.
    pub fn label(self) -> &'static str {
        match self {
            StatKey::Points => "PTS",
            StatKey::Rebounds => "REB",
            StatKey::OffensiveRebounds => "OREB",
            StatKey::DefensiveRebounds => "DREB",
            StatKey::Assists => "AST",
            StatKey::Steals => "STL",
            StatKey::Blocks => "BLK",
            StatKey::Turnovers => "TOV",
            StatKey::FoulsCommitted => "PF",
            StatKey::TwoPointersMade => "2PM",
            StatKey::TwoPointersAttempted => "2PA",
            StatKey::ThreePointersMade => "3PM",
            StatKey::ThreePointersAttempted => "3PA",
            StatKey::FreeThrowsMade => "FTM",
            StatKey::FreeThrowsAttempted => "FTA",
            StatKey::Pir => "PIR",
            StatKey::TwoPointPercentage => "2P%",
            StatKey::ThreePointPercentage => "3P%",
            StatKey::FreeThrowPercentage => "FT%",
            StatKey::EffectiveFieldGoalPercentage => "eFG%",
            StatKey::AssistsToTurnovers => "AST/TO",
            StatKey::MinutesPlayed => "MIN",
            StatKey::GamesPlayed => "GP",
            StatKey::GamesStarted => "GS",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s
            .trim()
            .to_lowercase()
            .replace(|c: char| c == '-' || c == ' ', "_");
        let stat = match key.as_str() {
            "points" | "points_scored" | "pts" => StatKey::Points,
            "rebounds" | "total_rebounds" | "reb" => StatKey::Rebounds,
            "offensive_rebounds" | "oreb" => StatKey::OffensiveRebounds,
            "defensive_rebounds" | "dreb" => StatKey::DefensiveRebounds,
            "assists" | "assistances" | "ast" => StatKey::Assists,
            "steals" | "stl" => StatKey::Steals,
            "blocks" | "blocks_favour" | "blk" => StatKey::Blocks,
            "turnovers" | "tov" | "to" => StatKey::Turnovers,
            "fouls_committed" | "fouls_commited" | "fouls" | "pf" => StatKey::FoulsCommitted,
            "two_pointers_made" | "2pm" => StatKey::TwoPointersMade,
            "two_pointers_attempted" | "2pa" => StatKey::TwoPointersAttempted,
            "three_pointers_made" | "three_pointers" | "3pm" => StatKey::ThreePointersMade,
            "three_pointers_attempted" | "3pa" => StatKey::ThreePointersAttempted,
            "free_throws_made" | "ftm" => StatKey::FreeThrowsMade,
            "free_throws_attempted" | "fta" => StatKey::FreeThrowsAttempted,
            "pir" | "valuation" => StatKey::Pir,
            "two_pointers_percentage" | "2p%" | "2p_pct" => StatKey::TwoPointPercentage,
            "three_pointers_percentage" | "3p%" | "3p_pct" => StatKey::ThreePointPercentage,
            "free_throws_percentage" | "ft%" | "ft_pct" => StatKey::FreeThrowPercentage,
            "effective_field_goal_percentage" | "efg%" | "efg" => {
                StatKey::EffectiveFieldGoalPercentage
            }
            "assists_to_turnovers_ratio" | "assists_to_turnovers" | "ast/to" | "ast_to" => {
                StatKey::AssistsToTurnovers
            }
            "minutes_played" | "minutes" | "min" => StatKey::MinutesPlayed,
            "games_played" | "gp" => StatKey::GamesPlayed,
            "games_started" | "gs" => StatKey::GamesStarted,
            _ => {
                return Err(StatsError::UnknownStat {
                    key: s.to_string(),
                })
            }
        };
        Ok(stat)
    }
}

/// A row the engine can read stats from.
///
/// `raw_value` returns the stored (per-game, or single-game) value. Rows that
/// carry precomputed per-40 figures expose them through `per_40_value`.
pub trait StatRow {
    fn raw_value(&self, stat: StatKey) -> f64;

    fn per_40_value(&self, _stat: StatKey) -> Option<f64> {
        None
    }

    fn minutes_played(&self) -> f64;

    fn player_id(&self) -> &PlayerId;
}

impl<R: StatRow + ?Sized> StatRow for &R {
    fn raw_value(&self, stat: StatKey) -> f64 {
        (**self).raw_value(stat)
    }

    fn per_40_value(&self, stat: StatKey) -> Option<f64> {
        (**self).per_40_value(stat)
    }

    fn minutes_played(&self) -> f64 {
        (**self).minutes_played()
    }

    fn player_id(&self) -> &PlayerId {
        (**self).player_id()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn per_40<R: StatRow + ?Sized>(row: &R, stat: StatKey) -> f64 {
    if let Some(precomputed) = row.per_40_value(stat) {
        return finite_or_zero(precomputed);
    }
    let minutes = row.minutes_played();
    if minutes > 0.0 {
        finite_or_zero(row.raw_value(stat)) * PER_40_MINUTES / minutes
    } else {
        0.0
    }
}

fn effective_field_goal<R: StatRow + ?Sized>(row: &R, mode: StatMode) -> f64 {
    let made = stat_value(row, StatKey::TwoPointersMade, mode)
        + stat_value(row, StatKey::ThreePointersMade, mode);
    let attempted = stat_value(row, StatKey::TwoPointersAttempted, mode)
        + stat_value(row, StatKey::ThreePointersAttempted, mode);
    if attempted > 0.0 {
        (made + 0.5 * stat_value(row, StatKey::ThreePointersMade, mode)) / attempted * 100.0
    } else {
        0.0
    }
}

fn assists_to_turnovers<R: StatRow + ?Sized>(row: &R, mode: StatMode) -> f64 {
    let assists = stat_value(row, StatKey::Assists, mode);
    let turnovers = stat_value(row, StatKey::Turnovers, mode);
    if turnovers > 0.0 {
        assists / turnovers
    } else {
        assists
    }
}

/// Resolve `stat` for `row` under `mode`.
///
/// Counting stats in [`StatMode::Per40`] use the row's precomputed per-40 value,
/// falling back to `raw * 40 / minutes` (or `0` without minutes). Percentages and
/// volume stats are returned as stored regardless of mode. Missing or non-finite
/// data resolves to `0`; this never fails.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::{engine::stats::{stat_value, StatKey}, PlayerSeasonStat, StatMode};
///
/// let row = PlayerSeasonStat {
///     points_scored: 15.0,
///     minutes_played: 30.0,
///     ..PlayerSeasonStat::new("P1", "Guard")
/// };
/// assert_eq!(stat_value(&row, StatKey::Points, StatMode::PerGame), 15.0);
/// assert_eq!(stat_value(&row, StatKey::Points, StatMode::Per40), 20.0);
/// ```
pub fn stat_value<R: StatRow + ?Sized>(row: &R, stat: StatKey, mode: StatMode) -> f64 {
    let value = match stat {
        StatKey::EffectiveFieldGoalPercentage => effective_field_goal(row, mode),
        StatKey::AssistsToTurnovers => assists_to_turnovers(row, mode),
        _ => match (stat.kind(), mode) {
            (StatKind::Counting, StatMode::Per40) => per_40(row, stat),
            _ => row.raw_value(stat),
        },
    };
    finite_or_zero(value)
}

/// Resolve a stat from an untyped JSON record.
///
/// Field-level problems are tolerated exactly as for typed rows; only a value
/// that is not a record at all is rejected.
pub fn stat_value_from_json(row: &Value, stat: StatKey, mode: StatMode) -> Result<f64> {
    if !row.is_object() {
        return Err(StatsError::structural(format!(
            "expected a stat row object, found {}",
            json_kind(row)
        )));
    }
    let mut record = row.clone();
    if let Some(fields) = record.as_object_mut() {
        fields
            .entry("player_id")
            .or_insert_with(|| Value::String(String::new()));
    }
    let typed: PlayerSeasonStat = serde_json::from_value(record)?;
    Ok(stat_value(&typed, stat, mode))
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
