//! Per-game rows for a single player.

use super::de::{lenient_f64, lenient_minutes, lenient_u32, opt_trimmed_string};
use crate::cli::types::{Phase, PlayerId, Season};
use crate::engine::stats::{stat_value, StatKey, StatRow};
use crate::StatMode;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One row per (player, game).
///
/// Field aliases accept the box-score column names used by the league feed
/// (`assistances`, `blocks_favour`, `field_goals_made_2`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub player_id: PlayerId,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default, alias = "gamecode_round", deserialize_with = "lenient_u32")]
    pub round: u32,
    #[serde(default, alias = "date", deserialize_with = "opt_trimmed_string")]
    pub game_date: Option<String>,
    #[serde(default, alias = "opponent_code", deserialize_with = "opt_trimmed_string")]
    pub opponent: Option<String>,
    /// Decimal minutes; `"MM:SS"` text is converted on decode.
    #[serde(default, alias = "min", deserialize_with = "lenient_minutes")]
    pub minutes: f64,

    #[serde(default, alias = "points_scored", deserialize_with = "lenient_f64")]
    pub points: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_rebounds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub offensive_rebounds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub defensive_rebounds: f64,
    #[serde(default, alias = "assistances", deserialize_with = "lenient_f64")]
    pub assists: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub steals: f64,
    #[serde(default, alias = "blocks_favour", deserialize_with = "lenient_f64")]
    pub blocks: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub turnovers: f64,
    #[serde(
        default,
        alias = "fouls_commited",
        alias = "fouls_commited_game",
        deserialize_with = "lenient_f64"
    )]
    pub fouls_committed: f64,
    #[serde(default, alias = "field_goals_made_2", deserialize_with = "lenient_f64")]
    pub two_pointers_made: f64,
    #[serde(default, alias = "field_goals_attempted_2", deserialize_with = "lenient_f64")]
    pub two_pointers_attempted: f64,
    #[serde(default, alias = "field_goals_made_3", deserialize_with = "lenient_f64")]
    pub three_pointers_made: f64,
    #[serde(default, alias = "field_goals_attempted_3", deserialize_with = "lenient_f64")]
    pub three_pointers_attempted: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free_throws_made: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free_throws_attempted: f64,
    #[serde(default, alias = "valuation", deserialize_with = "lenient_f64")]
    pub pir: f64,
}

impl GameLogEntry {
    pub fn new(player_id: impl Into<String>, round: u32) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            round,
            ..Default::default()
        }
    }
}

/// Shooting split for one game, `0` when nothing was attempted.
fn split_percentage(made: f64, attempted: f64) -> f64 {
    if attempted > 0.0 {
        made / attempted * 100.0
    } else {
        0.0
    }
}

impl StatRow for GameLogEntry {
    fn raw_value(&self, stat: StatKey) -> f64 {
        match stat {
            StatKey::Points => self.points,
            StatKey::Rebounds => self.total_rebounds,
            StatKey::OffensiveRebounds => self.offensive_rebounds,
            StatKey::DefensiveRebounds => self.defensive_rebounds,
            StatKey::Assists => self.assists,
            StatKey::Steals => self.steals,
            StatKey::Blocks => self.blocks,
            StatKey::Turnovers => self.turnovers,
            StatKey::FoulsCommitted => self.fouls_committed,
            StatKey::TwoPointersMade => self.two_pointers_made,
            StatKey::TwoPointersAttempted => self.two_pointers_attempted,
            StatKey::ThreePointersMade => self.three_pointers_made,
            StatKey::ThreePointersAttempted => self.three_pointers_attempted,
            StatKey::FreeThrowsMade => self.free_throws_made,
            StatKey::FreeThrowsAttempted => self.free_throws_attempted,
            StatKey::Pir => self.pir,
            StatKey::TwoPointPercentage => {
                split_percentage(self.two_pointers_made, self.two_pointers_attempted)
            }
            StatKey::ThreePointPercentage => {
                split_percentage(self.three_pointers_made, self.three_pointers_attempted)
            }
            StatKey::FreeThrowPercentage => {
                split_percentage(self.free_throws_made, self.free_throws_attempted)
            }
            StatKey::MinutesPlayed => self.minutes,
            StatKey::GamesPlayed => 1.0,
            StatKey::GamesStarted => 0.0,
            StatKey::EffectiveFieldGoalPercentage | StatKey::AssistsToTurnovers => {
                stat_value(self, stat, StatMode::PerGame)
            }
        }
    }

    fn minutes_played(&self) -> f64 {
        self.minutes
    }

    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }
}

/// Convert a minutes string to decimal minutes.
///
/// `"MM:SS"` becomes `MM + SS / 60`; anything else has non-numeric characters
/// stripped before parsing. Unparseable input yields `0`.
pub fn parse_minutes(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Some((mins, secs)) = raw.split_once(':') {
        let mins = mins.trim().parse::<f64>().unwrap_or(0.0);
        let secs = secs.trim().parse::<f64>().unwrap_or(0.0);
        return mins + secs / 60.0;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Game logs ordered by round. The sort is stable, so games sharing a round keep
/// their input order.
pub fn sort_by_round(games: &[GameLogEntry]) -> Vec<&GameLogEntry> {
    let mut ordered: Vec<&GameLogEntry> = games.iter().collect();
    ordered.sort_by_key(|g| g.round);
    ordered
}
