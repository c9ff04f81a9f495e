//! Aggregated player-season rows.

use super::de::{lenient_f64, lenient_opt_f64, lenient_u32, string_or_number};
use crate::cli::types::{Phase, PlayerId, Season};
use crate::engine::stats::{stat_value, StatKey, StatRow};
use crate::StatMode;
use serde::{Deserialize, Serialize};

/// One row per (player, season, phase) as supplied by the stat-row provider.
///
/// Per-game counting stats are always present (missing values decode to `0`).
/// The `*_per_40` fields are precomputed upstream and authoritative; `None`
/// means the provider did not supply one, which is not the same as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonStat {
    pub player_id: PlayerId,
    #[serde(default, deserialize_with = "string_or_number")]
    pub player_name: String,
    #[serde(default, alias = "player_team_code", deserialize_with = "string_or_number")]
    pub team_code: String,
    #[serde(default, alias = "player_team_name", deserialize_with = "string_or_number")]
    pub team_name: String,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub phase: Phase,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub minutes_played: f64,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub games_played: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub games_started: u32,

    #[serde(default, alias = "points", deserialize_with = "lenient_f64")]
    pub points_scored: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_rebounds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub offensive_rebounds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub defensive_rebounds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub assists: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub steals: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub blocks: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub turnovers: f64,
    #[serde(default, alias = "fouls_commited", deserialize_with = "lenient_f64")]
    pub fouls_committed: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub two_pointers_made: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub two_pointers_attempted: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub three_pointers_made: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub three_pointers_attempted: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free_throws_made: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free_throws_attempted: f64,
    #[serde(default, alias = "valuation", deserialize_with = "lenient_f64")]
    pub pir: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub two_pointers_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub three_pointers_percentage: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub free_throws_percentage: f64,

    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub points_scored_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub total_rebounds_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub offensive_rebounds_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub defensive_rebounds_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub assists_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub steals_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub blocks_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub turnovers_per_40: Option<f64>,
    #[serde(default, alias = "fouls_commited_per_40", deserialize_with = "lenient_opt_f64")]
    pub fouls_committed_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub two_pointers_made_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub two_pointers_attempted_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub three_pointers_made_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub three_pointers_attempted_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub free_throws_made_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub free_throws_attempted_per_40: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub pir_per_40: Option<f64>,
}

impl PlayerSeasonStat {
    pub fn new(player_id: impl Into<String>, player_name: impl Into<String>) -> Self {
        Self {
            player_id: PlayerId::new(player_id),
            player_name: player_name.into(),
            ..Default::default()
        }
    }
}

impl StatRow for PlayerSeasonStat {
    fn raw_value(&self, stat: StatKey) -> f64 {
        match stat {
            StatKey::Points => self.points_scored,
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
            StatKey::TwoPointPercentage => self.two_pointers_percentage,
            StatKey::ThreePointPercentage => self.three_pointers_percentage,
            StatKey::FreeThrowPercentage => self.free_throws_percentage,
            StatKey::MinutesPlayed => self.minutes_played,
            StatKey::GamesPlayed => f64::from(self.games_played),
            StatKey::GamesStarted => f64::from(self.games_started),
            StatKey::EffectiveFieldGoalPercentage | StatKey::AssistsToTurnovers => {
                stat_value(self, stat, StatMode::PerGame)
            }
        }
    }

    fn per_40_value(&self, stat: StatKey) -> Option<f64> {
        match stat {
            StatKey::Points => self.points_scored_per_40,
            StatKey::Rebounds => self.total_rebounds_per_40,
            StatKey::OffensiveRebounds => self.offensive_rebounds_per_40,
            StatKey::DefensiveRebounds => self.defensive_rebounds_per_40,
            StatKey::Assists => self.assists_per_40,
            StatKey::Steals => self.steals_per_40,
            StatKey::Blocks => self.blocks_per_40,
            StatKey::Turnovers => self.turnovers_per_40,
            StatKey::FoulsCommitted => self.fouls_committed_per_40,
            StatKey::TwoPointersMade => self.two_pointers_made_per_40,
            StatKey::TwoPointersAttempted => self.two_pointers_attempted_per_40,
            StatKey::ThreePointersMade => self.three_pointers_made_per_40,
            StatKey::ThreePointersAttempted => self.three_pointers_attempted_per_40,
            StatKey::FreeThrowsMade => self.free_throws_made_per_40,
            StatKey::FreeThrowsAttempted => self.free_throws_attempted_per_40,
            StatKey::Pir => self.pir_per_40,
            _ => None,
        }
    }

    fn minutes_played(&self) -> f64 {
        self.minutes_played
    }

    fn player_id(&self) -> &PlayerId {
        &self.player_id
    }
}
