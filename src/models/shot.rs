//! Shot events from the play-by-play shot feed.

use super::de::{lenient_f64, lenient_u32, opt_trimmed_string};
use crate::cli::types::{Phase, PlayerId, Season};
use serde::{Deserialize, Serialize};

/// One attempted shot. `points > 0` if and only if the shot was made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    #[serde(default)]
    pub player_id: PlayerId,
    #[serde(default, alias = "team", deserialize_with = "opt_trimmed_string")]
    pub team_code: Option<String>,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub round: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub coord_x: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub coord_y: f64,
    /// Court zone label; blank labels decode to `None`.
    #[serde(default, alias = "bin", deserialize_with = "opt_trimmed_string")]
    pub zone: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub points: u32,
}

impl ShotEvent {
    pub fn new(zone: Option<&str>, points: u32) -> Self {
        Self {
            zone: zone
                .map(|z| z.trim().to_string())
                .filter(|z| !z.is_empty()),
            points,
            ..Default::default()
        }
    }

    pub fn is_made(&self) -> bool {
        self.points > 0
    }
}
