//! Serializable rows printed by the CLI in `--json` mode.

use crate::cli::types::PlayerId;
use crate::engine::{rank::RankBand, stats::StatKey};
use serde::Serialize;

/// A player's standing in one stat.
#[derive(Debug, Clone, Serialize)]
pub struct RankLine {
    pub stat: StatKey,
    pub value: f64,
    pub rank: u32,
    pub total: u32,
    pub percentile: u8,
    pub is_top_tier: bool,
    pub band: RankBand,
}

/// One game of a rolling-average trend.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub round: u32,
    pub opponent: Option<String>,
    pub value: f64,
    pub rolling_average: f64,
}

/// Trend output: the per-game series plus the chart reference line.
#[derive(Debug, Clone, Serialize)]
pub struct TrendReport {
    pub player_id: PlayerId,
    pub stat: StatKey,
    pub window: usize,
    pub reference_label: String,
    pub reference_value: f64,
    pub points: Vec<TrendPoint>,
}
