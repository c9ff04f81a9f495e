//! Composite percentile axes for a player profile chart.

use super::rank::{PercentileRanker, RankResult};
use super::stats::{StatKey, StatRow};
use crate::cli::types::{PercentileScale, PlayerId};
use serde::Serialize;


/// Percentile shown for an axis the player could not be ranked on.
pub const NEUTRAL_PERCENTILE: u8 = 50;

const DEFENSIVE_REBOUND_WEIGHT: f64 = 0.7;
const OFFENSIVE_REBOUND_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RadarAxisKind {
    Scoring,
    Assists,
    AssistsToTurnovers,
    Rebounding,
    Stocks,
    EffectiveFieldGoal,
}

impl RadarAxisKind {
    pub const ALL: [RadarAxisKind; 6] = [
        RadarAxisKind::Scoring,
        RadarAxisKind::Assists,
        RadarAxisKind::AssistsToTurnovers,
        RadarAxisKind::Rebounding,
        RadarAxisKind::Stocks,
        RadarAxisKind::EffectiveFieldGoal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RadarAxisKind::Scoring => "SCORING",
            RadarAxisKind::Assists => "AST",
            RadarAxisKind::AssistsToTurnovers => "AST/TO",
            RadarAxisKind::Rebounding => "REBOUND",
            RadarAxisKind::Stocks => "STOCKS",
            RadarAxisKind::EffectiveFieldGoal => "eFG%",
        }
    }

    /// Stats ranked to build this axis.
    pub fn components(self) -> &'static [StatKey] {
        match self {
            RadarAxisKind::Scoring => &[StatKey::Points],
            RadarAxisKind::Assists => &[StatKey::Assists],
            RadarAxisKind::AssistsToTurnovers => &[StatKey::AssistsToTurnovers],
            RadarAxisKind::Rebounding => &[StatKey::DefensiveRebounds, StatKey::OffensiveRebounds],
            RadarAxisKind::Stocks => &[StatKey::Steals, StatKey::Blocks],
            RadarAxisKind::EffectiveFieldGoal => &[StatKey::EffectiveFieldGoalPercentage],
        }
    }
}

/// One axis value with the ranks it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub kind: RadarAxisKind,
    pub label: &'static str,
    pub percentile: u8,
    pub ranks: Vec<(StatKey, RankResult)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarProfile {
    pub player_id: PlayerId,
    pub axes: Vec<RadarAxis>,
}

impl RadarProfile {
    pub fn axis(&self, kind: RadarAxisKind) -> Option<&RadarAxis> {
        self.axes.iter().find(|a| a.kind == kind)
    }
}

/// Plain percentile of a rank, or the neutral midpoint when unranked.
pub fn axis_percentile(result: &RankResult) -> u8 {
    if result.is_ranked() && result.total > 0 {
        result.percentile
    } else {
        NEUTRAL_PERCENTILE
    }
}

/// Rebounding weighs defensive boards over offensive ones.
pub fn rebounding_percentile(defensive: u8, offensive: u8) -> u8 {
    (f64::from(defensive) * DEFENSIVE_REBOUND_WEIGHT + f64::from(offensive) * OFFENSIVE_REBOUND_WEIGHT)
        .round() as u8
}

/// Steals and blocks averaged.
pub fn stocks_percentile(steals: u8, blocks: u8) -> u8 {
    ((f64::from(steals) + f64::from(blocks)) / 2.0).round() as u8
}

/// Build the six radar axes for `target` within `population`.
///
/// The ranker's mode and direction apply to every component stat; its scale is
/// ignored in favour of raw percentiles so the composites are not skewed.
pub fn radar_profile<R: StatRow>(
    ranker: &PercentileRanker,
    population: &[R],
    target: &R,
) -> RadarProfile {
    let ranker = ranker.scale(PercentileScale::Raw);
    let axes = RadarAxisKind::ALL
        .iter()
        .map(|&kind| {
            let ranks: Vec<(StatKey, RankResult)> = kind
                .components()
                .iter()
                .map(|&stat| (stat, ranker.rank(population, stat, target)))
                .collect();
            let parts: Vec<u8> = ranks.iter().map(|(_, r)| axis_percentile(r)).collect();
            let percentile = match (kind, parts.as_slice()) {
                (RadarAxisKind::Rebounding, [dreb, oreb]) => rebounding_percentile(*dreb, *oreb),
                (RadarAxisKind::Stocks, [stl, blk]) => stocks_percentile(*stl, *blk),
                (_, [single]) => *single,
                _ => NEUTRAL_PERCENTILE,
            };
            RadarAxis {
                kind,
                label: kind.label(),
                percentile,
                ranks,
            }
        })
        .collect();

    RadarProfile {
        player_id: target.player_id().clone(),
        axes,
    }
}
