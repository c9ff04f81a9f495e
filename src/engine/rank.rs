//! Percentile ranking of a player against a population.

use super::stats::{stat_value, StatKey, StatRow};
use crate::cli::types::{PercentileScale, PlayerId};
use crate::error::{Result, StatsError};
use crate::StatMode;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;


/// Share of the valid population flagged as top tier.
pub const DEFAULT_TOP_TIER_FRACTION: f64 = 0.10;

/// A player's standing in one stat. Recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankResult {
    pub rank: u32,
    pub total: u32,
    pub percentile: u8,
    pub is_top_tier: bool,
}

impl RankResult {
    /// Returned when the population is empty or the target is invalid or absent.
    pub const NEUTRAL: RankResult = RankResult {
        rank: 0,
        total: 0,
        percentile: 0,
        is_top_tier: false,
    };

    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }

    pub fn band(&self) -> RankBand {
        RankBand::classify(self.rank, self.total)
    }
}

/// Ranks rows by one stat.
///
/// Valid rows are those with a finite, non-negative value; percentage and ratio
/// stats additionally require a strictly positive value. Tied rows share the
/// best rank of their group.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::{engine::{rank::PercentileRanker, stats::StatKey}, PlayerSeasonStat, StatMode};
///
/// let rows: Vec<PlayerSeasonStat> = [30.0, 20.0, 20.0]
///     .iter()
///     .enumerate()
///     .map(|(i, pts)| PlayerSeasonStat {
///         points_scored_per_40: Some(*pts),
///         ..PlayerSeasonStat::new(format!("P{i}"), "Player")
///     })
///     .collect();
///
/// let ranker = PercentileRanker::new(StatMode::Per40);
/// let second = ranker.rank(&rows, StatKey::Points, &rows[2]);
/// assert_eq!((second.rank, second.total, second.percentile), (2, 3, 67));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileRanker {
    pub mode: StatMode,
    pub higher_is_better: bool,
    pub scale: PercentileScale,
    pub top_tier_fraction: f64,
}

impl Default for PercentileRanker {
    fn default() -> Self {
        Self {
            mode: StatMode::PerGame,
            higher_is_better: true,
            scale: PercentileScale::Raw,
            top_tier_fraction: DEFAULT_TOP_TIER_FRACTION,
        }
    }
}

impl PercentileRanker {
    pub fn new(mode: StatMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn higher_is_better(mut self, higher_is_better: bool) -> Self {
        self.higher_is_better = higher_is_better;
        self
    }

    pub fn scale(mut self, scale: PercentileScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn top_tier_fraction(mut self, fraction: f64) -> Result<Self> {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return Err(StatsError::invalid(format!(
                "top tier fraction must be in (0, 1], got {fraction}"
            )));
        }
        self.top_tier_fraction = fraction;
        Ok(self)
    }

    fn valid_value(&self, row: &impl StatRow, stat: StatKey) -> Option<f64> {
        let value = stat_value(row, stat, self.mode);
        is_valid(stat, value).then_some(value)
    }

    fn compare(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        if self.higher_is_better {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Sorted values of the valid rows, best first.
    fn sorted_values<R: StatRow>(&self, population: &[R], stat: StatKey) -> Vec<f64> {
        let mut values: Vec<f64> = population
            .iter()
            .filter_map(|row| self.valid_value(row, stat))
            .collect();
        values.sort_by(|a, b| self.compare(*a, *b));
        values
    }

    fn result_for(&self, rank: u32, total: u32) -> RankResult {
        // Epsilon keeps products like 30 * 0.1 from ceiling past the whole number.
        let cutoff = (f64::from(total) * self.top_tier_fraction - 1e-9).ceil().max(0.0) as u32;
        RankResult {
            rank,
            total,
            percentile: percentile(rank, total, self.scale),
            is_top_tier: rank > 0 && rank <= cutoff,
        }
    }

    /// Rank `target` within `population`.
    ///
    /// The target must itself be valid and appear (by player id) among the
    /// valid rows; otherwise the neutral result is returned.
    pub fn rank<R: StatRow>(&self, population: &[R], stat: StatKey, target: &R) -> RankResult {
        let Some(target_value) = self.valid_value(target, stat) else {
            return RankResult::NEUTRAL;
        };

        let present = population.iter().any(|row| {
            row.player_id() == target.player_id() && self.valid_value(row, stat).is_some()
        });
        if !present {
            debug!(player = %target.player_id(), %stat, "target not in valid population");
            return RankResult::NEUTRAL;
        }

        let sorted = self.sorted_values(population, stat);
        let Some(position) = sorted.iter().position(|v| *v == target_value) else {
            return RankResult::NEUTRAL;
        };

        self.result_for(position as u32 + 1, sorted.len() as u32)
    }

    /// Rank every row of `population`, in population order.
    ///
    /// Invalid rows receive the neutral result. Rankings are independent, so
    /// they are computed in parallel.
    pub fn rank_all<R>(&self, population: &[R], stat: StatKey) -> Vec<(PlayerId, RankResult)>
    where
        R: StatRow + Sync,
    {
        let sorted = self.sorted_values(population, stat);
        let total = sorted.len() as u32;
        debug!(%stat, total, population = population.len(), "ranking population");

        population
            .par_iter()
            .map(|row| {
                let result = match self.valid_value(row, stat) {
                    Some(value) => {
                        let better = sorted
                            .partition_point(|v| self.compare(*v, value) == Ordering::Less);
                        self.result_for(better as u32 + 1, total)
                    }
                    None => RankResult::NEUTRAL,
                };
                (row.player_id().clone(), result)
            })
            .collect()
    }
}

/// Whether a resolved value takes part in ranking.
pub fn is_valid(stat: StatKey, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if stat.requires_positive() {
        value > 0.0
    } else {
        value >= 0.0
    }
}

/// `round((total - rank + 1) / total * 100)`, or `0` for an unranked player.
pub fn percentile(rank: u32, total: u32, scale: PercentileScale) -> u8 {
    if rank == 0 || total == 0 || rank > total {
        return 0;
    }
    let raw = (f64::from(total - rank + 1) / f64::from(total) * 100.0).round() as u8;
    match scale {
        PercentileScale::Raw => raw,
        PercentileScale::Display => raw.max(1),
    }
}

/// Rank `target` in `population` with the default top-tier cutoff and raw
/// percentiles.
pub fn rank<R: StatRow>(
    population: &[R],
    stat: StatKey,
    mode: StatMode,
    higher_is_better: bool,
    target: &R,
) -> RankResult {
    PercentileRanker::new(mode)
        .higher_is_better(higher_is_better)
        .rank(population, stat, target)
}

/// Standings-style classification of a rank within a total.
///
/// The podium and the bottom three get their own bands; everything else is
/// bucketed by `1 - (rank - 1) / max(1, total - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankBand {
    Unranked,
    First,
    Second,
    Third,
    Upper,
    AboveAverage,
    Middle,
    BelowAverage,
    Lower,
    ThirdWorst,
    SecondWorst,
    Worst,
}

impl RankBand {
    pub fn classify(rank: u32, total: u32) -> RankBand {
        if rank == 0 || total == 0 {
            return RankBand::Unranked;
        }
        let spread = f64::from(total.saturating_sub(1).max(1));
        let share = 1.0 - f64::from(rank - 1) / spread;

        match rank {
            1 => RankBand::First,
            2 => RankBand::Second,
            3 => RankBand::Third,
            _ if share >= 0.75 => RankBand::Upper,
            _ if share >= 0.6 => RankBand::AboveAverage,
            _ if share >= 0.4 => RankBand::Middle,
            _ if share >= 0.25 => RankBand::BelowAverage,
            r if Some(r) == total.checked_sub(2) => RankBand::ThirdWorst,
            r if Some(r) == total.checked_sub(1) => RankBand::SecondWorst,
            r if r == total => RankBand::Worst,
            _ => RankBand::Lower,
        }
    }
}
