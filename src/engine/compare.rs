//! Head-to-head comparison of selected players and chart reference lines.

use super::rank::is_valid;
use super::stats::{stat_value, StatKey, StatRow};
use crate::cli::types::PlayerId;
use crate::models::PlayerSeasonStat;
use crate::StatMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;


/// Comparison view slots.
pub const MAX_COMPARISON_SLOTS: usize = 4;

/// There is no "best" among fewer rows than this.
pub const MIN_COMPARISON_ROWS: usize = 2;

/// Stats where the smaller value wins.
pub fn default_lower_is_better() -> BTreeSet<StatKey> {
    BTreeSet::from([StatKey::Turnovers, StatKey::FoulsCommitted])
}

/// Every selected player achieving the best value of `stat`.
///
/// Empty slots are skipped rather than counted as zero. With fewer than two
/// filled slots the result is empty. Ties return every tied player.
pub fn best_performers<R: StatRow>(
    selected: &[Option<&R>],
    stat: StatKey,
    mode: StatMode,
    lower_is_better: &BTreeSet<StatKey>,
) -> BTreeSet<PlayerId> {
    let resolved: Vec<(&PlayerId, f64)> = selected
        .iter()
        .flatten()
        .map(|row| (row.player_id(), stat_value(*row, stat, mode)))
        .collect();

    if resolved.len() < MIN_COMPARISON_ROWS {
        return BTreeSet::new();
    }

    let lower_wins = lower_is_better.contains(&stat);
    let values = resolved.iter().map(|(_, v)| *v);
    let extreme = if lower_wins {
        values.fold(f64::INFINITY, f64::min)
    } else {
        values.fold(f64::NEG_INFINITY, f64::max)
    };

    resolved
        .into_iter()
        .filter(|(_, v)| *v == extreme)
        .map(|(id, _)| id.clone())
        .collect()
}

/// One stat row of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatComparison {
    pub stat: StatKey,
    /// Value per slot; `None` for an empty slot.
    pub values: Vec<Option<f64>>,
    pub best: BTreeSet<PlayerId>,
}

/// Comparison settings shared across every stat of a comparison view.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEngine {
    pub mode: StatMode,
    pub lower_is_better: BTreeSet<StatKey>,
}

impl Default for ComparisonEngine {
    fn default() -> Self {
        Self {
            mode: StatMode::PerGame,
            lower_is_better: default_lower_is_better(),
        }
    }
}

impl ComparisonEngine {
    pub fn new(mode: StatMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn lower_is_better(mut self, stats: impl IntoIterator<Item = StatKey>) -> Self {
        self.lower_is_better = stats.into_iter().collect();
        self
    }

    pub fn best_performers<R: StatRow>(
        &self,
        selected: &[Option<&R>],
        stat: StatKey,
    ) -> BTreeSet<PlayerId> {
        best_performers(selected, stat, self.mode, &self.lower_is_better)
    }

    /// Slot values and leaders for each stat, in the order given.
    pub fn compare_table<R: StatRow>(
        &self,
        selected: &[Option<&R>],
        stats: &[StatKey],
    ) -> Vec<StatComparison> {
        stats
            .iter()
            .map(|&stat| StatComparison {
                stat,
                values: selected
                    .iter()
                    .map(|slot| slot.map(|row| stat_value(row, stat, self.mode)))
                    .collect(),
                best: self.best_performers(selected, stat),
            })
            .collect()
    }
}

/// Horizontal line drawn on a player's game-by-game chart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLine {
    /// The player's own average over the games shown
    #[default]
    PlayerAverage,
    /// The best season value in the league
    LeagueBest,
    /// The league-wide average
    LeagueAverage,
}

impl ReferenceLine {
    pub fn label(self) -> &'static str {
        match self {
            ReferenceLine::PlayerAverage => "Avg",
            ReferenceLine::LeagueBest => "Best",
            ReferenceLine::LeagueAverage => "League",
        }
    }
}

impl fmt::Display for ReferenceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Value of a reference line, `0` when there is nothing to average.
///
/// League lines only consider players with at least one game and a
/// non-negative value.
pub fn reference_value<G: StatRow>(
    line: ReferenceLine,
    games: &[G],
    population: &[PlayerSeasonStat],
    stat: StatKey,
    mode: StatMode,
) -> f64 {
    let mean = |values: &[f64]| {
        if values.is_empty() {
            0.0
        } else {
            values.iter().sum::<f64>() / values.len() as f64
        }
    };

    match line {
        ReferenceLine::PlayerAverage => {
            let values: Vec<f64> = games.iter().map(|g| stat_value(g, stat, mode)).collect();
            mean(&values)
        }
        ReferenceLine::LeagueBest | ReferenceLine::LeagueAverage => {
            let values: Vec<f64> = population
                .iter()
                .filter(|p| p.games_played > 0)
                .map(|p| stat_value(p, stat, mode))
                .filter(|v| v.is_finite() && *v >= 0.0)
                .collect();
            if line == ReferenceLine::LeagueAverage {
                mean(&values)
            } else {
                values.into_iter().fold(0.0, f64::max)
            }
        }
    }
}

/// Number of players in `population` that would take part in ranking `stat`.
pub fn valid_population(population: &[PlayerSeasonStat], stat: StatKey, mode: StatMode) -> usize {
    population
        .iter()
        .filter(|p| is_valid(stat, stat_value(*p, stat, mode)))
        .count()
}
