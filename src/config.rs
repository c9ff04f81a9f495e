//! Engine configuration
//!
//! Defaults cover normal use; a JSON file passed with `--config` overrides any
//! subset of the fields.

use crate::cli::types::{PercentileScale, StatMode};
use crate::engine::compare::{default_lower_is_better, ComparisonEngine};
use crate::engine::rank::{PercentileRanker, DEFAULT_TOP_TIER_FRACTION};
use crate::engine::rolling::DEFAULT_ROLLING_WINDOW;
use crate::engine::stats::StatKey;
use crate::engine::zones::DEFAULT_MIN_LEAGUE_ATTEMPTS;
use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default normalization for commands that do not pass `--mode`.
    pub mode: StatMode,
    pub rolling_window: usize,
    pub top_tier_fraction: f64,
    pub percentile_scale: PercentileScale,
    /// Stats where the smallest value wins a comparison.
    pub lower_is_better: Vec<StatKey>,
    /// League zones with fewer attempts are left out of zone averages.
    pub min_league_zone_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: StatMode::PerGame,
            rolling_window: DEFAULT_ROLLING_WINDOW,
            top_tier_fraction: DEFAULT_TOP_TIER_FRACTION,
            percentile_scale: PercentileScale::Raw,
            lower_is_better: default_lower_is_better().into_iter().collect(),
            min_league_zone_attempts: DEFAULT_MIN_LEAGUE_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rolling_window == 0 {
            return Err(StatsError::invalid("rolling_window must be at least 1"));
        }
        if !(self.top_tier_fraction > 0.0 && self.top_tier_fraction <= 1.0) {
            return Err(StatsError::invalid(format!(
                "top_tier_fraction must be in (0, 1], got {}",
                self.top_tier_fraction
            )));
        }
        Ok(())
    }

    /// Ranker for `mode`, ranking `stat` in its natural direction.
    pub fn ranker(&self, mode: StatMode, stat: StatKey) -> Result<PercentileRanker> {
        PercentileRanker::new(mode)
            .higher_is_better(!self.is_lower_better(stat))
            .scale(self.percentile_scale)
            .top_tier_fraction(self.top_tier_fraction)
    }

    pub fn comparison_engine(&self, mode: StatMode) -> ComparisonEngine {
        ComparisonEngine::new(mode).lower_is_better(self.lower_is_better.iter().copied())
    }

    pub fn is_lower_better(&self, stat: StatKey) -> bool {
        self.lower_is_better.contains(&stat)
    }
}
