//! Display modes that change how stat values and percentiles are presented.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether counting stats are read per game or normalized to 40 minutes.
///
/// # Examples
///
/// ```rust
/// use hoops_stats::StatMode;
///
/// assert_eq!(StatMode::default(), StatMode::PerGame);
/// assert_eq!(StatMode::Per40.to_string(), "per_40");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum StatMode {
    /// Stats as averaged per game played
    #[default]
    #[value(name = "per_game", alias = "per-game")]
    PerGame,
    /// Stats normalized to a 40-minute basis
    #[serde(rename = "per_40", alias = "per40")]
    #[value(name = "per_40", alias = "per40", alias = "per-40")]
    Per40,
}

impl fmt::Display for StatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatMode::PerGame => write!(f, "per_game"),
            StatMode::Per40 => write!(f, "per_40"),
        }
    }
}

/// How percentiles are reported.
///
/// `Display` clamps to a minimum of 1 so radar-style charts never collapse a
/// ranked player onto the origin.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PercentileScale {
    #[default]
    Raw,
    Display,
}

impl fmt::Display for PercentileScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentileScale::Raw => write!(f, "raw"),
            PercentileScale::Display => write!(f, "display"),
        }
    }
}
