//! Basketball Stats Engine Library
//!
//! Ranking and derived-metric engine for basketball player statistics: percentile
//! ranks against a season population, rolling averages over game logs,
//! head-to-head comparisons, shot-zone aggregation and composite radar profiles.
//!
//! ## Features
//!
//! - **Stat Access**: Per-game and per-40-minute values, eFG% and AST/TO derived on read
//! - **Percentile Ranking**: Tie-aware ranks, percentiles and a top-tier flag
//! - **Rolling Averages**: Lazy trailing windows over a game log
//! - **Comparisons**: Best performers across 2-4 players, with chart reference lines
//! - **Shot Zones**: Zone totals, court-coordinate bins and league-relative profiles
//! - **Database Storage**: Local SQLite store loaded from JSON feeds
//!
//! ## Quick Start
//!
//! ```rust
//! use hoops_stats::{engine::rolling::rolling_average, engine::stats::StatKey, GameLogEntry, StatMode};
//!
//! let games: Vec<GameLogEntry> = [10.0, 20.0, 30.0, 40.0, 50.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, pts)| GameLogEntry {
//!         points: *pts,
//!         ..GameLogEntry::new("P001", i as u32 + 1)
//!     })
//!     .collect();
//!
//! let averages: Vec<f64> = rolling_average(&games, StatKey::Points, StatMode::PerGame, 3)?
//!     .map(|point| point.value)
//!     .collect();
//! assert_eq!(averages, vec![10.0, 15.0, 20.0, 30.0, 40.0]);
//! # Ok::<(), hoops_stats::StatsError>(())
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file to avoid passing `--db` to every command:
//! ```bash
//! export HOOPS_STATS_DB=~/stats/euroleague.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PercentileScale, Phase, PlayerId, Season, StatMode};
pub use error::{Result, StatsError};
pub use models::{GameLogEntry, PlayerSeasonStat, ShotEvent};

pub const DB_PATH_ENV_VAR: &str = "HOOPS_STATS_DB";
