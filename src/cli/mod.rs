//! CLI argument definitions and parsing.

pub mod types;

use crate::engine::{compare::ReferenceLine, stats::StatKey};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use types::{Phase, PlayerId, Season, StatMode};

/// Arguments shared by every command.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Database file (or set `HOOPS_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Season year (e.g. 2024).
    #[clap(long, short, global = true, default_value_t = Season::default())]
    pub season: Season,

    /// Season phase: RS (regular season) or PO (playoffs).
    #[clap(long, global = true, default_value_t = Phase::default())]
    pub phase: Phase,

    /// Per-game or per-40-minute values. Defaults to the config file's mode.
    #[clap(long, short, global = true, value_enum)]
    pub mode: Option<StatMode>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// JSON file overriding engine defaults (window, top tier, lower-is-better stats).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Feed types accepted by `import`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedKind {
    /// One row per player, season and phase
    #[value(name = "season-stats")]
    SeasonStats,
    /// One row per player per game
    #[value(name = "game-logs")]
    GameLogs,
    /// One row per attempted shot
    Shots,
}

impl FeedKind {
    /// Name used on the command line and in import summaries.
    pub fn label(self) -> &'static str {
        match self {
            FeedKind::SeasonStats => "season-stats",
            FeedKind::GameLogs => "game-logs",
            FeedKind::Shots => "shots",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a JSON feed (an array of records) into the database.
    Import {
        /// Which kind of rows the feed holds.
        #[clap(long, short, value_enum)]
        kind: FeedKind,

        /// Path to the JSON feed.
        file: PathBuf,

        /// Replace this feed's rows for the season phase instead of merging.
        #[clap(long)]
        replace: bool,
    },

    /// Rank players in one stat against the season population.
    Rank {
        /// Stat to rank, e.g. `points`, `ast`, `efg`, `turnovers`.
        #[clap(long)]
        stat: StatKey,

        /// Only show these players (repeatable): `-p P001 -p P002`.
        #[clap(long = "player", short = 'p')]
        players: Vec<PlayerId>,

        /// Show only the first N lines.
        #[clap(long)]
        top: Option<usize>,

        /// Treat smaller values as better (defaults to the config's stat list).
        #[clap(long)]
        lower_is_better: bool,
    },

    /// Game-by-game values with a trailing rolling average.
    Trend {
        #[clap(long = "player", short = 'p')]
        player: PlayerId,

        #[clap(long)]
        stat: StatKey,

        /// Rolling window in games (defaults to the config's window).
        #[clap(long, short)]
        window: Option<usize>,

        /// Reference line drawn alongside the trend.
        #[clap(long, value_enum, default_value_t = ReferenceLine::PlayerAverage)]
        reference: ReferenceLine,
    },

    /// Compare two to four players side by side.
    Compare {
        /// Players to compare (repeat 2-4 times).
        #[clap(long = "player", short = 'p', required = true)]
        players: Vec<PlayerId>,

        /// Stats to compare (repeatable). Defaults to the standard box score.
        #[clap(long = "stat")]
        stats: Vec<StatKey>,
    },

    /// Shot distribution by court zone.
    Zones {
        #[clap(long = "player", short = 'p')]
        player: PlayerId,

        /// Fill missing zones from shot coordinates.
        #[clap(long)]
        infer_zones: bool,

        /// Show the grouped profile against league averages.
        #[clap(long)]
        profile: bool,
    },

    /// Percentile radar: scoring, playmaking, rebounding, defense and efficiency.
    Radar {
        #[clap(long = "player", short = 'p')]
        player: PlayerId,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "hoops-stats", about = "Basketball player ranking and trend analysis")]
pub struct HoopsStats {
    #[clap(flatten)]
    pub common: CommonArgs,

    /// Debug-level logging (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
