//! Resources shared by every command.

use crate::{
    cli::{
        types::{Phase, Season, StatMode},
        CommonArgs,
    },
    config::EngineConfig,
    engine::{StatKey, StatKind},
    storage::StatsDatabase,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::resolve_database_path;

/// Database, engine settings and the season selection for one invocation.
pub struct CommandContext {
    pub db: StatsDatabase,
    pub config: EngineConfig,
    pub season: Season,
    pub phase: Phase,
    pub mode: StatMode,
    pub as_json: bool,
}

impl CommandContext {
    /// Open the database and load the config named by the common arguments.
    pub fn open(common: &CommonArgs) -> Result<Self> {
        let config = match &common.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => EngineConfig::default(),
        };

        let path = resolve_database_path(common.db.clone())?;
        debug!(path = %path.display(), "resolved database path");
        let db = StatsDatabase::open(&path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;

        Ok(Self::with_database(db, config, common))
    }

    pub fn with_database(db: StatsDatabase, config: EngineConfig, common: &CommonArgs) -> Self {
        Self {
            mode: common.mode.unwrap_or(config.mode),
            db,
            config,
            season: common.season,
            phase: common.phase.clone(),
            as_json: common.json,
        }
    }
}

/// Pretty-print any result as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One decimal for counting stats, two for ratios.
pub fn format_value(stat: StatKey, value: f64) -> String {
    match stat.kind() {
        StatKind::Ratio => format!("{value:.2}"),
        _ => format!("{value:.1}"),
    }
}
