//! Database schema and connection management

use crate::error::{Result, StatsError};
use crate::DB_PATH_ENV_VAR;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// SQLite store of season stats, game logs and shots.
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open the database at the default location, creating it if needed.
    pub fn new() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (or create) the database file at `path` and ensure tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening stats database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default database file under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| StatsError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("hoops-stats").join("stats.db"))
    }

    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Rows keep their full decoded form in `payload`; the key columns are
        // there for lookups.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_season_stats (
                player_id TEXT NOT NULL,
                season INTEGER NOT NULL,
                phase TEXT NOT NULL,
                player_name TEXT NOT NULL,
                team_code TEXT NOT NULL,
                games_played INTEGER NOT NULL,
                payload TEXT NOT NULL,
                PRIMARY KEY (player_id, season, phase, team_code)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS game_logs (
                player_id TEXT NOT NULL,
                season INTEGER NOT NULL,
                phase TEXT NOT NULL,
                round INTEGER NOT NULL,
                payload TEXT NOT NULL,
                PRIMARY KEY (player_id, season, phase, round)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS shots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id TEXT NOT NULL,
                team_code TEXT,
                season INTEGER NOT NULL,
                phase TEXT NOT NULL,
                round INTEGER NOT NULL,
                payload TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_season_stats_season
             ON player_season_stats(season, phase)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_shots_player_season
             ON shots(player_id, season, phase)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_shots_season
             ON shots(season, phase)",
            [],
        )?;

        Ok(())
    }
}
