//! Insert and load operations

use super::schema::StatsDatabase;
use crate::cli::types::{Phase, PlayerId, Season};
use crate::error::Result;
use crate::models::{GameLogEntry, PlayerSeasonStat, ShotEvent};
use rusqlite::{params, Params, Transaction};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Rows removed and written by one store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteSummary {
    pub cleared: usize,
    pub written: usize,
}

/// Season phase whose existing rows a write replaces; `None` keeps them.
type ReplaceScope<'a> = Option<(Season, &'a Phase)>;

fn clear_table(tx: &Transaction<'_>, table: &str, scope: ReplaceScope<'_>) -> Result<usize> {
    let Some((season, phase)) = scope else {
        return Ok(0);
    };
    let removed = tx.execute(
        &format!("DELETE FROM {table} WHERE season = ? AND phase = ?"),
        params![season.as_u16(), phase.as_str()],
    )?;
    debug!(table, %season, %phase, removed, "cleared table");
    Ok(removed)
}

impl StatsDatabase {
    fn write_season_stats(
        &mut self,
        rows: &[PlayerSeasonStat],
        scope: ReplaceScope<'_>,
    ) -> Result<WriteSummary> {
        let tx = self.conn.transaction()?;
        let cleared = clear_table(&tx, "player_season_stats", scope)?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO player_season_stats
                 (player_id, season, phase, player_name, team_code, games_played, payload)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.player_id.as_str(),
                    row.season.as_u16(),
                    row.phase.as_str(),
                    row.player_name,
                    row.team_code,
                    row.games_played,
                    serde_json::to_string(row)?,
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = rows.len(), cleared, "stored season stats");
        Ok(WriteSummary {
            cleared,
            written: rows.len(),
        })
    }

    fn write_game_logs(
        &mut self,
        rows: &[GameLogEntry],
        scope: ReplaceScope<'_>,
    ) -> Result<WriteSummary> {
        let tx = self.conn.transaction()?;
        let cleared = clear_table(&tx, "game_logs", scope)?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO game_logs (player_id, season, phase, round, payload)
                 VALUES (?, ?, ?, ?, ?)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.player_id.as_str(),
                    row.season.as_u16(),
                    row.phase.as_str(),
                    row.round,
                    serde_json::to_string(row)?,
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = rows.len(), cleared, "stored game logs");
        Ok(WriteSummary {
            cleared,
            written: rows.len(),
        })
    }

    fn write_shots(&mut self, shots: &[ShotEvent], scope: ReplaceScope<'_>) -> Result<WriteSummary> {
        let tx = self.conn.transaction()?;
        let cleared = clear_table(&tx, "shots", scope)?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO shots (player_id, team_code, season, phase, round, payload)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )?;
            for shot in shots {
                stmt.execute(params![
                    shot.player_id.as_str(),
                    shot.team_code,
                    shot.season.as_u16(),
                    shot.phase.as_str(),
                    shot.round,
                    serde_json::to_string(shot)?,
                ])?;
            }
        }
        tx.commit()?;
        debug!(rows = shots.len(), cleared, "stored shots");
        Ok(WriteSummary {
            cleared,
            written: shots.len(),
        })
    }

    /// Insert or replace season rows. Returns the number of rows written.
    pub fn upsert_season_stats(&mut self, rows: &[PlayerSeasonStat]) -> Result<usize> {
        Ok(self.write_season_stats(rows, None)?.written)
    }

    /// Swap a season phase's season rows for `rows` in one transaction.
    pub fn replace_season_stats(
        &mut self,
        season: Season,
        phase: &Phase,
        rows: &[PlayerSeasonStat],
    ) -> Result<WriteSummary> {
        self.write_season_stats(rows, Some((season, phase)))
    }

    /// Insert or replace game logs, keyed by player, season, phase and round.
    pub fn upsert_game_logs(&mut self, rows: &[GameLogEntry]) -> Result<usize> {
        Ok(self.write_game_logs(rows, None)?.written)
    }

    /// Swap a season phase's game logs for `rows` in one transaction.
    pub fn replace_game_logs(
        &mut self,
        season: Season,
        phase: &Phase,
        rows: &[GameLogEntry],
    ) -> Result<WriteSummary> {
        self.write_game_logs(rows, Some((season, phase)))
    }

    /// Append shot events. Shots have no natural key, so re-importing a feed
    /// duplicates it; use [`StatsDatabase::replace_shots`] instead.
    pub fn insert_shots(&mut self, shots: &[ShotEvent]) -> Result<usize> {
        Ok(self.write_shots(shots, None)?.written)
    }

    /// Swap a season phase's shots for `shots` in one transaction.
    pub fn replace_shots(
        &mut self,
        season: Season,
        phase: &Phase,
        shots: &[ShotEvent],
    ) -> Result<WriteSummary> {
        self.write_shots(shots, Some((season, phase)))
    }

    /// Delete every row of a season phase from all tables.
    pub fn clear_season(&mut self, season: Season, phase: &Phase) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut removed = 0;
        for table in ["player_season_stats", "game_logs", "shots"] {
            removed += clear_table(&tx, table, Some((season, phase)))?;
        }
        tx.commit()?;
        Ok(removed)
    }

    fn load_payloads<T: DeserializeOwned>(&self, sql: &str, params: impl Params) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let payloads = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        payloads
            .iter()
            .map(|payload| Ok(serde_json::from_str(payload)?))
            .collect()
    }

    /// All season rows of a season phase, the ranking population.
    pub fn load_season_stats(&self, season: Season, phase: &Phase) -> Result<Vec<PlayerSeasonStat>> {
        self.load_payloads(
            "SELECT payload FROM player_season_stats
             WHERE season = ? AND phase = ?
             ORDER BY player_id, team_code",
            params![season.as_u16(), phase.as_str()],
        )
    }

    /// A player's season row. A player traded mid-season has one row per team;
    /// the one with the most games is returned.
    pub fn load_player_season(
        &self,
        player_id: &PlayerId,
        season: Season,
        phase: &Phase,
    ) -> Result<Option<PlayerSeasonStat>> {
        let rows = self.load_payloads(
            "SELECT payload FROM player_season_stats
             WHERE player_id = ? AND season = ? AND phase = ?
             ORDER BY games_played DESC, team_code
             LIMIT 1",
            params![player_id.as_str(), season.as_u16(), phase.as_str()],
        )?;
        Ok(rows.into_iter().next())
    }

    /// A player's games ordered by round.
    pub fn load_game_logs(
        &self,
        player_id: &PlayerId,
        season: Season,
        phase: &Phase,
    ) -> Result<Vec<GameLogEntry>> {
        self.load_payloads(
            "SELECT payload FROM game_logs
             WHERE player_id = ? AND season = ? AND phase = ?
             ORDER BY round",
            params![player_id.as_str(), season.as_u16(), phase.as_str()],
        )
    }

    /// A player's shots in import order.
    pub fn load_player_shots(
        &self,
        player_id: &PlayerId,
        season: Season,
        phase: &Phase,
    ) -> Result<Vec<ShotEvent>> {
        self.load_payloads(
            "SELECT payload FROM shots
             WHERE player_id = ? AND season = ? AND phase = ?
             ORDER BY id",
            params![player_id.as_str(), season.as_u16(), phase.as_str()],
        )
    }

    /// Every shot of a season phase, used for league zone averages.
    pub fn load_season_shots(&self, season: Season, phase: &Phase) -> Result<Vec<ShotEvent>> {
        self.load_payloads(
            "SELECT payload FROM shots
             WHERE season = ? AND phase = ?
             ORDER BY id",
            params![season.as_u16(), phase.as_str()],
        )
    }
}
