//! Import command implementation

use super::common::{print_json, CommandContext};
use crate::{
    cli::FeedKind,
    models::{GameLogEntry, PlayerSeasonStat, ShotEvent},
    storage::{decode_rows, WriteSummary},
};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Outcome of one import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    pub kind: String,
    pub rows: usize,
    pub cleared: usize,
}

/// Records without a season or phase take the ones selected on the command line.
fn fill_missing_keys(feed: &mut Value, ctx: &CommandContext) {
    if let Value::Array(items) = feed {
        for item in items.iter_mut() {
            if let Value::Object(fields) = item {
                fields
                    .entry("season")
                    .or_insert_with(|| Value::from(ctx.season.as_u16()));
                fields
                    .entry("phase")
                    .or_insert_with(|| Value::from(ctx.phase.as_str()));
            }
        }
    }
}

/// Store an already parsed feed.
pub fn import_value(
    ctx: &mut CommandContext,
    kind: FeedKind,
    mut feed: Value,
    replace: bool,
) -> Result<ImportSummary> {
    fill_missing_keys(&mut feed, ctx);
    let (season, phase) = (ctx.season, ctx.phase.clone());
    let db = &mut ctx.db;

    // Decode before touching the store so a bad feed leaves existing rows alone.
    let written = match kind {
        FeedKind::SeasonStats => {
            let rows: Vec<PlayerSeasonStat> = decode_rows(feed)?;
            if replace {
                db.replace_season_stats(season, &phase, &rows)?
            } else {
                WriteSummary {
                    cleared: 0,
                    written: db.upsert_season_stats(&rows)?,
                }
            }
        }
        FeedKind::GameLogs => {
            let rows: Vec<GameLogEntry> = decode_rows(feed)?;
            if replace {
                db.replace_game_logs(season, &phase, &rows)?
            } else {
                WriteSummary {
                    cleared: 0,
                    written: db.upsert_game_logs(&rows)?,
                }
            }
        }
        FeedKind::Shots => {
            let rows: Vec<ShotEvent> = decode_rows(feed)?;
            if replace {
                db.replace_shots(season, &phase, &rows)?
            } else {
                WriteSummary {
                    cleared: 0,
                    written: db.insert_shots(&rows)?,
                }
            }
        }
    };

    Ok(ImportSummary {
        kind: kind.label().to_string(),
        rows: written.written,
        cleared: written.cleared,
    })
}

/// Read a feed file and store it.
pub fn build_import(
    ctx: &mut CommandContext,
    kind: FeedKind,
    file: &Path,
    replace: bool,
) -> Result<ImportSummary> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read feed {}", file.display()))?;
    let feed: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    import_value(ctx, kind, feed, replace)
        .with_context(|| format!("failed to import {}", file.display()))
}

/// Handle the import command
pub fn handle_import(
    ctx: &mut CommandContext,
    kind: FeedKind,
    file: &Path,
    replace: bool,
) -> Result<()> {
    info!(file = %file.display(), ?kind, replace, "importing feed");
    let summary = build_import(ctx, kind, file, replace)?;

    if ctx.as_json {
        return print_json(&summary);
    }
    if summary.cleared > 0 {
        println!(
            "Cleared {} rows for {} {}",
            summary.cleared, ctx.season, ctx.phase
        );
    }
    println!("✓ Imported {} {} rows", summary.rows, summary.kind);
    Ok(())
}
