//! Compare command implementation

use super::common::{format_value, print_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    engine::{
        compare::{MAX_COMPARISON_SLOTS, MIN_COMPARISON_ROWS},
        StatComparison, StatKey,
    },
    error::StatsError,
    models::PlayerSeasonStat,
};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::warn;

/// Stats shown when none are requested.
pub const DEFAULT_COMPARE_STATS: [StatKey; 11] = [
    StatKey::Points,
    StatKey::Rebounds,
    StatKey::Assists,
    StatKey::Steals,
    StatKey::Blocks,
    StatKey::Turnovers,
    StatKey::FoulsCommitted,
    StatKey::EffectiveFieldGoalPercentage,
    StatKey::ThreePointPercentage,
    StatKey::FreeThrowPercentage,
    StatKey::Pir,
];

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub players: Vec<PlayerId>,
    /// Display name per slot; `None` when the player has no season row.
    pub names: Vec<Option<String>>,
    pub rows: Vec<StatComparison>,
}

pub fn build_comparison(
    ctx: &CommandContext,
    players: &[PlayerId],
    stats: &[StatKey],
) -> Result<ComparisonReport> {
    if players.len() < MIN_COMPARISON_ROWS || players.len() > MAX_COMPARISON_SLOTS {
        return Err(StatsError::invalid(format!(
            "compare takes {MIN_COMPARISON_ROWS} to {MAX_COMPARISON_SLOTS} players, got {}",
            players.len()
        ))
        .into());
    }
    let mut seen = BTreeSet::new();
    if let Some(dup) = players.iter().find(|id| !seen.insert(*id)) {
        return Err(StatsError::invalid(format!("player {dup} is selected more than once")).into());
    }

    let slots: Vec<Option<PlayerSeasonStat>> = players
        .iter()
        .map(|id| -> Result<Option<PlayerSeasonStat>> {
            let row = ctx.db.load_player_season(id, ctx.season, &ctx.phase)?;
            if row.is_none() {
                warn!(player = %id, season = %ctx.season, "no season stats, slot left empty");
            }
            Ok(row)
        })
        .collect::<Result<_>>()?;

    let selected: Vec<Option<&PlayerSeasonStat>> = slots.iter().map(Option::as_ref).collect();
    let stats = if stats.is_empty() {
        &DEFAULT_COMPARE_STATS[..]
    } else {
        stats
    };
    let rows = ctx.config.comparison_engine(ctx.mode).compare_table(&selected, stats);

    Ok(ComparisonReport {
        players: players.to_vec(),
        names: slots
            .iter()
            .map(|slot| slot.as_ref().map(|row| row.player_name.clone()))
            .collect(),
        rows,
    })
}

/// Handle the compare command
pub fn handle_compare(ctx: &CommandContext, players: Vec<PlayerId>, stats: Vec<StatKey>) -> Result<()> {
    let report = build_comparison(ctx, &players, &stats)?;

    if ctx.as_json {
        return print_json(&report);
    }

    let header: Vec<String> = report
        .players
        .iter()
        .zip(&report.names)
        .map(|(id, name)| format!("{:>14}", name.as_deref().unwrap_or(id.as_str())))
        .collect();
    println!("{:<8}{}", "", header.join(""));

    for row in &report.rows {
        let cells: Vec<String> = report
            .players
            .iter()
            .zip(&row.values)
            .map(|(id, value)| match value {
                Some(v) => {
                    let best = if row.best.contains(id) { "*" } else { " " };
                    format!("{:>13}{}", format_value(row.stat, *v), best)
                }
                None => format!("{:>14}", "-"),
            })
            .collect();
        println!("{:<8}{}", row.stat.label(), cells.join(""));
    }
    Ok(())
}
