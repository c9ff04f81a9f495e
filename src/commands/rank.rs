//! Rank command implementation

use super::common::{format_value, print_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    engine::{compare::valid_population, stat_value, StatKey},
    models::output::RankLine,
};
use anyhow::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RankParams {
    pub stat: StatKey,
    pub players: Vec<PlayerId>,
    pub top: Option<usize>,
    pub lower_is_better: bool,
}

/// One player's line in a ranking table.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_code: String,
    #[serde(flatten)]
    pub line: RankLine,
}

/// Rank the season population. Without a player filter only ranked players
/// are listed; named players are always listed, ranked or not.
pub fn build_rankings(ctx: &CommandContext, params: &RankParams) -> Result<Vec<RankedPlayer>> {
    let stat = params.stat;
    let population = ctx.db.load_season_stats(ctx.season, &ctx.phase)?;
    if population.is_empty() {
        warn!(season = %ctx.season, phase = %ctx.phase, "no season stats loaded");
    }

    let lower_is_better = params.lower_is_better || ctx.config.is_lower_better(stat);
    let ranker = ctx
        .config
        .ranker(ctx.mode, stat)?
        .higher_is_better(!lower_is_better);

    let valid = valid_population(&population, stat, ctx.mode);
    if valid < population.len() {
        info!(%stat, skipped = population.len() - valid, "rows without a rankable value");
    }

    let ranks = ranker.rank_all(&population, stat);
    let mut lines: Vec<RankedPlayer> = population
        .iter()
        .zip(ranks)
        .filter(|(row, (_, result))| {
            if params.players.is_empty() {
                result.is_ranked()
            } else {
                params.players.contains(&row.player_id)
            }
        })
        .map(|(row, (player_id, result))| RankedPlayer {
            player_id,
            player_name: row.player_name.clone(),
            team_code: row.team_code.clone(),
            line: RankLine {
                stat,
                value: stat_value(row, stat, ctx.mode),
                rank: result.rank,
                total: result.total,
                percentile: result.percentile,
                is_top_tier: result.is_top_tier,
                band: result.band(),
            },
        })
        .collect();

    // Unranked players (rank 0) go last.
    lines.sort_by(|a, b| {
        let key = |p: &RankedPlayer| (p.line.rank == 0, p.line.rank, p.player_name.clone());
        key(a).cmp(&key(b))
    });
    if let Some(top) = params.top {
        lines.truncate(top);
    }
    Ok(lines)
}

/// Handle the rank command
pub fn handle_rank(ctx: &CommandContext, params: RankParams) -> Result<()> {
    let lines = build_rankings(ctx, &params)?;

    if ctx.as_json {
        return print_json(&lines);
    }

    println!(
        "{} ({}) {} {}",
        params.stat.label(),
        ctx.mode,
        ctx.season,
        ctx.phase
    );
    for ranked in &lines {
        let line = &ranked.line;
        let marker = if line.is_top_tier { " *" } else { "" };
        if line.rank == 0 {
            println!(
                "  -  {} ({}) {}: not ranked",
                ranked.player_name,
                ranked.team_code,
                format_value(line.stat, line.value)
            );
        } else {
            println!(
                "{:>3}. {} ({}) {} - {}/{} P{}{}",
                line.rank,
                ranked.player_name,
                ranked.team_code,
                format_value(line.stat, line.value),
                line.rank,
                line.total,
                line.percentile,
                marker
            );
        }
    }
    Ok(())
}
