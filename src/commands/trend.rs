//! Trend command implementation

use super::common::{format_value, print_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    engine::{compare::ReferenceLine, reference_value, rolling_average, stat_value, StatKey},
    models::{
        output::{TrendPoint, TrendReport},
        sort_by_round,
    },
};
use anyhow::Result;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct TrendParams {
    pub player: PlayerId,
    pub stat: StatKey,
    pub window: Option<usize>,
    pub reference: ReferenceLine,
}

/// Game-by-game values in round order with their rolling averages.
pub fn build_trend(ctx: &CommandContext, params: &TrendParams) -> Result<TrendReport> {
    let window = params.window.unwrap_or(ctx.config.rolling_window);
    let logs = ctx.db.load_game_logs(&params.player, ctx.season, &ctx.phase)?;
    if logs.is_empty() {
        warn!(player = %params.player, season = %ctx.season, "no game logs for player");
    }

    let ordered = sort_by_round(&logs);
    let points: Vec<TrendPoint> = rolling_average(&ordered, params.stat, ctx.mode, window)?
        .map(|point| TrendPoint {
            round: point.entry.round,
            opponent: point.entry.opponent.clone(),
            value: stat_value(point.entry, params.stat, ctx.mode),
            rolling_average: point.value,
        })
        .collect();

    let population = match params.reference {
        ReferenceLine::PlayerAverage => Vec::new(),
        ReferenceLine::LeagueBest | ReferenceLine::LeagueAverage => {
            ctx.db.load_season_stats(ctx.season, &ctx.phase)?
        }
    };
    let reference = reference_value(params.reference, &ordered, &population, params.stat, ctx.mode);
    debug!(games = points.len(), window, reference, "built trend");

    Ok(TrendReport {
        player_id: params.player.clone(),
        stat: params.stat,
        window,
        reference_label: params.reference.label().to_string(),
        reference_value: reference,
        points,
    })
}

/// Handle the trend command
pub fn handle_trend(ctx: &CommandContext, params: TrendParams) -> Result<()> {
    let report = build_trend(ctx, &params)?;

    if ctx.as_json {
        return print_json(&report);
    }

    println!(
        "{} {} ({}), {}-game rolling average",
        report.player_id,
        report.stat.label(),
        ctx.mode,
        report.window
    );
    for point in &report.points {
        println!(
            "R{:<3} {:<5} {:>7} avg {:>7}",
            point.round,
            point.opponent.as_deref().unwrap_or("-"),
            format_value(report.stat, point.value),
            format_value(report.stat, point.rolling_average)
        );
    }
    println!(
        "{}: {}",
        report.reference_label,
        format_value(report.stat, report.reference_value)
    );
    Ok(())
}
