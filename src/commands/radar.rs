//! Radar command implementation

use super::common::{print_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    engine::{radar_profile, RadarProfile, StatKey},
};
use anyhow::{anyhow, Result};

pub fn build_radar(ctx: &CommandContext, player: &PlayerId) -> Result<RadarProfile> {
    let target = ctx
        .db
        .load_player_season(player, ctx.season, &ctx.phase)?
        .ok_or_else(|| anyhow!("no {} {} season stats for player {player}", ctx.season, ctx.phase))?;
    let population = ctx.db.load_season_stats(ctx.season, &ctx.phase)?;

    // Every radar axis is higher-is-better.
    let ranker = ctx.config.ranker(ctx.mode, StatKey::Points)?.higher_is_better(true);
    Ok(radar_profile(&ranker, &population, &target))
}

/// Handle the radar command
pub fn handle_radar(ctx: &CommandContext, player: PlayerId) -> Result<()> {
    let profile = build_radar(ctx, &player)?;

    if ctx.as_json {
        return print_json(&profile);
    }

    println!("{} percentiles ({})", profile.player_id, ctx.mode);
    for axis in &profile.axes {
        let bar = "#".repeat(usize::from(axis.percentile / 5));
        println!("  {:<8} {:>3} {}", axis.label, axis.percentile, bar);
    }
    Ok(())
}
