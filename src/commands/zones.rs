//! Zones command implementation

use super::common::{print_json, CommandContext};
use crate::{
    cli::types::PlayerId,
    engine::{
        aggregate_by_zone, shooting_profile,
        zones::{infer_missing_zones, ZoneComparison},
        ShootingProfile, ZoneSummary,
    },
};
use anyhow::Result;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ZonesParams {
    pub player: PlayerId,
    pub infer_zones: bool,
    pub profile: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZonesReport {
    pub player_id: PlayerId,
    pub zones: Vec<ZoneSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ShootingProfile>,
}

pub fn build_zones(ctx: &CommandContext, params: &ZonesParams) -> Result<ZonesReport> {
    let mut shots = ctx.db.load_player_shots(&params.player, ctx.season, &ctx.phase)?;
    if shots.is_empty() {
        warn!(player = %params.player, season = %ctx.season, "no shots for player");
    }
    if params.infer_zones {
        shots = infer_missing_zones(&shots);
    }

    let profile = if params.profile {
        let mut league_shots = ctx.db.load_season_shots(ctx.season, &ctx.phase)?;
        if params.infer_zones {
            league_shots = infer_missing_zones(&league_shots);
        }
        let league = aggregate_by_zone(&league_shots);
        debug!(league_shots = league_shots.len(), zones = league.len(), "league zone averages");
        Some(shooting_profile(&shots, &league, ctx.config.min_league_zone_attempts))
    } else {
        None
    };

    Ok(ZonesReport {
        player_id: params.player.clone(),
        zones: aggregate_by_zone(&shots),
        profile,
    })
}

fn print_group(label: &str, group: &ZoneComparison) {
    if group.has_league_data {
        println!(
            "  {:<18} {:>3}/{:<3} {:>5.1}%  league {:>5.1}%  {:+.1}",
            label, group.makes, group.attempts, group.percentage, group.league_average, group.diff
        );
    } else {
        println!(
            "  {:<18} {:>3}/{:<3} {:>5.1}%  league -",
            label, group.makes, group.attempts, group.percentage
        );
    }
}

/// Handle the zones command
pub fn handle_zones(ctx: &CommandContext, params: ZonesParams) -> Result<()> {
    let report = build_zones(ctx, &params)?;

    if ctx.as_json {
        return print_json(&report);
    }

    println!("{} shot zones, {} {}", report.player_id, ctx.season, ctx.phase);
    for zone in &report.zones {
        println!(
            "  {:<18} {:>3}/{:<3} {:>5.1}%",
            zone.zone, zone.made, zone.attempted, zone.percentage
        );
    }

    if let Some(profile) = &report.profile {
        println!("Profile vs league");
        print_group("2PT", &profile.total_two_point);
        print_group("at the rim", &profile.at_the_rim);
        print_group("short 2pt", &profile.short_two_point);
        print_group("mid 2pt", &profile.mid_two_point);
        print_group("3PT", &profile.total_three_point);
        print_group("corner 3", &profile.corner_three);
        print_group("left side 3", &profile.left_side_three);
        print_group("right side 3", &profile.right_side_three);
        print_group("top 3", &profile.top_three);
    }
    Ok(())
}
