//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use hoops_stats::{
    cli::{Commands, HoopsStats},
    commands::{
        common::CommandContext,
        compare::handle_compare,
        import::handle_import,
        radar::handle_radar,
        rank::{handle_rank, RankParams},
        trend::{handle_trend, TrendParams},
        zones::{handle_zones, ZonesParams},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = HoopsStats::parse();

    let default_level = if app.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut ctx = CommandContext::open(&app.common)?;

    match app.command {
        Commands::Import {
            kind,
            file,
            replace,
        } => handle_import(&mut ctx, kind, &file, replace)?,

        Commands::Rank {
            stat,
            players,
            top,
            lower_is_better,
        } => handle_rank(
            &ctx,
            RankParams {
                stat,
                players,
                top,
                lower_is_better,
            },
        )?,

        Commands::Trend {
            player,
            stat,
            window,
            reference,
        } => handle_trend(
            &ctx,
            TrendParams {
                player,
                stat,
                window,
                reference,
            },
        )?,

        Commands::Compare { players, stats } => handle_compare(&ctx, players, stats)?,

        Commands::Zones {
            player,
            infer_zones,
            profile,
        } => handle_zones(
            &ctx,
            ZonesParams {
                player,
                infer_zones,
                profile,
            },
        )?,

        Commands::Radar { player } => handle_radar(&ctx, player)?,
    }

    Ok(())
}
