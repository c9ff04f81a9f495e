//! Row types consumed by the engine.
//!
//! - `season`: one aggregated row per player, season and phase
//! - `game_log`: one row per player per game
//! - `shot`: one row per attempted shot
//! - `output`: serializable result rows printed by the CLI
//! - `de`: lenient field decoders shared by the row types

pub mod de;
pub mod game_log;
pub mod output;
pub mod season;
pub mod shot;

pub use game_log::{parse_minutes, sort_by_round, GameLogEntry};
pub use season::PlayerSeasonStat;
pub use shot::ShotEvent;
