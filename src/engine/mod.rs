//! Pure computation over stat rows, game logs and shot events.

pub mod compare;
pub mod radar;
pub mod rank;
pub mod rolling;
pub mod stats;
pub mod zones;

pub use compare::{best_performers, reference_value, ComparisonEngine, ReferenceLine, StatComparison};
pub use radar::{radar_profile, RadarAxis, RadarAxisKind, RadarProfile};
pub use rank::{PercentileRanker, RankBand, RankResult};
pub use rolling::{rolling_average, RollingAverage, RollingPoint};
pub use stats::{stat_value, StatKey, StatKind, StatRow};
pub use zones::{aggregate_by_zone, classify_coordinates, shooting_profile, ShootingProfile, ZoneSummary};
