//! Shot-zone aggregation and court-bin classification.

use crate::models::ShotEvent;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Label for shots without a zone.
pub const UNKNOWN_ZONE: &str = "Unknown";

pub const AT_THE_RIM: &str = "at the rim";
pub const SHORT_2PT_LEFT: &str = "short 2pt left";
pub const SHORT_2PT_CENTER: &str = "short 2pt center";
pub const SHORT_2PT_RIGHT: &str = "short 2pt right";
pub const MID_2PT_LEFT: &str = "mid 2pt left";
pub const MID_2PT_CENTER: &str = "mid 2pt center";
pub const MID_2PT_RIGHT: &str = "mid 2pt right";
pub const CORNER_3_LEFT: &str = "corner 3 left";
pub const CORNER_3_RIGHT: &str = "right corner 3";
pub const LEFT_SIDE_3: &str = "left side 3";
pub const RIGHT_SIDE_3: &str = "right side 3";
pub const TOP_3: &str = "top 3";

/// Minimum league attempts in a zone before its average is trusted.
pub const DEFAULT_MIN_LEAGUE_ATTEMPTS: u32 = 10;

/// Makes and attempts for one zone label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub attempted: u32,
    pub made: u32,
    /// `made / attempted * 100`, or `0` without attempts.
    pub percentage: f64,
}

fn shooting_percentage(made: u32, attempted: u32) -> f64 {
    if attempted > 0 {
        f64::from(made) / f64::from(attempted) * 100.0
    } else {
        0.0
    }
}

/// Trimmed zone label, `None` when missing or blank.
fn zone_of(shot: &ShotEvent) -> Option<&str> {
    shot.zone.as_deref().map(str::trim).filter(|z| !z.is_empty())
}

fn zone_label(shot: &ShotEvent) -> &str {
    zone_of(shot).unwrap_or(UNKNOWN_ZONE)
}

/// Group shots by zone, most-attempted zone first.
///
/// Zones with equal attempts keep the order in which they first appear.
pub fn aggregate_by_zone(shots: &[ShotEvent]) -> Vec<ZoneSummary> {
    let mut tallies: IndexMap<&str, (u32, u32)> = IndexMap::new();
    for shot in shots {
        let (attempted, made) = tallies.entry(zone_label(shot)).or_insert((0, 0));
        *attempted += 1;
        if shot.is_made() {
            *made += 1;
        }
    }

    let mut summaries: Vec<ZoneSummary> = tallies
        .into_iter()
        .map(|(zone, (attempted, made))| ZoneSummary {
            zone: zone.to_string(),
            attempted,
            made,
            percentage: shooting_percentage(made, attempted),
        })
        .collect();
    summaries.sort_by(|a, b| b.attempted.cmp(&a.attempted));
    summaries
}

/// Court dimensions in centimetres, basket at the origin, `y` towards half court.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtGeometry {
    pub three_point_radius: f64,
    pub corner_line_x: f64,
    pub corner_intersection_y: f64,
    pub restricted_area_radius: f64,
    pub short_range_radius: f64,
    pub center_lane_half_width: f64,
}

impl Default for CourtGeometry {
    fn default() -> Self {
        Self {
            three_point_radius: 675.0,
            corner_line_x: 660.0,
            corner_intersection_y: 157.5,
            restricted_area_radius: 125.0,
            short_range_radius: 300.0,
            center_lane_half_width: 50.0,
        }
    }
}

impl CourtGeometry {
    /// Zone label for a shot taken at `(x, y)`.
    pub fn classify(&self, x: f64, y: f64) -> &'static str {
        let distance = x.hypot(y);
        let angle = x.atan2(y).to_degrees();

        let corner_three = x.abs() >= self.corner_line_x && y <= self.corner_intersection_y;
        let arc_three = distance >= self.three_point_radius && y > self.corner_intersection_y;

        if corner_three {
            return if x < 0.0 { CORNER_3_LEFT } else { CORNER_3_RIGHT };
        }
        if arc_three {
            return if angle < -30.0 {
                RIGHT_SIDE_3
            } else if angle > 30.0 {
                LEFT_SIDE_3
            } else {
                TOP_3
            };
        }

        if distance <= self.restricted_area_radius {
            return AT_THE_RIM;
        }
        let short = distance <= self.short_range_radius;
        match (short, x) {
            (true, x) if x < -self.center_lane_half_width => SHORT_2PT_LEFT,
            (true, x) if x > self.center_lane_half_width => SHORT_2PT_RIGHT,
            (true, _) => SHORT_2PT_CENTER,
            (false, x) if x < -self.center_lane_half_width => MID_2PT_LEFT,
            (false, x) if x > self.center_lane_half_width => MID_2PT_RIGHT,
            (false, _) => MID_2PT_CENTER,
        }
    }
}

/// Zone label for court coordinates using standard court dimensions.
pub fn classify_coordinates(x: f64, y: f64) -> &'static str {
    CourtGeometry::default().classify(x, y)
}

/// Copy of `shots` with blank zones filled in from coordinates.
///
/// Shots that already carry a zone are left untouched.
pub fn infer_missing_zones(shots: &[ShotEvent]) -> Vec<ShotEvent> {
    let court = CourtGeometry::default();
    shots
        .iter()
        .map(|shot| {
            let mut shot = shot.clone();
            if zone_of(&shot).is_none() {
                shot.zone = Some(court.classify(shot.coord_x, shot.coord_y).to_string());
            }
            shot
        })
        .collect()
}

/// A zone group compared with the league.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ZoneComparison {
    pub attempts: u32,
    pub makes: u32,
    pub percentage: f64,
    pub league_average: f64,
    pub diff: f64,
    pub has_league_data: bool,
}

/// Grouped shooting profile, two-point and three-point areas.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ShootingProfile {
    pub total_two_point: ZoneComparison,
    pub at_the_rim: ZoneComparison,
    pub short_two_point: ZoneComparison,
    pub mid_two_point: ZoneComparison,
    pub total_three_point: ZoneComparison,
    pub corner_three: ZoneComparison,
    pub left_side_three: ZoneComparison,
    pub right_side_three: ZoneComparison,
    pub top_three: ZoneComparison,
}

fn find_zone<'a>(summaries: &'a [ZoneSummary], zone: &str) -> Option<&'a ZoneSummary> {
    summaries.iter().find(|s| s.zone.eq_ignore_ascii_case(zone))
}

fn compare_group(
    player: &[ZoneSummary],
    league: &[ZoneSummary],
    zones: &[&str],
    min_league_attempts: u32,
) -> ZoneComparison {
    let mut attempts = 0;
    let mut makes = 0;
    let mut weighted_league = 0.0;
    let mut league_attempts = 0u32;

    for zone in zones {
        if let Some(own) = find_zone(player, zone) {
            attempts += own.attempted;
            makes += own.made;
        }
        if let Some(avg) = find_zone(league, zone).filter(|a| a.attempted >= min_league_attempts) {
            weighted_league += avg.percentage * f64::from(avg.attempted);
            league_attempts += avg.attempted;
        }
    }

    let percentage = shooting_percentage(makes, attempts);
    let league_average = if league_attempts > 0 {
        weighted_league / f64::from(league_attempts)
    } else {
        0.0
    };

    ZoneComparison {
        attempts,
        makes,
        percentage,
        league_average,
        diff: percentage - league_average,
        has_league_data: league_attempts > 0,
    }
}

/// Build a grouped profile from a player's (or team's) shots and league-wide
/// zone summaries.
///
/// League averages are attempt-weighted across the zones of a group and only
/// count zones with at least `min_league_attempts` league attempts.
pub fn shooting_profile(
    shots: &[ShotEvent],
    league: &[ZoneSummary],
    min_league_attempts: u32,
) -> ShootingProfile {
    let own = aggregate_by_zone(shots);
    let group = |zones: &[&str]| compare_group(&own, league, zones, min_league_attempts);

    ShootingProfile {
        total_two_point: group(&[
            AT_THE_RIM,
            SHORT_2PT_LEFT,
            SHORT_2PT_CENTER,
            SHORT_2PT_RIGHT,
            MID_2PT_LEFT,
            MID_2PT_CENTER,
            MID_2PT_RIGHT,
        ]),
        at_the_rim: group(&[AT_THE_RIM]),
        short_two_point: group(&[SHORT_2PT_LEFT, SHORT_2PT_CENTER, SHORT_2PT_RIGHT]),
        mid_two_point: group(&[MID_2PT_LEFT, MID_2PT_CENTER, MID_2PT_RIGHT]),
        total_three_point: group(&[CORNER_3_LEFT, CORNER_3_RIGHT, LEFT_SIDE_3, RIGHT_SIDE_3, TOP_3]),
        corner_three: group(&[CORNER_3_LEFT, CORNER_3_RIGHT]),
        left_side_three: group(&[LEFT_SIDE_3]),
        right_side_three: group(&[RIGHT_SIDE_3]),
        top_three: group(&[TOP_3]),
    }
}
