//! End-to-end checks of the engine through the public API

use hoops_stats::engine::{
    aggregate_by_zone, best_performers, compare::default_lower_is_better, rank::rank,
    rolling_average, stat_value, stats::stat_value_from_json, PercentileRanker, StatKey,
};
use hoops_stats::{GameLogEntry, PlayerSeasonStat, ShotEvent, StatMode, StatsError};
use serde_json::json;

fn per_40_points(values: &[f64]) -> Vec<PlayerSeasonStat> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| PlayerSeasonStat {
            points_scored_per_40: Some(*v),
            ..PlayerSeasonStat::new(format!("P{}", i + 1), format!("Player {}", i + 1))
        })
        .collect()
}

#[test]
fn test_per_40_ranking_with_ties() {
    let rows = per_40_points(&[30.0, 20.0, 20.0]);
    let results: Vec<(u32, u8)> = rows
        .iter()
        .map(|row| {
            let r = rank(&rows, StatKey::Points, StatMode::Per40, true, row);
            (r.rank, r.percentile)
        })
        .collect();
    assert_eq!(results, vec![(1, 100), (2, 67), (2, 67)]);
}

#[test]
fn test_rank_is_idempotent_and_bounded() {
    let rows = per_40_points(&[12.0, 7.5, 30.0, 0.0, 18.0, 18.0, 3.0]);
    let ranker = PercentileRanker::new(StatMode::Per40);
    for row in &rows {
        let first = ranker.rank(&rows, StatKey::Points, row);
        let second = ranker.rank(&rows, StatKey::Points, row);
        assert_eq!(first, second);
        assert!(first.rank >= 1 && first.rank <= first.total);
        assert_eq!(first.total as usize, rows.len());
    }
}

#[test]
fn test_rolling_average_scenario() {
    let games: Vec<GameLogEntry> = [10.0, 20.0, 30.0, 40.0, 50.0]
        .iter()
        .enumerate()
        .map(|(i, pts)| GameLogEntry {
            points: *pts,
            ..GameLogEntry::new("P1", i as u32 + 1)
        })
        .collect();

    let values: Vec<f64> = rolling_average(&games, StatKey::Points, StatMode::PerGame, 3)
        .unwrap()
        .map(|p| p.value)
        .collect();
    assert_eq!(values, vec![10.0, 15.0, 20.0, 30.0, 40.0]);

    let err = rolling_average(&games, StatKey::Points, StatMode::PerGame, 0).unwrap_err();
    assert!(matches!(err, StatsError::InvalidParameter { .. }));
}

#[test]
fn test_zone_scenario() {
    let shots = vec![
        ShotEvent::new(Some("paint"), 2),
        ShotEvent::new(Some("paint"), 0),
        ShotEvent::new(Some("arc"), 0),
    ];
    let zones = aggregate_by_zone(&shots);
    let summary: Vec<(&str, u32, u32, f64)> = zones
        .iter()
        .map(|z| (z.zone.as_str(), z.attempted, z.made, z.percentage))
        .collect();
    assert_eq!(summary, vec![("paint", 2, 1, 50.0), ("arc", 1, 0, 0.0)]);
}

#[test]
fn test_turnover_comparison_scenario() {
    let rows: Vec<PlayerSeasonStat> = [3.0, 3.0, 5.0]
        .iter()
        .enumerate()
        .map(|(i, to)| PlayerSeasonStat {
            turnovers: *to,
            ..PlayerSeasonStat::new(format!("P{}", i + 1), "")
        })
        .collect();
    let selected: Vec<Option<&PlayerSeasonStat>> = rows.iter().map(Some).collect();

    let best = best_performers(&selected, StatKey::Turnovers, StatMode::PerGame, &default_lower_is_better());
    let ids: Vec<&str> = best.iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2"]);
}

#[test]
fn test_stat_value_from_loose_json() {
    let row = json!({ "player_id": 1, "points_scored": "21", "minutes_played": 30, "assists": null });
    assert_eq!(stat_value_from_json(&row, StatKey::Points, StatMode::PerGame).unwrap(), 21.0);
    assert_eq!(stat_value_from_json(&row, StatKey::Points, StatMode::Per40).unwrap(), 28.0);
    assert_eq!(stat_value_from_json(&row, StatKey::Assists, StatMode::PerGame).unwrap(), 0.0);

    let err = stat_value_from_json(&json!([1, 2]), StatKey::Points, StatMode::PerGame).unwrap_err();
    assert!(matches!(err, StatsError::Structural { .. }));
}

#[test]
fn test_derived_stats() {
    let row = PlayerSeasonStat {
        two_pointers_made: 4.0,
        two_pointers_attempted: 8.0,
        three_pointers_made: 2.0,
        three_pointers_attempted: 4.0,
        assists: 6.0,
        turnovers: 0.0,
        ..PlayerSeasonStat::new("P1", "")
    };
    // (6 + 0.5 * 2) / 12 * 100
    let efg = stat_value(&row, StatKey::EffectiveFieldGoalPercentage, StatMode::PerGame);
    assert!((efg - 58.333333).abs() < 1e-4);
    assert_eq!(stat_value(&row, StatKey::AssistsToTurnovers, StatMode::PerGame), 6.0);
}
