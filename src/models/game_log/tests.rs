//! Unit tests for game-log decoding and ordering

use super::*;
use serde_json::json;

#[test]
fn test_parse_minutes_clock_format() {
    assert_eq!(parse_minutes("25:30"), 25.5);
    assert_eq!(parse_minutes("00:45"), 0.75);
    assert_eq!(parse_minutes("12:"), 12.0);
}

#[test]
fn test_parse_minutes_numeric_text() {
    assert_eq!(parse_minutes("31"), 31.0);
    assert_eq!(parse_minutes("28.5"), 28.5);
    assert_eq!(parse_minutes("DNP"), 0.0);
    assert_eq!(parse_minutes(""), 0.0);
}

#[test]
fn test_decode_league_feed_columns() {
    let game: GameLogEntry = serde_json::from_value(json!({
        "player_id": "P001",
        "season": 2024,
        "round": 7,
        "minutes": "32:15",
        "points": 18,
        "assistances": 6,
        "blocks_favour": 2,
        "field_goals_made_2": 5,
        "field_goals_attempted_2": 9,
        "field_goals_made_3": 2,
        "field_goals_attempted_3": 4,
        "valuation": "21"
    }))
    .unwrap();

    assert_eq!(game.round, 7);
    assert_eq!(game.minutes, 32.25);
    assert_eq!(game.assists, 6.0);
    assert_eq!(game.blocks, 2.0);
    assert_eq!(game.two_pointers_made, 5.0);
    assert_eq!(game.three_pointers_attempted, 4.0);
    assert_eq!(game.pir, 21.0);
    assert_eq!(game.steals, 0.0);
}

#[test]
fn test_shooting_splits_are_derived() {
    let game = GameLogEntry {
        two_pointers_made: 3.0,
        two_pointers_attempted: 4.0,
        free_throws_made: 0.0,
        free_throws_attempted: 0.0,
        ..GameLogEntry::new("P1", 1)
    };
    assert_eq!(game.raw_value(StatKey::TwoPointPercentage), 75.0);
    assert_eq!(game.raw_value(StatKey::FreeThrowPercentage), 0.0);
}

#[test]
fn test_sort_by_round_is_stable() {
    let games = vec![
        GameLogEntry { points: 1.0, ..GameLogEntry::new("P1", 3) },
        GameLogEntry { points: 2.0, ..GameLogEntry::new("P1", 1) },
        GameLogEntry { points: 3.0, ..GameLogEntry::new("P1", 3) },
        GameLogEntry { points: 4.0, ..GameLogEntry::new("P1", 2) },
    ];
    let ordered: Vec<f64> = sort_by_round(&games).iter().map(|g| g.points).collect();
    assert_eq!(ordered, vec![2.0, 4.0, 1.0, 3.0]);
}
