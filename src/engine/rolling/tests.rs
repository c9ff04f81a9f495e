//! Unit tests for rolling averages

use super::*;
use crate::models::{sort_by_round, GameLogEntry};

fn games(points: &[f64]) -> Vec<GameLogEntry> {
    points
        .iter()
        .enumerate()
        .map(|(i, pts)| GameLogEntry {
            points: *pts,
            minutes: 20.0,
            ..GameLogEntry::new("P1", i as u32 + 1)
        })
        .collect()
}

fn values(series: &[GameLogEntry], window: usize) -> Vec<f64> {
    rolling_average(series, StatKey::Points, StatMode::PerGame, window)
        .unwrap()
        .map(|p| p.value)
        .collect()
}

#[test]
fn test_ramp_up_then_fixed_window() {
    let series = games(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    assert_eq!(values(&series, 3), vec![10.0, 15.0, 20.0, 30.0, 40.0]);
}

#[test]
fn test_first_value_equals_first_entry_for_any_window() {
    let series = games(&[7.0, 3.0, 11.0]);
    for window in 1..=6 {
        assert_eq!(values(&series, window)[0], 7.0);
    }
}

#[test]
fn test_window_of_one_is_identity() {
    let series = games(&[4.0, 9.0, 2.0]);
    assert_eq!(values(&series, 1), vec![4.0, 9.0, 2.0]);
}

#[test]
fn test_window_larger_than_series_is_cumulative_mean() {
    let series = games(&[2.0, 4.0, 9.0]);
    assert_eq!(values(&series, 10), vec![2.0, 3.0, 5.0]);
}

#[test]
fn test_full_windows_average_exactly_window_members() {
    let points = [3.0, 8.0, 1.0, 12.0, 6.0, 9.0, 4.0];
    let series = games(&points);
    let window = 4;
    for (i, value) in values(&series, window).into_iter().enumerate().skip(window - 1) {
        let expected: f64 = points[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
        assert!((value - expected).abs() < 1e-12);
    }
}

#[test]
fn test_zero_window_is_invalid() {
    let series = games(&[1.0]);
    let err = rolling_average(&series, StatKey::Points, StatMode::PerGame, 0).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn test_output_preserves_entries_and_length() {
    let series = games(&[5.0, 6.0, 7.0]);
    let iter = rolling_average(&series, StatKey::Points, StatMode::PerGame, 2).unwrap();
    assert_eq!(iter.len(), 3);
    let points: Vec<_> = iter.collect();
    for (point, entry) in points.iter().zip(&series) {
        assert!(std::ptr::eq(point.entry, entry));
    }
}

#[test]
fn test_clone_yields_same_points() {
    let series = games(&[5.0, 6.0, 7.0]);
    let iter = rolling_average(&series, StatKey::Points, StatMode::PerGame, 2).unwrap();
    let first: Vec<f64> = iter.clone().map(|p| p.value).collect();
    let second: Vec<f64> = iter.map(|p| p.value).collect();
    assert_eq!(first, second);
}

#[test]
fn test_empty_series_yields_nothing() {
    let series: Vec<GameLogEntry> = Vec::new();
    assert!(values(&series, 3).is_empty());
}

#[test]
fn test_per_40_mode_uses_game_minutes() {
    let series = games(&[10.0, 20.0]);
    let per_40: Vec<f64> = rolling_average(&series, StatKey::Points, StatMode::Per40, 2)
        .unwrap()
        .map(|p| p.value)
        .collect();
    assert_eq!(per_40, vec![20.0, 30.0]);
}

#[test]
fn test_sorted_by_round_before_averaging() {
    let mut series = games(&[10.0, 20.0, 30.0]);
    series.reverse();
    let ordered: Vec<GameLogEntry> = sort_by_round(&series).into_iter().cloned().collect();
    assert_eq!(values(&ordered, 2), vec![10.0, 15.0, 25.0]);
}
