//! Unit tests for shot-zone aggregation

use super::*;

fn shot(zone: Option<&str>, points: u32) -> ShotEvent {
    ShotEvent::new(zone, points)
}

fn shot_at(x: f64, y: f64, points: u32) -> ShotEvent {
    ShotEvent {
        coord_x: x,
        coord_y: y,
        ..ShotEvent::new(None, points)
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_paint_and_arc() {
        let shots = vec![
            shot(Some("paint"), 2),
            shot(Some("paint"), 0),
            shot(Some("arc"), 0),
        ];
        let zones = aggregate_by_zone(&shots);
        assert_eq!(
            zones,
            vec![
                ZoneSummary {
                    zone: "paint".to_string(),
                    attempted: 2,
                    made: 1,
                    percentage: 50.0,
                },
                ZoneSummary {
                    zone: "arc".to_string(),
                    attempted: 1,
                    made: 0,
                    percentage: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_missing_and_blank_zones_are_unknown() {
        let shots = vec![shot(None, 3), shot(Some("   "), 0)];
        let zones = aggregate_by_zone(&shots);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone, UNKNOWN_ZONE);
        assert_eq!((zones[0].attempted, zones[0].made), (2, 1));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let shots = vec![
            shot(Some("top 3"), 0),
            shot(Some("at the rim"), 2),
            shot(Some("mid 2pt left"), 2),
            shot(Some("at the rim"), 0),
            shot(Some("mid 2pt left"), 0),
        ];
        let order: Vec<String> = aggregate_by_zone(&shots).into_iter().map(|z| z.zone).collect();
        assert_eq!(order, vec!["at the rim", "mid 2pt left", "top 3"]);
    }

    #[test]
    fn test_totals_are_conserved() {
        let labels = ["a", "b", "c", "a", "a", "c", "d", "b"];
        let shots: Vec<ShotEvent> = labels
            .iter()
            .enumerate()
            .map(|(i, z)| shot(Some(z), if i % 3 == 0 { 2 } else { 0 }))
            .collect();
        let zones = aggregate_by_zone(&shots);

        let attempted: u32 = zones.iter().map(|z| z.attempted).sum();
        assert_eq!(attempted as usize, shots.len());
        assert!(zones.iter().all(|z| z.made <= z.attempted));
    }

    #[test]
    fn test_no_shots() {
        assert!(aggregate_by_zone(&[]).is_empty());
    }
}

#[cfg(test)]
mod classify_tests {
    use super::*;

    #[test]
    fn test_two_point_bins() {
        assert_eq!(classify_coordinates(0.0, 50.0), AT_THE_RIM);
        assert_eq!(classify_coordinates(0.0, 200.0), SHORT_2PT_CENTER);
        assert_eq!(classify_coordinates(-150.0, 150.0), SHORT_2PT_LEFT);
        assert_eq!(classify_coordinates(150.0, 150.0), SHORT_2PT_RIGHT);
        assert_eq!(classify_coordinates(-200.0, 300.0), MID_2PT_LEFT);
        assert_eq!(classify_coordinates(0.0, 500.0), MID_2PT_CENTER);
        assert_eq!(classify_coordinates(300.0, 400.0), MID_2PT_RIGHT);
    }

    #[test]
    fn test_three_point_bins() {
        assert_eq!(classify_coordinates(-700.0, 100.0), CORNER_3_LEFT);
        assert_eq!(classify_coordinates(700.0, 100.0), CORNER_3_RIGHT);
        assert_eq!(classify_coordinates(0.0, 700.0), TOP_3);
        assert_eq!(classify_coordinates(500.0, 500.0), LEFT_SIDE_3);
        assert_eq!(classify_coordinates(-500.0, 500.0), RIGHT_SIDE_3);
    }

    #[test]
    fn test_infer_missing_zones_keeps_existing_labels() {
        let shots = vec![shot_at(0.0, 50.0, 2), shot(Some("paint"), 0)];
        let inferred = infer_missing_zones(&shots);
        assert_eq!(inferred[0].zone.as_deref(), Some(AT_THE_RIM));
        assert_eq!(inferred[1].zone.as_deref(), Some("paint"));
    }

    #[test]
    fn test_infer_missing_zones_fills_blank_labels() {
        let blank = ShotEvent {
            zone: Some("   ".to_string()),
            ..shot_at(0.0, 50.0, 2)
        };
        let empty = ShotEvent {
            zone: Some(String::new()),
            ..shot_at(0.0, 50.0, 0)
        };
        let inferred = infer_missing_zones(&[blank, empty]);
        assert_eq!(inferred[0].zone.as_deref(), Some(AT_THE_RIM));
        assert_eq!(inferred[1].zone.as_deref(), Some(AT_THE_RIM));

        let summary = aggregate_by_zone(&inferred);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].zone, AT_THE_RIM);
        assert_eq!(summary[0].attempted, 2);
    }
}

#[cfg(test)]
mod profile_tests {
    use super::*;

    fn league() -> Vec<ZoneSummary> {
        vec![
            ZoneSummary {
                zone: AT_THE_RIM.to_string(),
                attempted: 100,
                made: 60,
                percentage: 60.0,
            },
            ZoneSummary {
                zone: SHORT_2PT_LEFT.to_string(),
                attempted: 20,
                made: 8,
                percentage: 40.0,
            },
            ZoneSummary {
                zone: SHORT_2PT_RIGHT.to_string(),
                attempted: 30,
                made: 15,
                percentage: 50.0,
            },
            ZoneSummary {
                zone: TOP_3.to_string(),
                attempted: 5,
                made: 2,
                percentage: 40.0,
            },
        ]
    }

    #[test]
    fn test_grouped_profile() {
        let shots = vec![
            shot(Some(AT_THE_RIM), 2),
            shot(Some(AT_THE_RIM), 2),
            shot(Some(SHORT_2PT_LEFT), 0),
            shot(Some(SHORT_2PT_RIGHT), 2),
            shot(Some(TOP_3), 3),
        ];
        let profile = shooting_profile(&shots, &league(), DEFAULT_MIN_LEAGUE_ATTEMPTS);

        assert_eq!(profile.at_the_rim.attempts, 2);
        assert_eq!(profile.at_the_rim.percentage, 100.0);
        assert_eq!(profile.at_the_rim.league_average, 60.0);
        assert_eq!(profile.at_the_rim.diff, 40.0);

        assert_eq!(profile.short_two_point.attempts, 2);
        assert_eq!(profile.short_two_point.percentage, 50.0);
        assert!((profile.short_two_point.league_average - 46.0).abs() < 1e-9);

        assert_eq!(profile.total_two_point.attempts, 4);
        assert_eq!(profile.total_two_point.makes, 3);

        // Five league attempts is below the threshold.
        assert_eq!(profile.top_three.attempts, 1);
        assert!(!profile.top_three.has_league_data);
        assert_eq!(profile.top_three.league_average, 0.0);

        assert_eq!(profile.corner_three, ZoneComparison::default());
    }

    #[test]
    fn test_zone_names_match_case_insensitively() {
        let shots = vec![shot(Some("At The Rim"), 2)];
        let profile = shooting_profile(&shots, &league(), DEFAULT_MIN_LEAGUE_ATTEMPTS);
        assert_eq!(profile.at_the_rim.attempts, 1);
        assert!(profile.at_the_rim.has_league_data);
    }
}
