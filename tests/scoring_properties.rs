//! Property-based tests for the scoring rules
//!
//! These tests verify invariants that should hold for all inputs:
//! - Points lookups are total and bounded
//! - Places gained never go negative
//! - Teammate matchups are antisymmetric and ties pay nobody
//! - Driver totals always equal the sum of their detail entries, clamped
//!   into `i32` for any position
//! - Standings are deterministic and sorted

use f1_fantasy::{
    league::types::{Driver, Race, RaceResult, SessionEntry, SessionResults},
    scoring::{
        aggregate, compute_standings,
        matchup::teammate_bonus,
        rules::{position_gain_points, qualifying_points, race_points, sprint_points},
    },
    DriverId, LeagueSnapshot, RaceId, SessionKind,
};
use proptest::prelude::*;

fn driver(id: u32, constructor: &str) -> Driver {
    Driver {
        id: DriverId::new(id),
        name: format!("Driver {}", id),
        number: Some(id),
        constructor: constructor.to_string(),
        is_active: true,
    }
}

/// Two constructors with two drivers each
fn grid() -> Vec<Driver> {
    vec![
        driver(1, "Red Bull"),
        driver(2, "Red Bull"),
        driver(3, "Aston Martin"),
        driver(4, "Aston Martin"),
    ]
}

fn races() -> Vec<Race> {
    (1..=3)
        .map(|id| Race {
            id: RaceId::new(id),
            name: format!("Round {}", id),
            track: String::new(),
            date: String::new(),
            has_sprint: id == 3,
        })
        .collect()
}

/// Mostly plausible grid positions, sometimes any integer at all
fn position() -> impl Strategy<Value = i32> {
    prop_oneof![3 => -2i32..=22, 1 => any::<i32>()]
}

/// Exact sum of `points`, clamped into `i32`
fn expected_sum(points: impl IntoIterator<Item = i32>) -> i32 {
    let sum: i64 = points.into_iter().map(i64::from).sum();
    sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn race_result() -> impl Strategy<Value = RaceResult> {
    (1u32..=3, 1u32..=5, position(), any::<bool>(), any::<bool>()).prop_map(
        |(race, driver, position, fastest_lap, finished)| RaceResult {
            id: None,
            race_id: RaceId::new(race),
            driver_id: DriverId::new(driver),
            position,
            fastest_lap,
            finished,
        },
    )
}

fn session_entry() -> impl Strategy<Value = SessionEntry> {
    (1u32..=3, 1u32..=5, position()).prop_map(|(race, driver, position)| SessionEntry {
        id: None,
        race_id: RaceId::new(race),
        driver_id: DriverId::new(driver),
        position,
    })
}

fn session_results() -> impl Strategy<Value = SessionResults> {
    (
        prop::collection::vec(race_result(), 0..12),
        prop::collection::vec(session_entry(), 0..12),
        prop::collection::vec(session_entry(), 0..8),
        prop::collection::vec(session_entry(), 0..8),
    )
        .prop_map(|(race, qualifying, sprint, sprint_qualifying)| SessionResults {
            race,
            qualifying,
            sprint,
            sprint_qualifying,
        })
}

proptest! {
    #[test]
    fn prop_lookups_are_total_and_bounded(position in any::<i32>(), fastest_lap in any::<bool>()) {
        prop_assert!((0..=26).contains(&race_points(position, fastest_lap)));
        prop_assert!((0..=8).contains(&sprint_points(position)));
        prop_assert!((0..=12).contains(&qualifying_points(position)));
    }

    #[test]
    fn prop_fastest_lap_adds_one_inside_top_ten(position in 1i32..=10) {
        prop_assert_eq!(race_points(position, true), race_points(position, false) + 1);
    }

    #[test]
    fn prop_fastest_lap_worthless_outside_top_ten(position in 11i32..=1000) {
        prop_assert_eq!(race_points(position, true), race_points(position, false));
    }

    #[test]
    fn prop_position_gain_is_places_improved(reference in -50i32..50, finish in -50i32..50) {
        prop_assert_eq!(position_gain_points(reference, finish), (reference - finish).max(0));
    }

    #[test]
    fn prop_position_gain_never_negative(reference in any::<i32>(), finish in any::<i32>()) {
        prop_assert!(position_gain_points(reference, finish) >= 0);
    }

    #[test]
    fn prop_matchup_is_antisymmetric(a in 1i32..=20, b in 1i32..=20) {
        let drivers = grid();
        let entries = vec![
            SessionEntry { id: None, race_id: RaceId::new(1), driver_id: DriverId::new(1), position: a },
            SessionEntry { id: None, race_id: RaceId::new(1), driver_id: DriverId::new(2), position: b },
        ];

        let first = teammate_bonus(&drivers[0], &entries[0], &entries, &drivers);
        let second = teammate_bonus(&drivers[1], &entries[1], &entries, &drivers);

        if a == b {
            prop_assert_eq!(first.bonus + second.bonus, 0);
        } else {
            prop_assert_eq!(first.bonus + second.bonus, 2);
            prop_assert_eq!(first.won(), a < b);
        }
    }

    #[test]
    fn prop_driver_total_is_sum_of_details(results in session_results()) {
        let drivers = grid();
        let races = races();

        for driver in &drivers {
            let points = aggregate(driver, &results, &drivers, &races);

            for kind in SessionKind::ALL {
                let subtotal = expected_sum(points.details_for(kind).map(|d| d.breakdown.total));
                prop_assert_eq!(points.subtotal(kind), subtotal);
            }
            prop_assert_eq!(
                points.total(),
                expected_sum(SessionKind::ALL.iter().map(|k| points.subtotal(*k)))
            );

            for detail in &points.details {
                let b = &detail.breakdown;
                prop_assert_eq!(
                    b.total,
                    expected_sum([
                        b.base_points,
                        b.fastest_lap_points,
                        b.dnf_penalty,
                        b.position_gain_points,
                        b.teammate_points,
                    ])
                );
            }
        }
    }

    #[test]
    fn prop_standings_are_deterministic_and_sorted(results in session_results()) {
        let snapshot = LeagueSnapshot {
            drivers: grid(),
            teams: Vec::new(),
            races: races(),
            results,
        };

        let first = compute_standings(&snapshot);
        let second = compute_standings(&snapshot);
        prop_assert_eq!(&first, &second);

        prop_assert!(first
            .drivers
            .windows(2)
            .all(|pair| pair[0].total_points >= pair[1].total_points));
        prop_assert_eq!(first.drivers.len(), 4);
    }
}
