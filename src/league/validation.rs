//! Consistency checks over a league snapshot.
//!
//! Scoring tolerates all of these problems: it skips what it cannot resolve
//! and keeps going. The checks exist so the data can be repaired at the
//! source instead.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use super::snapshot::LeagueSnapshot;
use super::types::{Placement, SessionResults};
use crate::cli::types::{DriverId, RaceId, SessionKind, TeamId};

/// Drivers a fantasy team is expected to roster.
pub const ROSTER_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataIssue {
    /// More than one result for a driver in one race and session
    DuplicateResult {
        session: SessionKind,
        race_id: RaceId,
        driver_id: DriverId,
        count: usize,
    },
    /// Different drivers classified in the same position
    DuplicatePosition {
        session: SessionKind,
        race_id: RaceId,
        position: i32,
        driver_ids: Vec<DriverId>,
    },
    UnknownDriver {
        session: SessionKind,
        race_id: RaceId,
        driver_id: DriverId,
    },
    UnknownRace {
        session: SessionKind,
        race_id: RaceId,
        count: usize,
    },
    /// Sprint-session results for a race that is not a sprint weekend
    SprintOutsideSprintWeekend {
        session: SessionKind,
        race_id: RaceId,
        count: usize,
    },
    RosterSize {
        team_id: TeamId,
        team_name: String,
        size: usize,
    },
    UnknownRosterDriver {
        team_id: TeamId,
        driver_id: DriverId,
    },
    /// The same driver listed more than once on one roster
    DuplicateRosterDriver {
        team_id: TeamId,
        driver_id: DriverId,
        count: usize,
    },
    MultipleTeams {
        driver_id: DriverId,
        team_ids: Vec<TeamId>,
    },
}

fn join_ids<T: fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataIssue::DuplicateResult {
                session,
                race_id,
                driver_id,
                count,
            } => write!(
                f,
                "{} race {}: driver {} has {} results",
                session, race_id, driver_id, count
            ),
            DataIssue::DuplicatePosition {
                session,
                race_id,
                position,
                driver_ids,
            } => write!(
                f,
                "{} race {}: position {} shared by drivers {}",
                session,
                race_id,
                position,
                join_ids(driver_ids)
            ),
            DataIssue::UnknownDriver {
                session,
                race_id,
                driver_id,
            } => write!(
                f,
                "{} race {}: result for unknown driver {}",
                session, race_id, driver_id
            ),
            DataIssue::UnknownRace {
                session,
                race_id,
                count,
            } => write!(f, "{}: {} results for unknown race {}", session, count, race_id),
            DataIssue::SprintOutsideSprintWeekend {
                session,
                race_id,
                count,
            } => write!(
                f,
                "{} race {}: {} results but the race is not a sprint weekend",
                session, race_id, count
            ),
            DataIssue::RosterSize {
                team_id,
                team_name,
                size,
            } => write!(
                f,
                "team {} ({}): roster has {} drivers, expected {}",
                team_id, team_name, size, ROSTER_SIZE
            ),
            DataIssue::UnknownRosterDriver { team_id, driver_id } => {
                write!(f, "team {}: roster lists unknown driver {}", team_id, driver_id)
            }
            DataIssue::DuplicateRosterDriver {
                team_id,
                driver_id,
                count,
            } => write!(
                f,
                "team {}: roster lists driver {} {} times",
                team_id, driver_id, count
            ),
            DataIssue::MultipleTeams {
                driver_id,
                team_ids,
            } => write!(
                f,
                "driver {} is rostered on teams {}",
                driver_id,
                join_ids(team_ids)
            ),
        }
    }
}

/// Run every check. Issues are grouped by session in `SessionKind::ALL`
/// order, then roster issues in team order.
pub fn validate(snapshot: &LeagueSnapshot) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    for kind in SessionKind::ALL {
        check_session(snapshot, kind, &mut issues);
    }
    check_rosters(snapshot, &mut issues);

    tracing::debug!(issues = issues.len(), "validated league snapshot");
    issues
}

fn check_session(snapshot: &LeagueSnapshot, kind: SessionKind, issues: &mut Vec<DataIssue>) {
    let known_drivers: HashSet<DriverId> = snapshot.drivers.iter().map(|d| d.id).collect();

    let mut per_driver: BTreeMap<(RaceId, DriverId), usize> = BTreeMap::new();
    let mut per_position: BTreeMap<(RaceId, i32), BTreeSet<DriverId>> = BTreeMap::new();
    let mut unknown_races: BTreeMap<RaceId, usize> = BTreeMap::new();
    let mut off_weekend: BTreeMap<RaceId, usize> = BTreeMap::new();
    let mut unknown_drivers: BTreeSet<(RaceId, DriverId)> = BTreeSet::new();

    for result in snapshot.results.session(kind) {
        let (race_id, driver_id) = (result.race_id(), result.driver_id());

        *per_driver.entry((race_id, driver_id)).or_default() += 1;
        per_position
            .entry((race_id, result.position()))
            .or_default()
            .insert(driver_id);

        if !known_drivers.contains(&driver_id) {
            unknown_drivers.insert((race_id, driver_id));
        }

        match snapshot.race(race_id) {
            None => *unknown_races.entry(race_id).or_default() += 1,
            Some(race) if kind.is_sprint_session() && !race.has_sprint => {
                *off_weekend.entry(race_id).or_default() += 1
            }
            Some(_) => {}
        }
    }

    issues.extend(
        per_driver
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|((race_id, driver_id), count)| DataIssue::DuplicateResult {
                session: kind,
                race_id,
                driver_id,
                count,
            }),
    );
    issues.extend(
        per_position
            .into_iter()
            .filter(|(_, drivers)| drivers.len() > 1)
            .map(|((race_id, position), drivers)| DataIssue::DuplicatePosition {
                session: kind,
                race_id,
                position,
                driver_ids: drivers.into_iter().collect(),
            }),
    );
    issues.extend(
        unknown_drivers
            .into_iter()
            .map(|(race_id, driver_id)| DataIssue::UnknownDriver {
                session: kind,
                race_id,
                driver_id,
            }),
    );
    issues.extend(
        unknown_races
            .into_iter()
            .map(|(race_id, count)| DataIssue::UnknownRace {
                session: kind,
                race_id,
                count,
            }),
    );
    issues.extend(
        off_weekend
            .into_iter()
            .map(|(race_id, count)| DataIssue::SprintOutsideSprintWeekend {
                session: kind,
                race_id,
                count,
            }),
    );
}

fn check_rosters(snapshot: &LeagueSnapshot, issues: &mut Vec<DataIssue>) {
    let mut teams_by_driver: BTreeMap<DriverId, Vec<TeamId>> = BTreeMap::new();

    for team in &snapshot.teams {
        // Distinct roster entries in first-listed order, with how often each appears
        let mut roster: Vec<(DriverId, usize)> = Vec::new();
        for driver_id in &team.driver_ids {
            match roster.iter_mut().find(|(id, _)| id == driver_id) {
                Some((_, count)) => *count += 1,
                None => roster.push((*driver_id, 1)),
            }
        }

        if roster.len() != ROSTER_SIZE {
            issues.push(DataIssue::RosterSize {
                team_id: team.id,
                team_name: team.name.clone(),
                size: roster.len(),
            });
        }

        for (driver_id, count) in roster {
            if count > 1 {
                issues.push(DataIssue::DuplicateRosterDriver {
                    team_id: team.id,
                    driver_id,
                    count,
                });
            }
            if snapshot.driver(driver_id).is_none() {
                issues.push(DataIssue::UnknownRosterDriver {
                    team_id: team.id,
                    driver_id,
                });
            }
            let teams = teams_by_driver.entry(driver_id).or_default();
            if !teams.contains(&team.id) {
                teams.push(team.id);
            }
        }
    }

    issues.extend(
        teams_by_driver
            .into_iter()
            .filter(|(_, teams)| teams.len() > 1)
            .map(|(driver_id, team_ids)| DataIssue::MultipleTeams {
                driver_id,
                team_ids,
            }),
    );
}

/// Indices of results repeating an earlier (race, driver) pair.
pub fn duplicate_indices<P: Placement>(results: &[P]) -> Vec<usize> {
    let mut seen: HashSet<(RaceId, DriverId)> = HashSet::new();
    results
        .iter()
        .enumerate()
        .filter(|(_, r)| !seen.insert((r.race_id(), r.driver_id())))
        .map(|(index, _)| index)
        .collect()
}

fn keep_first<P: Placement + Clone>(results: &[P]) -> Vec<P> {
    let duplicates: HashSet<usize> = duplicate_indices(results).into_iter().collect();
    results
        .iter()
        .enumerate()
        .filter(|(index, _)| !duplicates.contains(index))
        .map(|(_, r)| r.clone())
        .collect()
}

/// Copy of `results` keeping only the first result per (race, driver) in
/// each session.
pub fn dedupe_results(results: &SessionResults) -> SessionResults {
    SessionResults {
        race: keep_first(&results.race),
        qualifying: keep_first(&results.qualifying),
        sprint: keep_first(&results.sprint),
        sprint_qualifying: keep_first(&results.sprint_qualifying),
    }
}
