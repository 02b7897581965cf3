//! Driver and fantasy team standings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::breakdown::{aggregate, DriverPoints};
use super::rules::clamped_sum;
use crate::cli::types::{DriverId, TeamId};
use crate::league::snapshot::LeagueSnapshot;
use crate::league::types::{Driver, Placement, Race, SessionResults, Team};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStanding {
    pub driver: Driver,
    /// Fantasy team holding the driver; `None` for a free agent
    pub fantasy_team: Option<TeamId>,
    pub total_points: i32,
    pub points: DriverPoints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPoints {
    pub driver: Driver,
    pub total_points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: Team,
    pub total_points: i32,
    /// Roster drivers found in the driver list, in roster order
    pub members: Vec<MemberPoints>,
}

/// Both rankings, each sorted by points descending. Equal totals keep
/// their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub drivers: Vec<DriverStanding>,
    pub teams: Vec<TeamStanding>,
}

impl Standings {
    pub fn driver(&self, driver_id: DriverId) -> Option<&DriverStanding> {
        self.drivers.iter().find(|s| s.driver.id == driver_id)
    }

    pub fn team(&self, team_id: TeamId) -> Option<&TeamStanding> {
        self.teams.iter().find(|s| s.team.id == team_id)
    }
}

pub fn compute_standings(snapshot: &LeagueSnapshot) -> Standings {
    compute_standings_from(
        &snapshot.drivers,
        &snapshot.teams,
        &snapshot.races,
        &snapshot.results,
    )
}

/// Score every driver, then roll driver totals up into team totals.
///
/// Roster entries naming unknown drivers are skipped, and results naming
/// unknown drivers or races contribute nothing.
pub fn compute_standings_from(
    drivers: &[Driver],
    teams: &[Team],
    races: &[Race],
    results: &SessionResults,
) -> Standings {
    log_unattributed_results(drivers, results);

    let per_driver: Vec<DriverPoints> = drivers
        .par_iter()
        .map(|driver| aggregate(driver, results, drivers, races))
        .collect();

    let totals: HashMap<DriverId, i32> = per_driver
        .iter()
        .map(|points| (points.driver_id, points.total()))
        .collect();

    let mut driver_standings: Vec<DriverStanding> = drivers
        .iter()
        .zip(per_driver)
        .map(|(driver, points)| DriverStanding {
            driver: driver.clone(),
            fantasy_team: teams.iter().find(|t| t.has_driver(driver.id)).map(|t| t.id),
            total_points: points.total(),
            points,
        })
        .collect();

    driver_standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let mut team_standings: Vec<TeamStanding> = teams
        .iter()
        .map(|team| {
            let members: Vec<MemberPoints> = team
                .driver_ids
                .iter()
                .filter_map(|driver_id| {
                    let driver = drivers.iter().find(|d| d.id == *driver_id);
                    if driver.is_none() {
                        tracing::debug!(
                            team_id = %team.id,
                            driver_id = %driver_id,
                            "roster references unknown driver"
                        );
                    }
                    driver
                })
                .map(|driver| MemberPoints {
                    driver: driver.clone(),
                    total_points: totals.get(&driver.id).copied().unwrap_or(0),
                })
                .collect();

            TeamStanding {
                team: team.clone(),
                total_points: clamped_sum(members.iter().map(|m| m.total_points)),
                members,
            }
        })
        .collect();

    team_standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    Standings {
        drivers: driver_standings,
        teams: team_standings,
    }
}

fn log_unattributed_results(drivers: &[Driver], results: &SessionResults) {
    let known: HashSet<DriverId> = drivers.iter().map(|d| d.id).collect();
    let unattributed = results
        .iter()
        .filter(|r| !known.contains(&r.driver_id()))
        .count();

    if unattributed > 0 {
        tracing::debug!(unattributed, "results reference unknown drivers and are not scored");
    }
}
