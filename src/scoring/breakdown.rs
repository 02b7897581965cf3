//! Per-result and per-driver points breakdowns.
//!
//! A driver's points are always rebuilt from the raw session results: every
//! scored result becomes one [`DetailEntry`], and the session subtotals are
//! summed from those entries. Nothing is carried over between calls.

use serde::{Deserialize, Serialize};

use super::matchup::teammate_bonus;
use super::rules::{
    clamped_sum, dnf_penalty, fastest_lap_points, position_gain_points, qualifying_points,
    race_points, sprint_points,
};
use crate::cli::types::{DriverId, RaceId, SessionKind};
use crate::league::types::{Driver, Placement, Race, SessionResult, SessionResults};


/// Itemized points for one result.
///
/// Fields that do not apply to a session (fastest lap outside the race,
/// position gain in qualifying) stay at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    /// Points from the session's table, without the fastest lap point
    pub base_points: i32,
    pub fastest_lap_points: i32,
    pub dnf_penalty: i32,
    pub position_gain_points: i32,
    pub positions_gained: i32,
    pub teammate_points: i32,
    pub teammates_beaten: u32,
    pub total: i32,
}

impl PointsBreakdown {
    fn summed(mut self) -> Self {
        self.total = clamped_sum([
            self.base_points,
            self.fastest_lap_points,
            self.dnf_penalty,
            self.position_gain_points,
            self.teammate_points,
        ]);
        self
    }
}

/// One scored result, kept for audit tooltips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEntry {
    pub session: SessionKind,
    pub race_id: RaceId,
    pub race_name: String,
    pub position: i32,
    pub breakdown: PointsBreakdown,
}

/// A driver's season points, split by session, with every scored result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverPoints {
    pub driver_id: DriverId,
    pub race: i32,
    pub qualifying: i32,
    pub sprint: i32,
    pub sprint_qualifying: i32,
    pub details: Vec<DetailEntry>,
}

impl DriverPoints {
    /// Build the subtotals from the detail entries.
    pub fn from_details(driver_id: DriverId, details: Vec<DetailEntry>) -> Self {
        let subtotal = |session: SessionKind| {
            clamped_sum(
                details
                    .iter()
                    .filter(|d| d.session == session)
                    .map(|d| d.breakdown.total),
            )
        };

        Self {
            driver_id,
            race: subtotal(SessionKind::Race),
            qualifying: subtotal(SessionKind::Qualifying),
            sprint: subtotal(SessionKind::Sprint),
            sprint_qualifying: subtotal(SessionKind::SprintQualifying),
            details,
        }
    }

    pub fn subtotal(&self, session: SessionKind) -> i32 {
        match session {
            SessionKind::Race => self.race,
            SessionKind::Qualifying => self.qualifying,
            SessionKind::Sprint => self.sprint,
            SessionKind::SprintQualifying => self.sprint_qualifying,
        }
    }

    /// Grand total: the sum of the four session subtotals.
    pub fn total(&self) -> i32 {
        clamped_sum([self.race, self.qualifying, self.sprint, self.sprint_qualifying])
    }

    pub fn details_for(&self, session: SessionKind) -> impl Iterator<Item = &DetailEntry> {
        self.details.iter().filter(move |d| d.session == session)
    }
}

/// Score a single result for `driver`.
///
/// `results` supplies the teammate comparison and the reference grid for
/// places gained; `drivers` supplies the constructor line-ups.
pub fn score_result(
    result: SessionResult<'_>,
    driver: &Driver,
    results: &SessionResults,
    drivers: &[Driver],
) -> PointsBreakdown {
    let gain = |kind: SessionKind| {
        kind.reference_session()
            .and_then(|reference| {
                results.position_of(reference, result.race_id(), result.driver_id())
            })
            .map(|grid| position_gain_points(grid, result.position()))
            .unwrap_or(0)
    };

    let breakdown = match result {
        SessionResult::Race(r) => {
            let matchup = teammate_bonus(driver, r, &results.race, drivers);
            let gained = gain(SessionKind::Race);
            PointsBreakdown {
                base_points: race_points(r.position, false),
                fastest_lap_points: fastest_lap_points(r.position, r.fastest_lap),
                dnf_penalty: dnf_penalty(r.finished),
                position_gain_points: gained,
                positions_gained: gained,
                teammate_points: matchup.bonus,
                teammates_beaten: matchup.teammates_beaten,
                total: 0,
            }
        }
        SessionResult::Qualifying(e) => {
            let matchup = teammate_bonus(driver, e, &results.qualifying, drivers);
            PointsBreakdown {
                base_points: qualifying_points(e.position),
                teammate_points: matchup.bonus,
                teammates_beaten: matchup.teammates_beaten,
                ..Default::default()
            }
        }
        SessionResult::Sprint(e) => {
            let matchup = teammate_bonus(driver, e, &results.sprint, drivers);
            let gained = gain(SessionKind::Sprint);
            PointsBreakdown {
                base_points: sprint_points(e.position),
                position_gain_points: gained,
                positions_gained: gained,
                teammate_points: matchup.bonus,
                teammates_beaten: matchup.teammates_beaten,
                ..Default::default()
            }
        }
        SessionResult::SprintQualifying(e) => {
            let matchup = teammate_bonus(driver, e, &results.sprint_qualifying, drivers);
            PointsBreakdown {
                base_points: qualifying_points(e.position),
                teammate_points: matchup.bonus,
                teammates_beaten: matchup.teammates_beaten,
                ..Default::default()
            }
        }
    };

    breakdown.summed()
}

/// Fold every result of `driver` into a [`DriverPoints`].
///
/// Results for races missing from `races` contribute nothing. Detail
/// entries are ordered race, qualifying, sprint, sprint qualifying, each in
/// input order.
pub fn aggregate(
    driver: &Driver,
    results: &SessionResults,
    drivers: &[Driver],
    races: &[Race],
) -> DriverPoints {
    let details: Vec<DetailEntry> = results
        .iter()
        .filter(|r| r.driver_id() == driver.id)
        .filter_map(|r| {
            let Some(race) = races.iter().find(|race| race.id == r.race_id()) else {
                tracing::debug!(
                    driver_id = %driver.id,
                    race_id = %r.race_id(),
                    session = %r.kind(),
                    "skipping result for unknown race"
                );
                return None;
            };

            Some(DetailEntry {
                session: r.kind(),
                race_id: race.id,
                race_name: race.name.clone(),
                position: r.position(),
                breakdown: score_result(r, driver, results, drivers),
            })
        })
        .collect();

    let points = DriverPoints::from_details(driver.id, details);
    tracing::trace!(driver_id = %driver.id, total = points.total(), "aggregated driver points");
    points
}
