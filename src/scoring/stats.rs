//! Season summaries built from a driver's detail entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::breakdown::{DetailEntry, DriverPoints};
use crate::cli::types::SessionKind;

/// How often a driver finished in one position, and the table points
/// those finishes earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionTally {
    pub position: i32,
    pub count: u32,
    pub points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Sorted by position
    pub positions: Vec<PositionTally>,
    pub matchup_wins: u32,
    pub points: i32,
}

impl SessionStats {
    fn collect<'a>(details: impl Iterator<Item = &'a DetailEntry>) -> Self {
        let mut tallies: BTreeMap<i32, PositionTally> = BTreeMap::new();
        let mut stats = Self::default();

        for detail in details {
            let tally = tallies.entry(detail.position).or_insert(PositionTally {
                position: detail.position,
                count: 0,
                points: 0,
            });
            tally.count += 1;
            tally.points = tally.points.saturating_add(detail.breakdown.base_points);

            if detail.breakdown.teammate_points > 0 {
                stats.matchup_wins += 1;
            }
            stats.points = stats.points.saturating_add(detail.breakdown.total);
        }

        stats.positions = tallies.into_values().collect();
        stats
    }

    /// Positions that earned table points. Finishes outside the points are
    /// left out of summaries.
    pub fn scoring_positions(&self) -> impl Iterator<Item = &PositionTally> {
        self.positions.iter().filter(|t| t.points != 0)
    }
}

/// Season statistics for one driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedStats {
    pub race: SessionStats,
    pub qualifying: SessionStats,
    pub sprint: SessionStats,
    pub sprint_qualifying: SessionStats,
    pub dnf_count: u32,
    pub dnf_points: i32,
    pub positions_gained: i32,
    pub positions_gained_points: i32,
    pub sprint_positions_gained: i32,
    pub sprint_positions_gained_points: i32,
    pub fastest_laps: u32,
}

impl DetailedStats {
    pub fn collect(points: &DriverPoints) -> Self {
        let mut stats = Self {
            race: SessionStats::collect(points.details_for(SessionKind::Race)),
            qualifying: SessionStats::collect(points.details_for(SessionKind::Qualifying)),
            sprint: SessionStats::collect(points.details_for(SessionKind::Sprint)),
            sprint_qualifying: SessionStats::collect(
                points.details_for(SessionKind::SprintQualifying),
            ),
            ..Default::default()
        };

        for detail in points.details_for(SessionKind::Race) {
            let breakdown = &detail.breakdown;
            if breakdown.dnf_penalty < 0 {
                stats.dnf_count += 1;
                stats.dnf_points = stats.dnf_points.saturating_add(breakdown.dnf_penalty);
            }
            if breakdown.positions_gained > 0 {
                stats.positions_gained =
                    stats.positions_gained.saturating_add(breakdown.positions_gained);
                stats.positions_gained_points = stats
                    .positions_gained_points
                    .saturating_add(breakdown.position_gain_points);
            }
            if breakdown.fastest_lap_points > 0 {
                stats.fastest_laps += 1;
            }
        }

        for detail in points.details_for(SessionKind::Sprint) {
            if detail.breakdown.positions_gained > 0 {
                let breakdown = &detail.breakdown;
                stats.sprint_positions_gained = stats
                    .sprint_positions_gained
                    .saturating_add(breakdown.positions_gained);
                stats.sprint_positions_gained_points = stats
                    .sprint_positions_gained_points
                    .saturating_add(breakdown.position_gain_points);
            }
        }

        stats
    }

    pub fn session(&self, session: SessionKind) -> &SessionStats {
        match session {
            SessionKind::Race => &self.race,
            SessionKind::Qualifying => &self.qualifying,
            SessionKind::Sprint => &self.sprint,
            SessionKind::SprintQualifying => &self.sprint_qualifying,
        }
    }
}
