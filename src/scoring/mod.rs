//! Fantasy points scoring.
//!
//! - `rules`: points tables and the per-result scoring rules
//! - `matchup`: the teammate head-to-head bonus
//! - `breakdown`: itemized points per result and per driver
//! - `standings`: driver and fantasy team rankings
//! - `stats`: season summaries for a driver

pub mod breakdown;
pub mod matchup;
pub mod rules;
pub mod standings;
pub mod stats;

pub use breakdown::{aggregate, score_result, DetailEntry, DriverPoints, PointsBreakdown};
pub use matchup::{teammate_bonus, Matchup, TEAMMATE_BONUS};
pub use standings::{
    compute_standings, compute_standings_from, DriverStanding, MemberPoints, Standings,
    TeamStanding,
};
pub use stats::{DetailedStats, PositionTally, SessionStats};
