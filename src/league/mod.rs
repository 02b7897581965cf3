//! League data: record types, the loaded snapshot and its consistency checks.

pub mod snapshot;
pub mod types;
pub mod validation;

pub use snapshot::LeagueSnapshot;
pub use types::{
    Driver, Placement, Race, RaceResult, SessionEntry, SessionResult, SessionResults, Team,
};
pub use validation::{dedupe_results, duplicate_indices, validate, DataIssue};
