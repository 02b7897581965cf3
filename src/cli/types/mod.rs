//! Type-safe wrappers and enums for league data.

pub mod filters;
pub mod ids;
pub mod session;

pub use filters::StandingsView;
pub use ids::{DriverId, RaceId, ResultId, TeamId};
pub use session::SessionKind;
