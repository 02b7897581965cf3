//! F1 Fantasy League Scoring Library
//!
//! Computes fantasy points for Formula 1 drivers from raw session results and
//! rolls them up into driver and fantasy team standings.
//!
//! ## Features
//!
//! - **Scoring Rules**: Race, sprint and qualifying points tables, fastest lap,
//!   DNF penalty, places gained and the teammate head-to-head bonus
//! - **Auditable Breakdowns**: Every scored result is kept as a detail entry;
//!   session subtotals are always derived from those entries
//! - **Standings**: Driver and fantasy team rankings, memoized per snapshot
//! - **Data Hygiene**: Validation report and duplicate result cleanup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use f1_fantasy::{scoring::compute_standings, LeagueSnapshot};
//! use std::path::Path;
//!
//! # fn example() -> f1_fantasy::Result<()> {
//! let snapshot = LeagueSnapshot::load(Path::new("/srv/f1-fantasy/data"))?;
//! let standings = compute_standings(&snapshot);
//!
//! for (rank, team) in standings.teams.iter().enumerate() {
//!     println!("{}. {} {}", rank + 1, team.team.name, team.total_points);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at the league's data directory once instead of passing
//! `--data-dir` to every command:
//! ```bash
//! export F1_FANTASY_DATA_DIR=/srv/f1-fantasy/data
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod league;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{DriverId, RaceId, ResultId, SessionKind, TeamId};
pub use commands::DATA_DIR_ENV_VAR;
pub use error::{FantasyError, Result};
pub use league::LeagueSnapshot;
