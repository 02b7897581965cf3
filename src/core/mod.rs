//! Core utilities shared by the commands
//!
//! - `cache`: in-memory memoization of computed standings
//! - `files`: data directory and file helpers

pub mod cache;
pub mod files;

pub use cache::{SnapshotKey, StandingsCache};
pub use files::{default_data_dir, try_read_to_string, write_string};
