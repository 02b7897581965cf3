//! Command implementations for the F1 fantasy CLI

pub mod clean_duplicates;
pub mod common;
pub mod driver_points;
pub mod free_agents;
pub mod standings;
pub mod validate;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::core::files::default_data_dir;
use crate::error::{FantasyError, Result};

pub const DATA_DIR_ENV_VAR: &str = "F1_FANTASY_DATA_DIR";

/// Resolve the league data directory: explicit flag, then the
/// `F1_FANTASY_DATA_DIR` environment variable, then the platform data dir.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    data_dir
        .or_else(|| {
            std::env::var(DATA_DIR_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_data_dir)
        .ok_or_else(|| FantasyError::MissingDataDir {
            env_var: DATA_DIR_ENV_VAR.to_string(),
        })
}
