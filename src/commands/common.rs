//! Common utilities and helper functions shared across commands.

use std::path::PathBuf;

use crate::{
    cli::types::TeamId,
    core::cache::StandingsCache,
    league::snapshot::LeagueSnapshot,
    scoring::standings::Standings,
    Result,
};

use super::resolve_data_dir;

/// Label printed for drivers that are not on a fantasy team
pub const FREE_AGENT_LABEL: &str = "FA";

/// Context containing the resources every command needs
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub snapshot: LeagueSnapshot,
    pub cache: StandingsCache,
}

impl CommandContext {
    /// Resolve the data directory and load the league snapshot from it
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), "loading league data");

        let snapshot = LeagueSnapshot::load(&data_dir)?;
        Ok(Self::from_snapshot(data_dir, snapshot))
    }

    pub fn from_snapshot(data_dir: PathBuf, snapshot: LeagueSnapshot) -> Self {
        Self {
            data_dir,
            snapshot,
            cache: StandingsCache::default(),
        }
    }

    pub fn standings(&self) -> Standings {
        self.cache.get_or_compute(&self.snapshot)
    }

    /// Team name for display, or `FA` for a free agent.
    pub fn team_label(&self, team_id: Option<TeamId>) -> String {
        team_id
            .and_then(|id| self.snapshot.teams.iter().find(|t| t.id == id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| FREE_AGENT_LABEL.to_string())
    }
}

/// Points with an explicit sign for positive values: `+12`, `0`, `-5`.
pub fn signed_points(points: i32) -> String {
    if points > 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

/// Pluralize a counted noun: `1 DNF`, `2 DNFs`.
pub fn counted(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
