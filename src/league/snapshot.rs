//! Immutable league snapshot and its loader.
//!
//! A snapshot is everything the scoring core reads: drivers, fantasy teams,
//! races and the four session result collections. It is loaded once from the
//! JSON files the league backend keeps in its data directory and never
//! mutated afterwards; fresher data means loading a new snapshot.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use super::types::{Driver, Race, SessionResults, Team};
use crate::cli::types::{DriverId, RaceId, SessionKind};
use crate::core::files::try_read_to_string;
use crate::error::{FantasyError, Result};

pub const DRIVERS_FILE: &str = "drivers.json";
pub const TEAMS_FILE: &str = "teams.json";
pub const RACES_FILE: &str = "races.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LeagueSnapshot {
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub results: SessionResults,
}

impl LeagueSnapshot {
    pub fn new(
        drivers: Vec<Driver>,
        teams: Vec<Team>,
        races: Vec<Race>,
        results: SessionResults,
    ) -> Self {
        Self {
            drivers,
            teams,
            races,
            results,
        }
    }

    /// Load every collection from `data_dir`. Missing files are empty collections.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let snapshot = Self {
            drivers: read_collection(data_dir, DRIVERS_FILE)?,
            teams: read_collection(data_dir, TEAMS_FILE)?,
            races: read_collection(data_dir, RACES_FILE)?,
            results: SessionResults {
                race: read_collection(data_dir, SessionKind::Race.data_file())?,
                qualifying: read_collection(data_dir, SessionKind::Qualifying.data_file())?,
                sprint: read_collection(data_dir, SessionKind::Sprint.data_file())?,
                sprint_qualifying: read_collection(
                    data_dir,
                    SessionKind::SprintQualifying.data_file(),
                )?,
            },
        };

        tracing::info!(
            data_dir = %data_dir.display(),
            drivers = snapshot.drivers.len(),
            teams = snapshot.teams.len(),
            races = snapshot.races.len(),
            results = snapshot.results.len(),
            "loaded league snapshot"
        );

        Ok(snapshot)
    }

    /// Content fingerprint; equal snapshots always share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn driver(&self, driver_id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == driver_id)
    }

    pub fn race(&self, race_id: RaceId) -> Option<&Race> {
        self.races.iter().find(|r| r.id == race_id)
    }

    /// The first fantasy team whose roster holds this driver.
    pub fn team_of(&self, driver_id: DriverId) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_driver(driver_id))
    }

    /// Drivers on no fantasy team's roster, in input order.
    pub fn free_agents(&self) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|d| self.team_of(d.id).is_none())
            .collect()
    }

    /// Find a driver by numeric ID or by a case-insensitive name fragment.
    ///
    /// An exact name match wins over fragment matches; several fragment
    /// matches without an exact one are ambiguous.
    pub fn find_driver(&self, query: &str) -> Result<&Driver> {
        let query = query.trim();

        if let Ok(driver_id) = query.parse::<DriverId>() {
            return self
                .driver(driver_id)
                .ok_or_else(|| FantasyError::DriverNotFound {
                    query: query.to_string(),
                });
        }

        let needle = query.to_lowercase();
        let matches: Vec<&Driver> = self
            .drivers
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .collect();

        match matches.as_slice() {
            [] => Err(FantasyError::DriverNotFound {
                query: query.to_string(),
            }),
            [driver] => Ok(*driver),
            many => many
                .iter()
                .find(|d| d.name.to_lowercase() == needle)
                .copied()
                .ok_or_else(|| FantasyError::AmbiguousDriver {
                    query: query.to_string(),
                    matches: many
                        .iter()
                        .map(|d| d.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                }),
        }
    }
}

fn read_collection<T: DeserializeOwned>(data_dir: &Path, file_name: &str) -> Result<Vec<T>> {
    let path = data_dir.join(file_name);

    let Some(contents) = try_read_to_string(&path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to read data file");
        FantasyError::Io(e)
    })?
    else {
        tracing::debug!(path = %path.display(), "data file missing, using empty collection");
        return Ok(Vec::new());
    };

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&contents).map_err(|source| FantasyError::DataFile {
        path: path.display().to_string(),
        source,
    })
}
