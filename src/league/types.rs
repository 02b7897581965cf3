use crate::cli::types::{DriverId, RaceId, ResultId, SessionKind, TeamId};
use serde::{Deserialize, Serialize};


fn default_true() -> bool {
    true
}

/// A Formula 1 driver as stored in `drivers.json`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    /// Car number
    #[serde(default)]
    pub number: Option<u32>,
    /// Constructor (real-world team) name; drivers sharing it are teammates
    #[serde(default)]
    pub constructor: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A fantasy team and its roster of drivers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub driver_ids: Vec<DriverId>,
}

impl Team {
    pub fn has_driver(&self, driver_id: DriverId) -> bool {
        self.driver_ids.contains(&driver_id)
    }
}

/// A Grand Prix weekend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    #[serde(default)]
    pub track: String,
    /// ISO date (`YYYY-MM-DD`), kept as text
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub has_sprint: bool,
}

/// Grand Prix classification for one driver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RaceResult {
    #[serde(default)]
    pub id: Option<ResultId>,
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub position: i32,
    #[serde(default)]
    pub fastest_lap: bool,
    #[serde(default = "default_true")]
    pub finished: bool,
}

/// Classification in a qualifying, sprint or sprint qualifying session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SessionEntry {
    #[serde(default)]
    pub id: Option<ResultId>,
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub position: i32,
}

/// Read access shared by every session's result records.
pub trait Placement {
    fn race_id(&self) -> RaceId;
    fn driver_id(&self) -> DriverId;
    fn position(&self) -> i32;
}

impl Placement for RaceResult {
    fn race_id(&self) -> RaceId {
        self.race_id
    }

    fn driver_id(&self) -> DriverId {
        self.driver_id
    }

    fn position(&self) -> i32 {
        self.position
    }
}

impl Placement for SessionEntry {
    fn race_id(&self) -> RaceId {
        self.race_id
    }

    fn driver_id(&self) -> DriverId {
        self.driver_id
    }

    fn position(&self) -> i32 {
        self.position
    }
}

/// One result record tagged with the session it belongs to.
///
/// Only race results carry fastest lap and finished flags; the other
/// sessions are plain classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult<'a> {
    Race(&'a RaceResult),
    Qualifying(&'a SessionEntry),
    Sprint(&'a SessionEntry),
    SprintQualifying(&'a SessionEntry),
}

impl SessionResult<'_> {
    pub fn kind(&self) -> SessionKind {
        match self {
            SessionResult::Race(_) => SessionKind::Race,
            SessionResult::Qualifying(_) => SessionKind::Qualifying,
            SessionResult::Sprint(_) => SessionKind::Sprint,
            SessionResult::SprintQualifying(_) => SessionKind::SprintQualifying,
        }
    }

    pub fn result_id(&self) -> Option<ResultId> {
        match self {
            SessionResult::Race(r) => r.id,
            SessionResult::Qualifying(e)
            | SessionResult::Sprint(e)
            | SessionResult::SprintQualifying(e) => e.id,
        }
    }
}

impl Placement for SessionResult<'_> {
    fn race_id(&self) -> RaceId {
        match self {
            SessionResult::Race(r) => r.race_id,
            SessionResult::Qualifying(e)
            | SessionResult::Sprint(e)
            | SessionResult::SprintQualifying(e) => e.race_id,
        }
    }

    fn driver_id(&self) -> DriverId {
        match self {
            SessionResult::Race(r) => r.driver_id,
            SessionResult::Qualifying(e)
            | SessionResult::Sprint(e)
            | SessionResult::SprintQualifying(e) => e.driver_id,
        }
    }

    fn position(&self) -> i32 {
        match self {
            SessionResult::Race(r) => r.position,
            SessionResult::Qualifying(e)
            | SessionResult::Sprint(e)
            | SessionResult::SprintQualifying(e) => e.position,
        }
    }
}

/// All results of a season, one collection per session
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct SessionResults {
    #[serde(default)]
    pub race: Vec<RaceResult>,
    #[serde(default)]
    pub qualifying: Vec<SessionEntry>,
    #[serde(default)]
    pub sprint: Vec<SessionEntry>,
    #[serde(default)]
    pub sprint_qualifying: Vec<SessionEntry>,
}

impl SessionResults {
    /// Every result, session by session in `SessionKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = SessionResult<'_>> {
        self.race
            .iter()
            .map(SessionResult::Race)
            .chain(self.qualifying.iter().map(SessionResult::Qualifying))
            .chain(self.sprint.iter().map(SessionResult::Sprint))
            .chain(
                self.sprint_qualifying
                    .iter()
                    .map(SessionResult::SprintQualifying),
            )
    }

    /// Results of one session, in input order.
    pub fn session(&self, kind: SessionKind) -> impl Iterator<Item = SessionResult<'_>> {
        self.iter().filter(move |r| r.kind() == kind)
    }

    /// Position of the first result for this driver in this race and session.
    pub fn position_of(
        &self,
        kind: SessionKind,
        race_id: RaceId,
        driver_id: DriverId,
    ) -> Option<i32> {
        self.session(kind)
            .find(|r| r.race_id() == race_id && r.driver_id() == driver_id)
            .map(|r| r.position())
    }

    pub fn len(&self) -> usize {
        self.race.len() + self.qualifying.len() + self.sprint.len() + self.sprint_qualifying.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
