//! Session types of a Formula 1 race weekend.

use crate::error::FantasyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four scored sessions of a race weekend.
///
/// Qualifying and sprint qualifying share a points table; race and sprint
/// each have their own. Sprint sessions only exist on sprint weekends.
///
/// # Examples
///
/// ```rust
/// use f1_fantasy::SessionKind;
///
/// let kind: SessionKind = "sprint-qualifying".parse().unwrap();
/// assert_eq!(kind, SessionKind::SprintQualifying);
/// assert_eq!(kind.to_string(), "Sprint Qualifying");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionKind {
    Race,
    Qualifying,
    Sprint,
    SprintQualifying,
}

impl SessionKind {
    /// All session kinds in the order breakdowns list them.
    pub const ALL: [SessionKind; 4] = [
        SessionKind::Race,
        SessionKind::Qualifying,
        SessionKind::Sprint,
        SessionKind::SprintQualifying,
    ];

    /// Name of the JSON file holding this session's results.
    pub fn data_file(&self) -> &'static str {
        match self {
            SessionKind::Race => "race_results.json",
            SessionKind::Qualifying => "qualifying_results.json",
            SessionKind::Sprint => "sprint_results.json",
            SessionKind::SprintQualifying => "sprint_qualifying_results.json",
        }
    }

    /// Whether this session only happens on sprint weekends.
    pub fn is_sprint_session(&self) -> bool {
        matches!(self, SessionKind::Sprint | SessionKind::SprintQualifying)
    }

    /// The session whose grid a driver's places gained are measured against.
    pub fn reference_session(&self) -> Option<SessionKind> {
        match self {
            SessionKind::Race => Some(SessionKind::Qualifying),
            SessionKind::Sprint => Some(SessionKind::SprintQualifying),
            SessionKind::Qualifying | SessionKind::SprintQualifying => None,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionKind::Race => "Race",
            SessionKind::Qualifying => "Qualifying",
            SessionKind::Sprint => "Sprint",
            SessionKind::SprintQualifying => "Sprint Qualifying",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SessionKind {
    type Err = FantasyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "race" | "r" => Ok(SessionKind::Race),
            "qualifying" | "quali" | "q" => Ok(SessionKind::Qualifying),
            "sprint" | "s" => Ok(SessionKind::Sprint),
            "sprint-qualifying" | "sprint-quali" | "sq" => Ok(SessionKind::SprintQualifying),
            _ => Err(FantasyError::InvalidSession {
                session: s.to_string(),
            }),
        }
    }
}
