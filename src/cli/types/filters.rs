//! Filter types for CLI commands.

use std::fmt;

/// Which ranking the `standings` command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StandingsView {
    /// Fantasy team standings only
    Teams,
    /// Driver standings only
    Drivers,
    /// Both rankings, teams first
    #[default]
    All,
}

impl StandingsView {
    pub fn shows_teams(&self) -> bool {
        matches!(self, StandingsView::Teams | StandingsView::All)
    }

    pub fn shows_drivers(&self) -> bool {
        matches!(self, StandingsView::Drivers | StandingsView::All)
    }
}

impl fmt::Display for StandingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StandingsView::Teams => "teams",
            StandingsView::Drivers => "drivers",
            StandingsView::All => "all",
        };
        write!(f, "{}", s)
    }
}
