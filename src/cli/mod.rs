//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{SessionKind, StandingsView};

/// Data location arguments shared between commands
#[derive(Debug, Args)]
pub struct DataArgs {
    /// Directory holding the league's JSON data files (or set `F1_FANTASY_DATA_DIR`).
    #[clap(long, short = 'd')]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "f1-fantasy", about = "F1 fantasy league scoring CLI")]
pub struct F1Fantasy {
    /// Log level used when `RUST_LOG` is not set (trace, debug, info, warn, error).
    #[clap(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show fantasy team and driver standings.
    ///
    /// Points are recomputed from the raw session results every time;
    /// cached `fantasy_points` values in the data files are ignored.
    Standings {
        #[clap(flatten)]
        data: DataArgs,

        /// Which ranking to print.
        #[clap(long, value_enum, default_value_t = StandingsView::All)]
        view: StandingsView,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one driver's itemized points breakdown.
    Driver {
        #[clap(flatten)]
        data: DataArgs,

        /// Driver ID or (part of) the driver's name.
        #[clap(long, short = 'n')]
        driver: String,

        /// Only list detail entries for this session: race, qualifying, sprint, sprint-qualifying.
        #[clap(long, short = 's', value_parser = clap::value_parser!(SessionKind))]
        session: Option<SessionKind>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List drivers that are not on any fantasy team's roster.
    FreeAgents {
        #[clap(flatten)]
        data: DataArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Report data-quality issues in the league data.
    Validate {
        #[clap(flatten)]
        data: DataArgs,
    },

    /// Remove duplicate results (same race and driver) from the result files.
    CleanDuplicates {
        #[clap(flatten)]
        data: DataArgs,

        /// Report duplicates without rewriting any file.
        #[clap(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standings_defaults() {
        let cli = F1Fantasy::parse_from(["f1-fantasy", "standings"]);
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Commands::Standings { data, view, json } => {
                assert!(data.data_dir.is_none());
                assert_eq!(view, StandingsView::All);
                assert!(!json);
            }
            other => panic!("Expected standings command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_driver_with_session() {
        let cli = F1Fantasy::parse_from([
            "f1-fantasy",
            "driver",
            "--driver",
            "Norris",
            "--session",
            "sprint-qualifying",
            "--data-dir",
            "/tmp/league",
            "--json",
        ]);
        match cli.command {
            Commands::Driver {
                data,
                driver,
                session,
                json,
            } => {
                assert_eq!(data.data_dir, Some(PathBuf::from("/tmp/league")));
                assert_eq!(driver, "Norris");
                assert_eq!(session, Some(SessionKind::SprintQualifying));
                assert!(json);
            }
            other => panic!("Expected driver command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_clean_duplicates_dry_run() {
        let cli = F1Fantasy::parse_from(["f1-fantasy", "clean-duplicates", "--dry-run"]);
        assert!(matches!(
            cli.command,
            Commands::CleanDuplicates { dry_run: true, .. }
        ));
    }

    #[test]
    fn test_rejects_unknown_session() {
        let result = F1Fantasy::try_parse_from([
            "f1-fantasy",
            "driver",
            "--driver",
            "1",
            "--session",
            "practice",
        ]);
        assert!(result.is_err());
    }
}
