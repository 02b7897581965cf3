//! Standings command implementation

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{
    cli::types::StandingsView,
    scoring::standings::{DriverStanding, Standings, TeamStanding},
    Result,
};

use super::common::CommandContext;

#[derive(Debug, Serialize)]
struct StandingsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    teams: Option<&'a [TeamStanding]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drivers: Option<&'a [DriverStanding]>,
}

/// Handle the standings command
pub fn handle_standings(data_dir: Option<PathBuf>, view: StandingsView, as_json: bool) -> Result<()> {
    let ctx = CommandContext::load(data_dir)?;
    let standings = ctx.standings();

    if as_json {
        println!("{}", standings_json(&standings, view)?);
    } else {
        print!("{}", render_standings(&ctx, &standings, view));
    }

    Ok(())
}

pub fn standings_json(standings: &Standings, view: StandingsView) -> Result<String> {
    let output = StandingsOutput {
        teams: view.shows_teams().then_some(standings.teams.as_slice()),
        drivers: view.shows_drivers().then_some(standings.drivers.as_slice()),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn render_standings(ctx: &CommandContext, standings: &Standings, view: StandingsView) -> String {
    let mut out = String::new();

    if view.shows_teams() {
        out.push_str("Fantasy Team Standings\n");
        if standings.teams.is_empty() {
            out.push_str("  (no teams)\n");
        }
        for (rank, standing) in standings.teams.iter().enumerate() {
            let owner = standing
                .team
                .owner
                .as_deref()
                .map(|o| format!(" ({})", o))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{:>3}. {:<32} {:>5}",
                rank + 1,
                format!("{}{}", standing.team.name, owner),
                standing.total_points
            );
            for member in &standing.members {
                let _ = writeln!(
                    out,
                    "       {:<30} {:>5}",
                    member.driver.name, member.total_points
                );
            }
        }
    }

    if view.shows_teams() && view.shows_drivers() {
        out.push('\n');
    }

    if view.shows_drivers() {
        out.push_str("Driver Standings\n");
        if standings.drivers.is_empty() {
            out.push_str("  (no drivers)\n");
        }
        for (rank, standing) in standings.drivers.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>3}. {:<24} {:<16} {:<20} {:>5}",
                rank + 1,
                standing.driver.name,
                standing.driver.constructor,
                ctx.team_label(standing.fantasy_team),
                standing.total_points
            );
        }
    }

    out
}
