//! Driver breakdown command implementation

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{
    cli::types::{SessionKind, TeamId},
    league::types::Driver,
    scoring::{
        breakdown::{DetailEntry, DriverPoints},
        matchup::TEAMMATE_BONUS,
        stats::{DetailedStats, SessionStats},
    },
    Result,
};

use super::common::{counted, signed_points, CommandContext};

/// Everything printed for one driver
#[derive(Debug, Serialize)]
pub struct DriverReport<'a> {
    pub driver: &'a Driver,
    pub fantasy_team: Option<TeamId>,
    pub race: i32,
    pub qualifying: i32,
    pub sprint: i32,
    pub sprint_qualifying: i32,
    pub total: i32,
    pub stats: DetailedStats,
    /// Detail entries, limited to one session when a filter is given
    pub details: Vec<&'a DetailEntry>,
}

impl<'a> DriverReport<'a> {
    pub fn new(
        driver: &'a Driver,
        fantasy_team: Option<TeamId>,
        points: &'a DriverPoints,
        session: Option<SessionKind>,
    ) -> Self {
        Self {
            driver,
            fantasy_team,
            race: points.race,
            qualifying: points.qualifying,
            sprint: points.sprint,
            sprint_qualifying: points.sprint_qualifying,
            total: points.total(),
            stats: DetailedStats::collect(points),
            details: points
                .details
                .iter()
                .filter(|d| session.map_or(true, |s| d.session == s))
                .collect(),
        }
    }
}

/// Handle the driver command
pub fn handle_driver_points(
    data_dir: Option<PathBuf>,
    query: &str,
    session: Option<SessionKind>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::load(data_dir)?;
    let driver = ctx.snapshot.find_driver(query)?;
    let standings = ctx.standings();

    let Some(standing) = standings.driver(driver.id) else {
        return Err(crate::FantasyError::DriverNotFound {
            query: query.to_string(),
        });
    };

    let report = DriverReport::new(driver, standing.fantasy_team, &standing.points, session);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_driver_report(&ctx, &report));
    }

    Ok(())
}

fn render_positions(out: &mut String, session: &SessionStats) {
    for tally in session.scoring_positions() {
        let _ = writeln!(
            out,
            "  {} P{} - {} points",
            tally.count,
            tally.position,
            signed_points(tally.points)
        );
    }
}

fn render_matchups(out: &mut String, session: &SessionStats, label: &str) {
    if session.matchup_wins > 0 {
        let wins = i32::try_from(session.matchup_wins).unwrap_or(i32::MAX);
        let _ = writeln!(
            out,
            "  {} - {} points",
            counted(session.matchup_wins, &format!("{} matchup win", label)),
            signed_points(wins.saturating_mul(TEAMMATE_BONUS))
        );
    }
}

/// Season summary in the order race, qualifying, sprint, sprint qualifying.
/// Positions that earned no table points are left out.
pub fn render_summary(stats: &DetailedStats) -> String {
    let mut out = String::new();

    let race = &stats.race;
    if race.scoring_positions().next().is_some()
        || race.matchup_wins > 0
        || stats.positions_gained > 0
        || stats.dnf_count > 0
        || stats.fastest_laps > 0
    {
        out.push_str("Race:\n");
        render_positions(&mut out, race);
        render_matchups(&mut out, race, "race");
        if stats.positions_gained > 0 && stats.positions_gained_points > 0 {
            let _ = writeln!(
                out,
                "  {} positions gained - {} points",
                stats.positions_gained,
                signed_points(stats.positions_gained_points)
            );
        }
        if stats.dnf_count > 0 {
            let _ = writeln!(
                out,
                "  {} - {} points",
                counted(stats.dnf_count, "DNF"),
                stats.dnf_points
            );
        }
        if stats.fastest_laps > 0 {
            let _ = writeln!(
                out,
                "  {} - +{} points",
                counted(stats.fastest_laps, "fastest lap"),
                stats.fastest_laps
            );
        }
    }

    let qualifying = &stats.qualifying;
    if qualifying.scoring_positions().next().is_some() || qualifying.matchup_wins > 0 {
        out.push_str("Qualifying:\n");
        render_positions(&mut out, qualifying);
        render_matchups(&mut out, qualifying, "qualifying");
    }

    let sprint = &stats.sprint;
    if sprint.scoring_positions().next().is_some()
        || sprint.matchup_wins > 0
        || stats.sprint_positions_gained > 0
    {
        out.push_str("Sprint Race:\n");
        render_positions(&mut out, sprint);
        render_matchups(&mut out, sprint, "sprint");
        if stats.sprint_positions_gained > 0 && stats.sprint_positions_gained_points > 0 {
            let _ = writeln!(
                out,
                "  {} positions gained - {} points",
                stats.sprint_positions_gained,
                signed_points(stats.sprint_positions_gained_points)
            );
        }
    }

    let sprint_qualifying = &stats.sprint_qualifying;
    if sprint_qualifying.scoring_positions().next().is_some()
        || sprint_qualifying.matchup_wins > 0
    {
        out.push_str("Sprint Qualifying:\n");
        render_positions(&mut out, sprint_qualifying);
        render_matchups(&mut out, sprint_qualifying, "sprint qualifying");
    }

    out
}

pub fn render_detail(detail: &DetailEntry) -> String {
    let b = &detail.breakdown;
    let mut parts = vec![format!("base {}", b.base_points)];
    if b.fastest_lap_points != 0 {
        parts.push(format!("fastest lap {}", signed_points(b.fastest_lap_points)));
    }
    if b.dnf_penalty != 0 {
        parts.push(format!("DNF {}", b.dnf_penalty));
    }
    if b.position_gain_points != 0 {
        parts.push(format!("gained {}", signed_points(b.position_gain_points)));
    }
    if b.teammate_points != 0 {
        parts.push(format!("teammate {}", signed_points(b.teammate_points)));
    }

    format!(
        "{:<18} {:<24} P{:<3} {} = {}",
        detail.session.to_string(),
        detail.race_name,
        detail.position,
        parts.join(", "),
        b.total
    )
}

pub fn render_driver_report(ctx: &CommandContext, report: &DriverReport<'_>) -> String {
    let mut out = String::new();
    let number = report
        .driver
        .number
        .map(|n| format!("#{}, ", n))
        .unwrap_or_default();

    let _ = writeln!(
        out,
        "{} ({}{}) - {}",
        report.driver.name,
        number,
        report.driver.constructor,
        ctx.team_label(report.fantasy_team)
    );
    let _ = writeln!(
        out,
        "Race {} | Qualifying {} | Sprint {} | Sprint Qualifying {}",
        report.race, report.qualifying, report.sprint, report.sprint_qualifying
    );
    out.push('\n');
    out.push_str(&render_summary(&report.stats));
    let _ = writeln!(out, "Total: {} points", report.total);

    if !report.details.is_empty() {
        out.push_str("\nDetails:\n");
        for detail in &report.details {
            let _ = writeln!(out, "  {}", render_detail(detail));
        }
    }

    out
}
