//! Free agents command implementation

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::{league::types::Driver, scoring::standings::Standings, Result};

use super::common::CommandContext;

#[derive(Debug, Serialize)]
pub struct FreeAgent<'a> {
    pub driver: &'a Driver,
    pub total_points: i32,
}

/// Unrostered drivers in driver list order, with their season points.
pub fn free_agents<'a>(ctx: &'a CommandContext, standings: &Standings) -> Vec<FreeAgent<'a>> {
    ctx.snapshot
        .free_agents()
        .into_iter()
        .map(|driver| FreeAgent {
            driver,
            total_points: standings
                .driver(driver.id)
                .map(|s| s.total_points)
                .unwrap_or(0),
        })
        .collect()
}

/// Handle the free agents command
pub fn handle_free_agents(data_dir: Option<PathBuf>, as_json: bool) -> Result<()> {
    let ctx = CommandContext::load(data_dir)?;
    let standings = ctx.standings();
    let agents = free_agents(&ctx, &standings);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&agents)?);
    } else {
        print!("{}", render_free_agents(&agents));
    }

    Ok(())
}

pub fn render_free_agents(agents: &[FreeAgent<'_>]) -> String {
    if agents.is_empty() {
        return "Every driver is on a fantasy team\n".to_string();
    }

    let mut out = String::from("Free Agents\n");
    for agent in agents {
        let status = if agent.driver.is_active { "" } else { " (inactive)" };
        let _ = writeln!(
            out,
            "  {:<24} {:<16} {:>5}{}",
            agent.driver.name, agent.driver.constructor, agent.total_points, status
        );
    }
    out
}
