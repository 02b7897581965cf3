//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use f1_fantasy::{
    cli::{Commands, F1Fantasy},
    commands::{
        clean_duplicates::handle_clean_duplicates, driver_points::handle_driver_points,
        free_agents::handle_free_agents, standings::handle_standings, validate::handle_validate,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = F1Fantasy::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match app.command {
        Commands::Standings { data, view, json } => handle_standings(data.data_dir, view, json)?,

        Commands::Driver {
            data,
            driver,
            session,
            json,
        } => handle_driver_points(data.data_dir, &driver, session, json)?,

        Commands::FreeAgents { data, json } => handle_free_agents(data.data_dir, json)?,

        Commands::Validate { data } => {
            let issues = handle_validate(data.data_dir)?;
            if !issues.is_empty() {
                anyhow::bail!("{} data issue(s) found", issues.len());
            }
        }

        Commands::CleanDuplicates { data, dry_run } => {
            handle_clean_duplicates(data.data_dir, dry_run)?
        }
    }

    Ok(())
}
