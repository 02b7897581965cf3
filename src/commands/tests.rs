//! Integration tests for command handlers

use super::*;

#[cfg(test)]
mod command_tests {
    use super::*;
    use crate::cli::types::{SessionKind, StandingsView};
    use crate::commands::{
        driver_points::handle_driver_points, free_agents::handle_free_agents,
        standings::handle_standings, validate::handle_validate,
    };
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn league_dir() -> TempDir {
        let dir = tempdir().unwrap();
        let files = [
            (
                "drivers.json",
                r#"[
                    {"id": 1, "name": "Max Verstappen", "number": 1, "constructor": "Red Bull"},
                    {"id": 22, "name": "Yuki Tsunoda", "number": 22, "constructor": "Red Bull"},
                    {"id": 44, "name": "Lewis Hamilton", "number": 44, "constructor": "Ferrari"}
                ]"#,
            ),
            (
                "teams.json",
                r#"[{"id": 1, "name": "Energy Drinks", "owner": "Alex", "driver_ids": [1, 22]}]"#,
            ),
            (
                "races.json",
                r#"[{"id": 1, "name": "Miami Grand Prix", "track": "Miami", "date": "2025-05-04", "has_sprint": true}]"#,
            ),
            (
                "race_results.json",
                r#"[
                    {"id": 1, "race_id": 1, "driver_id": 1, "position": 4, "fastest_lap": false, "finished": true},
                    {"id": 2, "race_id": 1, "driver_id": 22, "position": 10, "fastest_lap": false, "finished": true}
                ]"#,
            ),
        ];
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    // Kept in a single test so parallel tests never see each other's
    // environment changes.
    #[test]
    fn test_resolve_data_dir_precedence() {
        std::env::remove_var(DATA_DIR_ENV_VAR);

        let explicit = PathBuf::from("/srv/league");
        assert_eq!(resolve_data_dir(Some(explicit.clone())).unwrap(), explicit);

        std::env::set_var(DATA_DIR_ENV_VAR, "/tmp/from-env");
        assert_eq!(
            resolve_data_dir(None).unwrap(),
            PathBuf::from("/tmp/from-env")
        );
        assert_eq!(resolve_data_dir(Some(explicit.clone())).unwrap(), explicit);

        std::env::set_var(DATA_DIR_ENV_VAR, "   ");
        match (resolve_data_dir(None), default_data_dir()) {
            (Ok(path), Some(default)) => assert_eq!(path, default),
            (Err(FantasyError::MissingDataDir { env_var }), None) => {
                assert_eq!(env_var, DATA_DIR_ENV_VAR)
            }
            (other, default) => panic!("unexpected {:?} with default {:?}", other, default),
        }

        std::env::remove_var(DATA_DIR_ENV_VAR);
    }

    #[test]
    fn test_handlers_run_against_data_dir() {
        let dir = league_dir();
        let data_dir = || Some(dir.path().to_path_buf());

        handle_standings(data_dir(), StandingsView::All, false).unwrap();
        handle_standings(data_dir(), StandingsView::Drivers, true).unwrap();
        handle_driver_points(data_dir(), "verstappen", None, false).unwrap();
        handle_driver_points(data_dir(), "22", Some(SessionKind::Race), true).unwrap();
        handle_free_agents(data_dir(), false).unwrap();
    }

    #[test]
    fn test_driver_handler_reports_unknown_driver() {
        let dir = league_dir();
        let result = handle_driver_points(Some(dir.path().to_path_buf()), "Senna", None, false);
        assert!(matches!(result, Err(FantasyError::DriverNotFound { .. })));
    }

    #[test]
    fn test_validate_handler_returns_issues() {
        let dir = league_dir();
        let issues = handle_validate(Some(dir.path().to_path_buf())).unwrap();

        // The only team rosters two drivers.
        assert_eq!(issues.len(), 1);
        assert!(issues[0].to_string().contains("roster has 2 drivers"));
    }

    #[test]
    fn test_handler_reports_broken_data_file() {
        let dir = league_dir();
        fs::write(dir.path().join("teams.json"), "[{\"id\": ").unwrap();

        let result = handle_standings(Some(dir.path().to_path_buf()), StandingsView::All, false);
        match result {
            Err(FantasyError::DataFile { path, .. }) => assert!(path.ends_with("teams.json")),
            other => panic!("Expected DataFile error, got {:?}", other.map(|_| ())),
        }
    }
}
