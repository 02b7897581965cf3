//! Clean duplicates command implementation
//!
//! Rewrites the session result files so each (race, driver) pair appears at
//! most once per session, keeping the first occurrence. Records are copied
//! through as raw JSON so fields this crate does not model survive the
//! rewrite. The original file is kept next to it with a `.bak` suffix.

use anyhow::Context;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{
    cli::types::{DriverId, RaceId, ResultId, SessionKind},
    core::files::{try_read_to_string, write_string},
    league::{types::SessionEntry, validation::duplicate_indices},
};

use super::resolve_data_dir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedResult {
    pub result_id: Option<ResultId>,
    pub race_id: RaceId,
    pub driver_id: DriverId,
}

/// Outcome of cleaning one session file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCleanup {
    pub session: SessionKind,
    pub path: PathBuf,
    pub entries: usize,
    pub removed: Vec<RemovedResult>,
    /// Set when the file was rewritten
    pub backup: Option<PathBuf>,
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Remove duplicate results from one session file. With `dry_run` the
/// duplicates are only reported.
pub fn clean_session_file(
    data_dir: &Path,
    session: SessionKind,
    dry_run: bool,
) -> anyhow::Result<FileCleanup> {
    let path = data_dir.join(session.data_file());
    let mut cleanup = FileCleanup {
        session,
        path: path.clone(),
        entries: 0,
        removed: Vec::new(),
        backup: None,
    };

    let text = try_read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        tracing::debug!(path = %path.display(), "no result file to clean");
        return Ok(cleanup);
    };

    let records: Vec<Value> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let entries: Vec<SessionEntry> = serde_json::from_str(&text)
        .with_context(|| format!("Result records in {} are malformed", path.display()))?;
    cleanup.entries = entries.len();

    let duplicates = duplicate_indices(&entries);
    cleanup.removed = duplicates
        .iter()
        .map(|&index| RemovedResult {
            result_id: entries[index].id,
            race_id: entries[index].race_id,
            driver_id: entries[index].driver_id,
        })
        .collect();

    if duplicates.is_empty() || dry_run {
        return Ok(cleanup);
    }

    let kept: Vec<&Value> = records
        .iter()
        .enumerate()
        .filter(|(index, _)| !duplicates.contains(index))
        .map(|(_, record)| record)
        .collect();

    let backup = backup_path(&path);
    write_string(&backup, &text)
        .with_context(|| format!("Failed to write backup {}", backup.display()))?;
    write_string(&path, &serde_json::to_string_pretty(&kept)?)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        removed = cleanup.removed.len(),
        "removed duplicate results"
    );
    cleanup.backup = Some(backup);
    Ok(cleanup)
}

/// Handle the clean-duplicates command
pub fn handle_clean_duplicates(data_dir: Option<PathBuf>, dry_run: bool) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir(data_dir)?;
    let mut total_removed = 0;

    for session in SessionKind::ALL {
        let cleanup = clean_session_file(&data_dir, session, dry_run)?;
        let file = session.data_file();

        println!("Found {} entries in {}", cleanup.entries, file);
        for removed in &cleanup.removed {
            let result_id = removed
                .result_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  Duplicate: race {}, driver {}, result {}",
                removed.race_id, removed.driver_id, result_id
            );
        }

        if cleanup.removed.is_empty() {
            println!("No duplicates found in {}", file);
        } else if let Some(backup) = &cleanup.backup {
            println!("Created backup at {}", backup.display());
            println!(
                "Removed {} duplicates from {}, {} entries remain",
                cleanup.removed.len(),
                file,
                cleanup.entries - cleanup.removed.len()
            );
        } else {
            println!(
                "Would remove {} duplicates from {}",
                cleanup.removed.len(),
                file
            );
        }
        total_removed += cleanup.removed.len();
    }

    if dry_run {
        println!("Dry run: {} duplicates found, no files changed", total_removed);
    } else {
        println!("✓ Removed {} duplicates in total", total_removed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn write_results(dir: &Path, session: SessionKind, value: Value) {
        fs::write(
            dir.join(session.data_file()),
            serde_json::to_string_pretty(&value).unwrap(),
        )
        .unwrap();
    }

    fn race_results() -> Value {
        json!([
            {"id": 1, "race_id": 1, "driver_id": 4, "position": 1, "fastest_lap": true, "finished": true, "fantasy_points": 26},
            {"id": 2, "race_id": 1, "driver_id": 81, "position": 2, "fastest_lap": false, "finished": true},
            {"id": 3, "race_id": 1, "driver_id": 4, "position": 3, "fastest_lap": false, "finished": true},
            {"id": 4, "race_id": 2, "driver_id": 4, "position": 5, "fastest_lap": false, "finished": true}
        ])
    }

    #[test]
    fn test_removes_later_duplicates_and_keeps_unknown_fields() {
        let dir = tempdir().unwrap();
        write_results(dir.path(), SessionKind::Race, race_results());

        let cleanup = clean_session_file(dir.path(), SessionKind::Race, false).unwrap();
        assert_eq!(cleanup.entries, 4);
        assert_eq!(
            cleanup.removed,
            vec![RemovedResult {
                result_id: Some(ResultId::new(3)),
                race_id: RaceId::new(1),
                driver_id: DriverId::new(4),
            }]
        );

        let path = dir.path().join("race_results.json");
        let text = fs::read_to_string(&path).unwrap();
        let rewritten: Value = serde_json::from_str(&text).unwrap();
        let ids: Vec<u64> = rewritten
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert_eq!(rewritten[0]["fantasy_points"], 26);
        assert!(text.starts_with("[\n  {\n    \""));

        let backup = cleanup.backup.unwrap();
        assert_eq!(backup, dir.path().join("race_results.json.bak"));
        let original: Value = serde_json::from_str(&fs::read_to_string(backup).unwrap()).unwrap();
        assert_eq!(original, race_results());
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        write_results(dir.path(), SessionKind::Race, race_results());
        let before = fs::read_to_string(dir.path().join("race_results.json")).unwrap();

        let cleanup = clean_session_file(dir.path(), SessionKind::Race, true).unwrap();
        assert_eq!(cleanup.removed.len(), 1);
        assert!(cleanup.backup.is_none());

        let after = fs::read_to_string(dir.path().join("race_results.json")).unwrap();
        assert_eq!(before, after);
        assert!(!dir.path().join("race_results.json.bak").exists());
    }

    #[test]
    fn test_clean_file_is_not_rewritten() {
        let dir = tempdir().unwrap();
        write_results(
            dir.path(),
            SessionKind::Qualifying,
            json!([{"id": 1, "race_id": 1, "driver_id": 4, "position": 1}]),
        );

        let cleanup = clean_session_file(dir.path(), SessionKind::Qualifying, false).unwrap();
        assert!(cleanup.removed.is_empty());
        assert!(cleanup.backup.is_none());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let cleanup = clean_session_file(dir.path(), SessionKind::Sprint, false).unwrap();
        assert_eq!(cleanup.entries, 0);
        assert!(cleanup.removed.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("race_results.json");
        fs::write(&path, b"\xff\xfe").unwrap();

        let err = clean_session_file(dir.path(), SessionKind::Race, false).unwrap_err();
        assert!(err.to_string().contains("race_results.json"));
        assert_eq!(fs::read(&path).unwrap(), b"\xff\xfe");
        assert!(!dir.path().join("race_results.json.bak").exists());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sprint_results.json"), "{not json").unwrap();

        let err = clean_session_file(dir.path(), SessionKind::Sprint, false).unwrap_err();
        assert!(err.to_string().contains("sprint_results.json"));
    }

    #[test]
    fn test_handle_clean_duplicates_all_sessions() {
        let dir = tempdir().unwrap();
        write_results(dir.path(), SessionKind::Race, race_results());
        write_results(
            dir.path(),
            SessionKind::SprintQualifying,
            json!([
                {"id": 1, "race_id": 3, "driver_id": 16, "position": 2},
                {"id": 2, "race_id": 3, "driver_id": 16, "position": 2}
            ]),
        );

        handle_clean_duplicates(Some(dir.path().to_path_buf()), false).unwrap();

        let sq: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("sprint_qualifying_results.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sq.as_array().unwrap().len(), 1);
        let race: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("race_results.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(race.as_array().unwrap().len(), 3);
    }
}
