//! Validate command implementation

use std::path::PathBuf;

use crate::{
    league::validation::{validate, DataIssue},
    Result,
};

use super::common::CommandContext;

/// Handle the validate command. Returns the issues found so the caller can
/// set the exit status.
pub fn handle_validate(data_dir: Option<PathBuf>) -> Result<Vec<DataIssue>> {
    let ctx = CommandContext::load(data_dir)?;
    let issues = validate(&ctx.snapshot);

    print!("{}", render_issues(&issues));
    Ok(issues)
}

pub fn render_issues(issues: &[DataIssue]) -> String {
    if issues.is_empty() {
        return "✓ No data issues found\n".to_string();
    }

    let mut out = format!("Found {} data issue(s):\n", issues.len());
    for issue in issues {
        out.push_str(&format!("  - {}\n", issue));
    }
    out
}
