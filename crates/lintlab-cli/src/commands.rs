//! Command implementations for the three scenario modes.

use crate::output;
use anyhow::Result;
use lintlab_core::{fixture, preview, ChangeSet, LabConfig, Scenario, Verifier, VerifyOutcome};
use std::path::Path;

/// Matches shown in a verification summary before truncating.
const MAX_EXAMPLES: usize = 20;

/// Plant the scenario's synthetic issue and report what changed.
pub fn create(scenario: &Scenario, config: &LabConfig, target_root: &Path) -> Result<()> {
    let changes = fixture::create(scenario, config, target_root)?;
    report_changes(scenario, &changes)?;
    if changes.is_empty() {
        output::info(format!("'{}' already planted, nothing to do", scenario.key));
    } else {
        output::success(format!(
            "planted '{}' ({} path(s) touched)",
            scenario.key,
            changes.len()
        ));
    }
    Ok(())
}

/// Remove everything the scenario planted and report what changed.
pub fn cleanup(scenario: &Scenario, config: &LabConfig, target_root: &Path) -> Result<()> {
    let changes = fixture::cleanup(scenario, config, target_root)?;
    report_changes(scenario, &changes)?;
    if changes.is_empty() {
        output::info(format!("'{}' already clean, nothing to do", scenario.key));
    } else {
        output::success(format!(
            "cleaned up '{}' ({} path(s) touched)",
            scenario.key,
            changes.len()
        ));
    }
    Ok(())
}

/// Run the analyzer and check it reports the planted issue. Returns the
/// process exit code.
pub fn verify(scenario: &Scenario, config: &LabConfig, target_root: &Path) -> Result<i32> {
    let outcome = match Verifier::new(config).verify(scenario, target_root) {
        Ok(outcome) => outcome,
        Err(e) if e.is_tool_output() => {
            output::error(e);
            return Ok(1);
        }
        Err(e) => return Err(e.into()),
    };

    output::header("Verification");
    output::kv("expected", scenario.expected_issue);
    output::kv("include", scenario.include_filter);
    match &outcome {
        VerifyOutcome::Detected { matches } => {
            output::kv("matches", matches.len());
            for m in matches.iter().take(MAX_EXAMPLES) {
                output::list_item(m);
            }
            if matches.len() > MAX_EXAMPLES {
                output::info(format!("... and {} more", matches.len() - MAX_EXAMPLES));
            }
            output::success(format!("'{}' detected", scenario.expected_issue));
        }
        VerifyOutcome::ToleratedMiss => {
            output::kv("matches", 0);
            output::warning(format!(
                "'{}' not reported; detection of this category is analyzer-version-sensitive",
                scenario.expected_issue
            ));
        }
        VerifyOutcome::Miss => {
            output::kv("matches", 0);
            output::error(format!("'{}' was not reported", scenario.expected_issue));
        }
    }
    Ok(outcome.exit_code())
}

/// Print every touched path with a windowed excerpt centered on the
/// scenario's marker (or the file head when the marker is absent).
fn report_changes(scenario: &Scenario, changes: &ChangeSet) -> Result<()> {
    if changes.is_empty() {
        return Ok(());
    }
    output::header("Changed files");
    let needle = scenario.preview_needle();
    for path in changes.iter() {
        let excerpt = preview::preview_file(path, &needle)?;
        output::changed_file(path.display(), excerpt.as_ref());
    }
    Ok(())
}
