//! Verification: run the analyzer and check that it reported the
//! planted issue.

use crate::config::LabConfig;
use crate::error::{LabError, Result};
use crate::report::{self, ReportedMatch};
use crate::scenario::Scenario;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Result of checking the analyzer's report against a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The planted issue was reported; scoped matches attached.
    Detected { matches: Vec<ReportedMatch> },
    /// Nothing reported, but this scenario tolerates a miss
    /// (analyzer-version-sensitive category).
    ToleratedMiss,
    /// Nothing reported and the scenario does not tolerate it.
    Miss,
}

impl VerifyOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Miss)
    }

    /// Process exit code this outcome maps to.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Runs the analyzer subprocess and evaluates its report.
#[derive(Debug)]
pub struct Verifier<'a> {
    config: &'a LabConfig,
}

impl<'a> Verifier<'a> {
    pub fn new(config: &'a LabConfig) -> Self {
        Self { config }
    }

    /// Invoke the analyzer for the scenario's category and decide
    /// whether the planted issue shows up, scoped to `target_root`.
    pub fn verify(&self, scenario: &Scenario, target_root: &Path) -> Result<VerifyOutcome> {
        let stdout = self.run_tool(scenario)?;
        let parsed = report::extract_json(&stdout).ok_or_else(|| {
            LabError::tool_output(format!(
                "no JSON object found in {} output ({} bytes)",
                self.config.tool_bin,
                stdout.len()
            ))
        })?;

        let matches = report::collect_matches(scenario, &parsed);
        let matches = report::filter_matches(
            matches,
            scenario.match_scope,
            &self.config.repo_root,
            target_root,
        );
        debug!(scenario = scenario.key, matches = matches.len(), "report evaluated");

        if !matches.is_empty() {
            Ok(VerifyOutcome::Detected { matches })
        } else if scenario.tolerate_miss {
            Ok(VerifyOutcome::ToleratedMiss)
        } else {
            Ok(VerifyOutcome::Miss)
        }
    }

    fn run_tool(&self, scenario: &Scenario) -> Result<String> {
        debug!(
            tool = %self.config.tool_bin,
            include = scenario.include_filter,
            "invoking analyzer"
        );
        let output = Command::new(&self.config.tool_bin)
            .args(["--reporter", "json", "--include", scenario.include_filter, "--no-exit-code"])
            .current_dir(&self.config.repo_root)
            .output()
            .map_err(|e| LabError::tool(format!("{}: {e}", self.config.tool_bin)))?;

        // With --no-exit-code the status only signals an internal tool
        // failure, which still may have printed a usable report; log
        // stderr and let parsing decide.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(status = %output.status, "analyzer exited non-zero: {}", stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
