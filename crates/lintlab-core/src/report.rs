//! Analyzer report parsing and match extraction.
//!
//! The analyzer is asked for a JSON report, but its stdout may carry
//! log noise around it. [`extract_json`] is the narrow best-effort
//! recovery for that case; everything downstream works on the parsed
//! [`serde_json::Value`].

use crate::scenario::{MatchScope, Scenario};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// One issue entry attributed to a file, as reported by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedMatch {
    pub name: String,
    pub file: String,
    pub line: Option<u64>,
}

impl fmt::Display for ReportedMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} @ {}:{line}", self.name, self.file),
            None => write!(f, "{} @ {}", self.name, self.file),
        }
    }
}

/// Pull the report object out of possibly-noisy stdout.
///
/// Clean output parses whole. Otherwise lines are scanned in reverse
/// for the last one that parses as a JSON object, since the report is
/// printed after any progress noise. Returns `None` when nothing
/// parses.
pub fn extract_json(stdout: &str) -> Option<Value> {
    let trimmed = stdout.trim();
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }
    for line in trimmed.lines().rev() {
        let line = line.trim();
        if !line.starts_with('{') {
            continue;
        }
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(line) {
            return Some(value);
        }
    }
    None
}

/// Collect candidate matches for a scenario from a parsed report.
///
/// The `files` category is a flat list of paths; every other category
/// lives in `issues` records keyed by file, with entries under one or
/// more of the scenario's result keys, either bare strings or objects
/// carrying `name` and an optional `line`.
pub fn collect_matches(scenario: &Scenario, report: &Value) -> Vec<ReportedMatch> {
    if scenario.include_filter == "files" {
        return report
            .get("files")
            .and_then(Value::as_array)
            .map(|files| {
                files
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|file| ReportedMatch {
                        name: file_name_of(file),
                        file: file.to_string(),
                        line: None,
                    })
                    .collect()
            })
            .unwrap_or_default();
    }

    let Some(issues) = report.get("issues").and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut matches = Vec::new();
    for issue in issues {
        let Some(file) = issue.get("file").and_then(Value::as_str) else {
            continue;
        };
        for key in scenario.result_keys {
            let Some(entries) = issue.get(*key).and_then(Value::as_array) else {
                continue;
            };
            for entry in entries {
                if let Some(m) = parse_entry(entry, file) {
                    matches.push(m);
                }
            }
        }
    }
    matches
}

/// Drop matches outside the scenario's scope. Target-directory scoped
/// scenarios keep only matches whose file path (absolute or
/// repo-relative) falls under `target_root`; manifest-scoped scenarios
/// are not path-filtered.
pub fn filter_matches(
    matches: Vec<ReportedMatch>,
    scope: MatchScope,
    repo_root: &Path,
    target_root: &Path,
) -> Vec<ReportedMatch> {
    match scope {
        MatchScope::Manifest => matches,
        MatchScope::TargetDir => matches
            .into_iter()
            .filter(|m| in_scope(&m.file, repo_root, target_root))
            .collect(),
    }
}

fn in_scope(file: &str, repo_root: &Path, target_root: &Path) -> bool {
    let path = Path::new(file);
    if path.starts_with(target_root) {
        return true;
    }
    // Analyzers run from the repo root usually report relative paths.
    match target_root.strip_prefix(repo_root) {
        Ok(rel) => path.starts_with(rel),
        Err(_) => false,
    }
}

fn parse_entry(entry: &Value, file: &str) -> Option<ReportedMatch> {
    match entry {
        Value::String(name) => Some(ReportedMatch {
            name: name.clone(),
            file: file.to_string(),
            line: None,
        }),
        Value::Object(fields) => {
            let name = fields.get("name").and_then(Value::as_str)?;
            Some(ReportedMatch {
                name: name.to_string(),
                file: file.to_string(),
                line: fields.get("line").and_then(Value::as_u64),
            })
        }
        _ => None,
    }
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
