//! Scenario registry: one static descriptor per synthetic finding the
//! lab can plant and verify.
//!
//! Each descriptor pins down the analyzer category it exercises, the
//! fixture payload the mutator writes, and how the verifier narrows the
//! analyzer's report to matches this scenario owns.

use crate::config::LabConfig;
use crate::error::{LabError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::PathBuf;

/// How verifier matches are narrowed before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Keep only matches whose file path falls under the scenario's
    /// target directory.
    TargetDir,
    /// Matches concern the shared package manifest; no path filtering.
    Manifest,
}

/// One deterministic source file written under the target directory.
#[derive(Debug, Clone, Copy)]
pub struct FixtureFile {
    pub name: &'static str,
    pub contents: &'static str,
}

/// What the mutator plants for a scenario.
#[derive(Debug, Clone, Copy)]
pub enum Payload {
    /// Source files under the target directory.
    Files(&'static [FixtureFile]),
    /// A marker entry under `devDependencies`; requires a lock-file
    /// resync after mutation.
    DevDependency {
        name: &'static str,
        version: &'static str,
    },
    /// A marker entry under `scripts`.
    Script {
        name: &'static str,
        command: &'static str,
    },
}

/// Immutable scenario descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Unique registry key, also used as the bootstrap marker token.
    pub key: &'static str,
    /// Human-readable label the verifier reports against.
    pub expected_issue: &'static str,
    /// Category passed to the analyzer's `--include`.
    pub include_filter: &'static str,
    /// Report fields that may hold this scenario's matches, in
    /// preference order.
    pub result_keys: &'static [&'static str],
    /// Fixture directory name under the lab root.
    pub target_subdir: &'static str,
    /// Fixture file to wire into the bootstrap, when reachability is a
    /// precondition for the finding.
    pub entry_file: Option<&'static str>,
    pub match_scope: MatchScope,
    pub payload: Payload,
    /// Zero matches is tolerated with a warning instead of failing;
    /// set for categories whose detection is analyzer-version-sensitive.
    pub tolerate_miss: bool,
}

impl Scenario {
    /// Look up a descriptor by key. Absence is a wiring bug, not user
    /// input, and surfaces as a fatal error.
    pub fn lookup(key: &str) -> Result<&'static Scenario> {
        BY_KEY
            .get(key)
            .copied()
            .ok_or_else(|| LabError::unknown_scenario(key))
    }

    /// All registered scenarios, registry order.
    pub fn all() -> &'static [Scenario] {
        REGISTRY
    }

    /// Default fixture directory for this scenario.
    pub fn target_root(&self, config: &LabConfig) -> PathBuf {
        config.lab_root.join(self.target_subdir)
    }

    /// Marker comment appended to injected bootstrap import lines.
    pub fn marker(&self) -> String {
        format!("// lintlab:{}", self.key)
    }

    /// The string the reporter centers file previews on: the bootstrap
    /// marker for file scenarios, the owned manifest key otherwise.
    pub fn preview_needle(&self) -> String {
        match self.payload {
            Payload::Files(_) => self.marker(),
            Payload::DevDependency { name, .. } => format!("\"{name}\""),
            Payload::Script { name, .. } => format!("\"{name}\""),
        }
    }
}

static REGISTRY: &[Scenario] = &[
    Scenario {
        key: "unused-files",
        expected_issue: "unused file",
        include_filter: "files",
        result_keys: &["files"],
        target_subdir: "unused-files",
        entry_file: None,
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[FixtureFile {
            name: "orphan.js",
            contents: "export function orphanHelper(value) {\n  return `orphan:${value}`;\n}\n",
        }]),
        tolerate_miss: false,
    },
    Scenario {
        key: "unused-exports",
        expected_issue: "unused export",
        include_filter: "exports",
        result_keys: &["exports"],
        target_subdir: "unused-exports",
        entry_file: Some("entry.js"),
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[
            FixtureFile {
                name: "helpers.js",
                contents: "export function usedHelper(value) {\n  return value + 1;\n}\n\nexport function unusedHelper(value) {\n  return value - 1;\n}\n",
            },
            FixtureFile {
                name: "entry.js",
                contents: "import { usedHelper } from './helpers.js';\n\nexport function run() {\n  return usedHelper(41);\n}\n",
            },
        ]),
        tolerate_miss: false,
    },
    Scenario {
        key: "duplicate-exports",
        expected_issue: "duplicate export",
        include_filter: "duplicates",
        result_keys: &["duplicates", "exports"],
        target_subdir: "duplicate-exports",
        entry_file: Some("entry.js"),
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[
            FixtureFile {
                name: "first.js",
                contents: "export function formatLabel(value) {\n  return `first:${value}`;\n}\n",
            },
            FixtureFile {
                name: "second.js",
                contents: "export function formatLabel(value) {\n  return `second:${value}`;\n}\n",
            },
            FixtureFile {
                name: "entry.js",
                contents: "import { formatLabel as first } from './first.js';\nimport { formatLabel as second } from './second.js';\n\nexport function run() {\n  return [first(1), second(2)];\n}\n",
            },
        ]),
        tolerate_miss: true,
    },
    Scenario {
        key: "unlisted-dependency",
        expected_issue: "unlisted dependency",
        include_filter: "unlisted",
        result_keys: &["unlisted"],
        target_subdir: "unlisted-dependency",
        entry_file: Some("entry.js"),
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[FixtureFile {
            name: "entry.js",
            contents: "import slugify from 'slugify';\n\nexport function run() {\n  return slugify('lint lab');\n}\n",
        }]),
        tolerate_miss: false,
    },
    Scenario {
        key: "unresolved-import",
        expected_issue: "unresolved import",
        include_filter: "unresolved",
        result_keys: &["unresolved"],
        target_subdir: "unresolved-import",
        entry_file: Some("entry.js"),
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[FixtureFile {
            name: "entry.js",
            contents: "import { missing } from './not-here.js';\n\nexport function run() {\n  return missing();\n}\n",
        }]),
        tolerate_miss: false,
    },
    Scenario {
        key: "unused-exported-types",
        expected_issue: "unused exported type",
        include_filter: "types",
        result_keys: &["types"],
        target_subdir: "unused-exported-types",
        entry_file: Some("types.ts"),
        match_scope: MatchScope::TargetDir,
        payload: Payload::Files(&[FixtureFile {
            name: "types.ts",
            contents: "export type UnusedShape = {\n  id: string;\n  value: number;\n};\n",
        }]),
        tolerate_miss: false,
    },
    Scenario {
        key: "unused-dev-dependency",
        expected_issue: "unused devDependency",
        include_filter: "dependencies",
        result_keys: &["devDependencies", "dependencies", "optionalPeerDependencies"],
        target_subdir: "unused-dev-dependency",
        entry_file: None,
        match_scope: MatchScope::Manifest,
        payload: Payload::DevDependency {
            name: "left-pad",
            version: "^1.3.0",
        },
        tolerate_miss: false,
    },
    Scenario {
        key: "unlisted-binary",
        expected_issue: "unlisted binary",
        include_filter: "binaries",
        result_keys: &["binaries"],
        target_subdir: "unlisted-binary",
        entry_file: None,
        match_scope: MatchScope::Manifest,
        payload: Payload::Script {
            name: "lab:exercise",
            command: "not-a-real-tool --check",
        },
        tolerate_miss: false,
    },
];

static BY_KEY: Lazy<HashMap<&'static str, &'static Scenario>> =
    Lazy::new(|| REGISTRY.iter().map(|s| (s.key, s)).collect());
