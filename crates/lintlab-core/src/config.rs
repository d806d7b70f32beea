//! Lab configuration: where the sample repository lives and which
//! external binaries to drive.
//!
//! Defaults are derived from the sample-repo root with
//! [`LabConfig::for_repo`]; a `lintlab.toml` file can override any
//! individual path or binary name.

use crate::error::{LabError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolved configuration for one scenario run.
///
/// The manifest and bootstrap paths are the two shared files every
/// scenario may mutate; `lab_root` is the directory fixture
/// subdirectories are created under.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Root of the sample repository the analyzer is run against.
    pub repo_root: PathBuf,
    /// The shared package manifest (package.json).
    pub manifest_path: PathBuf,
    /// The application bootstrap file import lines are injected into.
    pub bootstrap_path: PathBuf,
    /// Directory holding one fixture subdirectory per scenario.
    pub lab_root: PathBuf,
    /// Analyzer binary; must support `--reporter json --include <cat>
    /// --no-exit-code`.
    pub tool_bin: String,
    /// Package manager binary used for lock-file resync.
    pub package_manager_bin: String,
}

/// On-disk override file shape. Every field is optional; unset fields
/// fall back to the `for_repo` defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabConfigFile {
    repo_root: Option<PathBuf>,
    manifest: Option<PathBuf>,
    bootstrap: Option<PathBuf>,
    lab_root: Option<PathBuf>,
    tool: Option<String>,
    package_manager: Option<String>,
}

impl LabConfig {
    /// Default layout for a sample repository: `package.json` and
    /// `src/index.js` at the root, fixtures under `lab/`, knip as the
    /// analyzer and npm as the package manager.
    pub fn for_repo(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest_path: root.join("package.json"),
            bootstrap_path: root.join("src").join("index.js"),
            lab_root: root.join("lab"),
            tool_bin: "knip".to_string(),
            package_manager_bin: "npm".to_string(),
            repo_root: root,
        }
    }

    /// Load a `lintlab.toml` override file and merge it over the
    /// defaults. Relative path overrides are resolved against the repo
    /// root.
    pub fn from_file(path: &Path, default_root: impl Into<PathBuf>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: LabConfigFile = toml::from_str(&raw)
            .map_err(|e| LabError::config(format!("{}: {e}", path.display())))?;

        let root = file.repo_root.unwrap_or_else(|| default_root.into());
        let mut config = Self::for_repo(&root);
        if let Some(p) = file.manifest {
            config.manifest_path = root.join(p);
        }
        if let Some(p) = file.bootstrap {
            config.bootstrap_path = root.join(p);
        }
        if let Some(p) = file.lab_root {
            config.lab_root = root.join(p);
        }
        if let Some(bin) = file.tool {
            config.tool_bin = bin;
        }
        if let Some(bin) = file.package_manager {
            config.package_manager_bin = bin;
        }
        Ok(config)
    }
}
