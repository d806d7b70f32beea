//! Shared package-manifest mutation.
//!
//! The manifest is parsed as a generic order-preserving JSON object;
//! only the `devDependencies` and `scripts` tables are ever touched.
//! Write-back uses a stable format (two-space indent, trailing newline)
//! so an add/remove cycle restores the file byte-for-byte.

use crate::error::{LabError, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Manifest sections the lab is allowed to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    DevDependencies,
    Scripts,
}

impl Section {
    fn key(self) -> &'static str {
        match self {
            Self::DevDependencies => "devDependencies",
            Self::Scripts => "scripts",
        }
    }
}

/// An in-memory package manifest bound to its file path.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    root: Map<String, Value>,
}

impl Manifest {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let Value::Object(root) = value else {
            return Err(LabError::manifest(format!(
                "{}: top level is not an object",
                path.display()
            )));
        };
        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_entry(&self, section: Section, name: &str) -> bool {
        self.root
            .get(section.key())
            .and_then(Value::as_object)
            .is_some_and(|table| table.contains_key(name))
    }

    /// Add `name` under the section, creating the section if absent.
    /// Returns false (and leaves the manifest untouched) when the entry
    /// already exists.
    pub fn add_entry(&mut self, section: Section, name: &str, value: &str) -> bool {
        let table = self
            .root
            .entry(section.key().to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(table) = table.as_object_mut() else {
            return false;
        };
        if table.contains_key(name) {
            return false;
        }
        table.insert(name.to_string(), Value::String(value.to_string()));
        true
    }

    /// Remove `name` from the section. Returns false when the entry was
    /// not present. A section left empty by the removal is dropped,
    /// restoring the shape `add_entry` started from.
    pub fn remove_entry(&mut self, section: Section, name: &str) -> bool {
        let Some(table) = self.root.get_mut(section.key()).and_then(Value::as_object_mut) else {
            return false;
        };
        if table.shift_remove(name).is_none() {
            return false;
        }
        if table.is_empty() {
            self.root.shift_remove(section.key());
        }
        true
    }

    /// Stable write-back: two-space pretty print plus trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&Value::Object(self.root.clone()))?;
        text.push('\n');
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Bring the lock file back in sync after a dependency mutation.
///
/// Install-only, lock-file-only, scripts disabled. Failure is degraded
/// to a warning with remediation text; fixture state is already on disk
/// and a stale lock file does not invalidate it.
pub fn resync_lockfile(package_manager: &str, repo_root: &Path) {
    debug!(package_manager, "resyncing lock file");
    let result = Command::new(package_manager)
        .args(["install", "--package-lock-only", "--ignore-scripts", "--no-audit"])
        .current_dir(repo_root)
        .output();

    match result {
        Ok(output) if output.status.success() => {
            debug!("lock file resynced");
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                status = %output.status,
                "lock-file resync failed: {}; run `{package_manager} install \
                 --package-lock-only` manually before verifying",
                stderr.trim()
            );
        }
        Err(e) => {
            warn!(
                "could not run {package_manager}: {e}; run `{package_manager} install \
                 --package-lock-only` manually before verifying"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("package.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_add_and_remove_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let original = "{\n  \"name\": \"sample\",\n  \"devDependencies\": {\n    \"other-pkg\": \"^2.0.0\"\n  }\n}\n";
        let path = write_manifest(dir.path(), original);

        let mut manifest = Manifest::load(&path).unwrap();
        assert!(manifest.add_entry(Section::DevDependencies, "left-pad", "^1.3.0"));
        manifest.save().unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        assert!(manifest.has_entry(Section::DevDependencies, "left-pad"));
        assert!(manifest.has_entry(Section::DevDependencies, "other-pkg"));
        assert!(manifest.remove_entry(Section::DevDependencies, "left-pad"));
        manifest.save().unwrap();

        let restored = std::fs::read_to_string(&path).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{\n  \"name\": \"sample\"\n}\n");

        let mut manifest = Manifest::load(&path).unwrap();
        assert!(manifest.add_entry(Section::Scripts, "lab:exercise", "true"));
        assert!(!manifest.add_entry(Section::Scripts, "lab:exercise", "true"));
    }

    #[test]
    fn test_remove_missing_entry_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{\n  \"name\": \"sample\"\n}\n");

        let mut manifest = Manifest::load(&path).unwrap();
        assert!(!manifest.remove_entry(Section::DevDependencies, "left-pad"));
    }

    #[test]
    fn test_owned_empty_section_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "{\n  \"name\": \"sample\"\n}\n");

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.add_entry(Section::DevDependencies, "left-pad", "^1.3.0");
        manifest.save().unwrap();

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.remove_entry(Section::DevDependencies, "left-pad");
        manifest.save().unwrap();

        let restored = std::fs::read_to_string(&path).unwrap();
        assert_eq!(restored, "{\n  \"name\": \"sample\"\n}\n");
    }

    #[test]
    fn test_unrelated_keys_and_order_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let original = "{\n  \"name\": \"sample\",\n  \"version\": \"1.0.0\",\n  \"scripts\": {\n    \"build\": \"node build.js\"\n  }\n}\n";
        let path = write_manifest(dir.path(), original);

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.add_entry(Section::Scripts, "lab:exercise", "not-a-real-tool --check");
        manifest.save().unwrap();

        let mutated = std::fs::read_to_string(&path).unwrap();
        // name/version come before scripts, and the pre-existing script
        // entry precedes the added one.
        let name_at = mutated.find("\"name\"").unwrap();
        let build_at = mutated.find("\"build\"").unwrap();
        let added_at = mutated.find("\"lab:exercise\"").unwrap();
        assert!(name_at < build_at && build_at < added_at);

        let mut manifest = Manifest::load(&path).unwrap();
        manifest.remove_entry(Section::Scripts, "lab:exercise");
        manifest.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_non_object_manifest_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), "[1, 2, 3]\n");
        assert!(matches!(Manifest::load(&path), Err(LabError::Manifest(_))));
    }

    #[test]
    fn test_resync_failure_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        // Binary does not exist; must warn, not panic or error.
        resync_lockfile("lintlab-no-such-pm", dir.path());
    }
}
