//! Fixture mutation: plant or remove the synthetic issue a scenario
//! describes.
//!
//! Both operations are idempotent. A second `create` or `cleanup` run
//! with unchanged inputs returns an empty [`ChangeSet`]; only real
//! writes, rewrites, and deletions are recorded.

use crate::bootstrap;
use crate::changeset::ChangeSet;
use crate::config::LabConfig;
use crate::error::Result;
use crate::manifest::{self, Manifest, Section};
use crate::scenario::{Payload, Scenario};
use std::path::Path;
use tracing::{debug, info};

/// Plant the scenario's synthetic issue under `target_root`.
pub fn create(scenario: &Scenario, config: &LabConfig, target_root: &Path) -> Result<ChangeSet> {
    let mut changes = ChangeSet::new();
    match scenario.payload {
        Payload::Files(files) => {
            std::fs::create_dir_all(target_root)?;
            for file in files {
                let path = target_root.join(file.name);
                let current = std::fs::read_to_string(&path).ok();
                if current.as_deref() == Some(file.contents) {
                    debug!(path = %path.display(), "fixture already in place");
                    continue;
                }
                std::fs::write(&path, file.contents)?;
                changes.record(&path);
            }
            if let Some(entry) = scenario.entry_file {
                let specifier = bootstrap::import_specifier(
                    &config.repo_root,
                    &config.bootstrap_path,
                    &target_root.join(entry),
                );
                if bootstrap::inject(&config.bootstrap_path, &specifier, scenario.key)? {
                    changes.record(&config.bootstrap_path);
                }
            }
        }
        Payload::DevDependency { name, version } => {
            let mut m = Manifest::load(&config.manifest_path)?;
            if m.add_entry(Section::DevDependencies, name, version) {
                m.save()?;
                changes.record(m.path());
                manifest::resync_lockfile(&config.package_manager_bin, &config.repo_root);
            }
        }
        Payload::Script { name, command } => {
            let mut m = Manifest::load(&config.manifest_path)?;
            if m.add_entry(Section::Scripts, name, command) {
                m.save()?;
                changes.record(m.path());
            }
        }
    }
    info!(
        scenario = scenario.key,
        touched = changes.len(),
        "create complete"
    );
    Ok(changes)
}

/// Remove everything this scenario owns: its bootstrap import line and
/// fixture directory, or its marker entries in the manifest. Unrelated
/// content is never touched.
pub fn cleanup(scenario: &Scenario, config: &LabConfig, target_root: &Path) -> Result<ChangeSet> {
    let mut changes = ChangeSet::new();
    match scenario.payload {
        Payload::Files(_) => {
            if bootstrap::remove(&config.bootstrap_path, scenario.key)? {
                changes.record(&config.bootstrap_path);
            }
            if target_root.exists() {
                std::fs::remove_dir_all(target_root)?;
                changes.record(target_root);
            }
        }
        Payload::DevDependency { name, .. } => {
            let mut m = Manifest::load(&config.manifest_path)?;
            if m.remove_entry(Section::DevDependencies, name) {
                m.save()?;
                changes.record(m.path());
                manifest::resync_lockfile(&config.package_manager_bin, &config.repo_root);
            }
        }
        Payload::Script { name, .. } => {
            let mut m = Manifest::load(&config.manifest_path)?;
            if m.remove_entry(Section::Scripts, name) {
                m.save()?;
                changes.record(m.path());
            }
        }
    }
    info!(
        scenario = scenario.key,
        touched = changes.len(),
        "cleanup complete"
    );
    Ok(changes)
}
