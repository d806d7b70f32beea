//! Ordered record of filesystem paths touched by a mutation run.

use std::path::{Path, PathBuf};

/// Paths written, rewritten, or deleted during a create/cleanup run, in
/// touch order. Idempotent no-ops are never recorded, so an empty set
/// means the run changed nothing. Duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: Vec<PathBuf>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a touched path.
    pub fn record(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.iter().any(|p| p == path.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }
}

impl IntoIterator for ChangeSet {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
