//! Windowed file previews for reporting what a mutation touched.

use crate::error::Result;
use std::path::Path;

/// Lines shown on each side of a located marker.
pub const WINDOW: usize = 3;
/// Lines shown from the top when no marker is found.
pub const HEAD_LINES: usize = 8;

/// A small excerpt of a changed file: 1-based line numbers paired with
/// content, plus whether anything was elided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<(usize, String)>,
    pub truncated: bool,
}

/// Excerpt `path` for display. Centers on the first line containing
/// `needle` when present, else falls back to the file head. Returns
/// `None` for paths that no longer exist (deleted during cleanup).
pub fn preview_file(path: &Path, needle: &str) -> Result<Option<Preview>> {
    if !path.is_file() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = text.lines().collect();

    let (start, end) = match lines.iter().position(|l| l.contains(needle)) {
        Some(hit) => (hit.saturating_sub(WINDOW), (hit + WINDOW + 1).min(lines.len())),
        None => (0, HEAD_LINES.min(lines.len())),
    };

    Ok(Some(Preview {
        lines: lines[start..end]
            .iter()
            .enumerate()
            .map(|(i, l)| (start + i + 1, (*l).to_string()))
            .collect(),
        truncated: start > 0 || end < lines.len(),
    }))
}
