//! Entry-point wiring: marked import lines in the shared bootstrap file.
//!
//! "Unused" analyses need the fixture directory reachable from the
//! application's dependency graph before an orphan inside it stands
//! out. Reachability comes from one import line prepended to the
//! bootstrap file, tagged with a scenario-owned marker comment so it
//! can be added and removed idempotently.

use crate::error::Result;
use std::path::Path;

/// Add the marked import line for `key` if it is not already present.
/// Returns whether the file was modified.
pub fn inject(bootstrap: &Path, import_specifier: &str, key: &str) -> Result<bool> {
    let marker = marker_for(key);
    let text = std::fs::read_to_string(bootstrap)?;
    if text.lines().any(|line| line.contains(&marker)) {
        return Ok(false);
    }
    let mut out = format!("import '{import_specifier}'; {marker}\n");
    out.push_str(&text);
    std::fs::write(bootstrap, out)?;
    Ok(true)
}

/// Strip every line carrying `key`'s marker. Returns whether the file
/// was modified. A missing bootstrap file is treated as already clean.
pub fn remove(bootstrap: &Path, key: &str) -> Result<bool> {
    if !bootstrap.exists() {
        return Ok(false);
    }
    let marker = marker_for(key);
    let text = std::fs::read_to_string(bootstrap)?;
    let mut out = String::with_capacity(text.len());
    let mut removed = false;
    // split_inclusive keeps line terminators, so surviving content is
    // copied back byte-for-byte.
    for line in text.split_inclusive('\n') {
        if line.contains(&marker) {
            removed = true;
        } else {
            out.push_str(line);
        }
    }
    if removed {
        std::fs::write(bootstrap, out)?;
    }
    Ok(removed)
}

/// Relative import specifier for `target_file` as seen from the
/// bootstrap file's directory. Both paths must live under `repo_root`.
pub fn import_specifier(repo_root: &Path, bootstrap: &Path, target_file: &Path) -> String {
    let from_dir = bootstrap
        .parent()
        .and_then(|p| p.strip_prefix(repo_root).ok())
        .unwrap_or_else(|| Path::new(""));
    let to = target_file.strip_prefix(repo_root).unwrap_or(target_file);

    let ups = from_dir.components().count();
    let rel: Vec<String> = to
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if ups == 0 {
        format!("./{}", rel.join("/"))
    } else {
        format!("{}{}", "../".repeat(ups), rel.join("/"))
    }
}

fn marker_for(key: &str) -> String {
    format!("// lintlab:{key}")
}
