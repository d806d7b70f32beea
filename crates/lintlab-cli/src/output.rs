//! Terminal output helpers for the lintlab CLI.
//!
//! Consistent line-oriented styling: status prefixes, key/value pairs,
//! and numbered file-excerpt rendering for change reports.

use console::style;
use lintlab_core::Preview;
use std::fmt::Display;

/// Print a success message
pub fn success(msg: impl Display) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: impl Display) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: impl Display) {
    println!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: impl Display) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a section header
pub fn header(msg: impl Display) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: impl Display, value: impl Display) {
    println!("  {}: {}", style(key).cyan(), value);
}

/// Print a bulleted list entry
pub fn list_item(msg: impl Display) {
    println!("  {} {}", style("-").dim(), msg);
}

/// Print a changed path with an optional excerpt underneath.
pub fn changed_file(path: impl Display, preview: Option<&Preview>) {
    println!("{} {}", style("→").magenta().bold(), path);
    let Some(preview) = preview else {
        println!("    {}", style("(removed)").dim());
        return;
    };
    for (number, line) in &preview.lines {
        println!("    {} {}", style(format!("{number:>4} |")).dim(), line);
    }
    if preview.truncated {
        println!("    {}", style("     | ...").dim());
    }
}
