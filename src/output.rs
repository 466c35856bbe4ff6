//! Status line formatting shared by the flows.
//!
//! Progress goes to stdout; warnings and failures go to stderr.

use colored::Colorize;

pub fn success(msg: impl AsRef<str>) {
    println!("{} {}", "✓".green().bold(), msg.as_ref());
}

pub fn info(msg: impl AsRef<str>) {
    println!("{} {}", "→".cyan(), msg.as_ref());
}

pub fn skip(msg: impl AsRef<str>) {
    println!("{} {}", "⏩".dimmed(), msg.as_ref());
}

pub fn dry_run(msg: impl AsRef<str>) {
    println!("{} {}", "[dry-run]".dimmed(), msg.as_ref());
}

pub fn warn(msg: impl AsRef<str>) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg.as_ref());
}

pub fn failure(msg: impl AsRef<str>) {
    eprintln!("{} {}", "✗".red().bold(), msg.as_ref());
}

/// Horizontal rule used between listing entries
pub fn rule() -> String {
    "─".repeat(60)
}
