//! Log file generation.
//!
//! Writes a plain-text record of a rename run: source, totals and the outcome
//! for every file, in processing order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::renamer::RenameStats;
use crate::scanner::ScanStats;

/// Renders the log body.
pub fn render_rename_log(
    source: &Path,
    dry_run: bool,
    scan_stats: &ScanStats,
    stats: &RenameStats,
) -> String {
    let mut content = String::new();
    content.push_str("RETITLE LOG\n");
    content.push_str(&"═".repeat(70));
    content.push_str("\n\n");

    content.push_str(&format!("Source: {}\n", source.display()));
    content.push_str(&format!(
        "Timestamp: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    if dry_run {
        content.push_str("Mode: dry run (no files were renamed)\n");
    }
    content.push('\n');

    content.push_str(&format!("Files processed: {}\n", stats.processed));
    content.push_str(&format!("Files renamed: {}\n", stats.renamed));
    content.push_str(&format!("Already named: {}\n", stats.unchanged));
    content.push_str(&format!("Without title: {}\n", stats.no_tag));
    content.push_str(&format!("Failed: {}\n", stats.failed));
    content.push_str(&format!("Non-media files ignored: {}\n\n", scan_stats.skipped));

    content.push_str("FILES\n");
    content.push_str(&"─".repeat(70));
    content.push('\n');
    for entry in &stats.entries {
        content.push_str(&format!("{}\n", entry));
    }

    if !scan_stats.errors.is_empty() {
        content.push_str("\nSCAN ERRORS\n");
        content.push_str(&"─".repeat(70));
        content.push('\n');
        for error in &scan_stats.errors {
            content.push_str(&format!("{}\n", error));
        }
    }

    content.push('\n');
    content.push_str(&"═".repeat(70));
    content.push_str("\nEnd of log\n");
    content
}

/// Writes the log of a rename run into the current directory.
///
/// # Returns
///
/// The path where the log file was written
pub fn write_rename_log(
    source: &Path,
    dry_run: bool,
    scan_stats: &ScanStats,
    stats: &RenameStats,
) -> color_eyre::Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let source_name = source
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    let log_path = PathBuf::from(format!("retitle_{}_{}.txt", source_name, timestamp));

    fs::write(&log_path, render_rename_log(source, dry_run, scan_stats, stats))?;
    Ok(log_path)
}
