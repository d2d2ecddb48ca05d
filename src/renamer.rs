//! Title-based file renaming.
//!
//! Each candidate file is handled on its own: read its ID3v1 title, turn the
//! title into a safe file name, and rename the file inside its own directory.
//! No-op renames and existing destinations are detected before anything
//! touches the filesystem, so a file is never overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::id3v1::{Absence, ExtractError, TitleLookup, read_title};
use crate::log::write_rename_log;
use crate::media::get_extension;
use crate::sanitize::sanitize_title;
use crate::scanner::{SourceKind, collect_candidates};
use crate::tui::{Mode, UI};

/// What happened to one file.
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// Dry run: the rename that would have been performed
    WouldRename { from: PathBuf, to: PathBuf },
    AlreadyNamed,
    NoTag(Absence),
    /// A tag exists but its title field is blank
    EmptyTitle,
    EmptyAfterSanitization { title: String },
    DestinationExists { target: PathBuf },
    RenameFailed { target: PathBuf, error: io::Error },
    ReadFailed(ExtractError),
}

impl RenameOutcome {
    /// True for outcomes that should be counted as failures.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            RenameOutcome::EmptyAfterSanitization { .. }
                | RenameOutcome::DestinationExists { .. }
                | RenameOutcome::RenameFailed { .. }
                | RenameOutcome::ReadFailed(_)
        )
    }
}

/// Options for the rename command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub recursive: bool,
    pub dry_run: bool,
    pub write_log: bool,
}

/// Statistics about a batch of renames.
#[derive(Debug, Default)]
pub struct RenameStats {
    pub processed: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub no_tag: usize,
    pub failed: usize,
    /// One line per file, in processing order
    pub entries: Vec<String>,
    pub errors: Vec<String>,
}

impl RenameStats {
    /// Creates a new empty `RenameStats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for `path`.
    pub fn record(&mut self, path: &Path, outcome: &RenameOutcome) {
        self.processed += 1;

        let line = format!("{}: {}", display_name(path), describe(outcome));
        match outcome {
            RenameOutcome::Renamed { .. } | RenameOutcome::WouldRename { .. } => {
                self.renamed += 1
            }
            RenameOutcome::AlreadyNamed => self.unchanged += 1,
            RenameOutcome::NoTag(_) | RenameOutcome::EmptyTitle => self.no_tag += 1,
            _ => {
                self.failed += 1;
                self.errors.push(line.clone());
            }
        }
        self.entries.push(line);
    }
}

/// Computes the destination path for a file given its sanitized title.
///
/// The new name keeps the file's directory and its extension, lowercased.
pub fn target_path(path: &Path, stem: &str) -> PathBuf {
    let file_name = format!("{}{}", stem, get_extension(path));
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Renames one file after its ID3v1 title.
///
/// With `dry_run` set every check still runs but the filesystem is left
/// untouched and [`RenameOutcome::WouldRename`] is returned instead.
pub fn rename_file(path: &Path, dry_run: bool) -> RenameOutcome {
    let title = match read_title(path) {
        Ok(TitleLookup::Present(title)) => title,
        Ok(TitleLookup::Absent(reason)) => return RenameOutcome::NoTag(reason),
        Err(e) => return RenameOutcome::ReadFailed(e),
    };

    if title.is_empty() {
        return RenameOutcome::EmptyTitle;
    }

    let stem = sanitize_title(&title);
    if stem.is_empty() {
        return RenameOutcome::EmptyAfterSanitization { title };
    }

    let target = target_path(path, &stem);

    let current_name = file_name_of(path).to_lowercase();
    let target_name = file_name_of(&target).to_lowercase();
    if current_name == target_name {
        return RenameOutcome::AlreadyNamed;
    }

    move_to(path, target, dry_run)
}

/// Moves `path` to `target` unless something already occupies `target`.
///
/// Any directory entry counts as occupied, dangling symlinks included. If
/// the destination cannot be inspected the move is not attempted.
pub fn move_to(path: &Path, target: PathBuf, dry_run: bool) -> RenameOutcome {
    match fs::symlink_metadata(&target) {
        Ok(_) => return RenameOutcome::DestinationExists { target },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return RenameOutcome::RenameFailed { target, error },
    }

    if dry_run {
        return RenameOutcome::WouldRename {
            from: path.to_path_buf(),
            to: target,
        };
    }

    match fs::rename(path, &target) {
        Ok(()) => RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
        },
        Err(error) => RenameOutcome::RenameFailed { target, error },
    }
}

/// Processes every file in order. A failing file never stops the batch.
///
/// `callback` receives each path with its outcome as soon as it is known.
pub fn rename_all<F>(files: &[PathBuf], dry_run: bool, mut callback: F) -> RenameStats
where
    F: FnMut(&Path, &RenameOutcome),
{
    let mut stats = RenameStats::new();

    for path in files {
        let outcome = rename_file(path, dry_run);
        callback(path, &outcome);
        stats.record(path, &outcome);
    }

    stats
}

/// Human-readable description of an outcome.
pub fn describe(outcome: &RenameOutcome) -> String {
    match outcome {
        RenameOutcome::Renamed { to, .. } => {
            format!("renamed to '{}'", display_name(to))
        }
        RenameOutcome::WouldRename { to, .. } => {
            format!("would be renamed to '{}'", display_name(to))
        }
        RenameOutcome::AlreadyNamed => "already named correctly".to_string(),
        RenameOutcome::NoTag(reason) => format!("no ID3v1 title tag found ({})", reason),
        RenameOutcome::EmptyTitle => "ID3v1 tag has an empty title".to_string(),
        RenameOutcome::EmptyAfterSanitization { title } => format!(
            "title \"{}\" contains only invalid filename characters",
            title
        ),
        RenameOutcome::DestinationExists { target } => {
            format!("a file named '{}' already exists", display_name(target))
        }
        RenameOutcome::RenameFailed { target, error } => {
            format!("failed to rename to '{}': {}", display_name(target), error)
        }
        RenameOutcome::ReadFailed(e) => format!("error while reading: {}", e),
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn report(ui: &UI, path: &Path, outcome: &RenameOutcome) -> std::io::Result<()> {
    ui.print_file(&display_name(path))?;

    let message = describe(outcome);
    match outcome {
        RenameOutcome::Renamed { .. } | RenameOutcome::WouldRename { .. } => {
            ui.print_success(&message)
        }
        RenameOutcome::AlreadyNamed => ui.print_info(&message),
        RenameOutcome::NoTag(_) | RenameOutcome::EmptyTitle => ui.print_warning(&message),
        _ => ui.print_error(&message),
    }
}

pub fn handle_rename(
    source: &Path,
    opts: RenameOptions,
    config: &Config,
) -> color_eyre::Result<RenameStats> {
    let ui = UI::new().with_color_theme(config.ui.color.theme.clone());
    let mode = if opts.dry_run { Mode::DryRun } else { Mode::Rename };
    ui.print_header(&mode, &format!("Source: {}", source.display()))?;

    let spinner = ui.create_spinner("Collecting media files...");
    let scan = collect_candidates(
        source,
        &config.media.extensions,
        opts.recursive || config.scan.recursive,
    );
    spinner.finish_and_clear();
    let scan = scan?;

    for error in &scan.errors {
        ui.print_warning(error)?;
    }

    if scan.kind == SourceKind::Directory && scan.candidates.is_empty() {
        ui.print_info(&format!(
            "No media files found in '{}'",
            source.display()
        ))?;
        return Ok(RenameStats::new());
    }

    let mut report_error = None;
    let stats = rename_all(&scan.candidates, opts.dry_run, |path, outcome| {
        if let Err(e) = report(&ui, path, outcome) {
            report_error.get_or_insert(e);
        }
    });
    if let Some(e) = report_error {
        return Err(e.into());
    }

    ui.term.write_line("")?;
    let summary = format!(
        "{} processed, {} renamed, {} already named, {} without title, {} failed",
        stats.processed, stats.renamed, stats.unchanged, stats.no_tag, stats.failed
    );
    if stats.failed > 0 {
        ui.print_warning(&summary)?;
    } else {
        ui.print_success(&summary)?;
    }
    if scan.skipped > 0 {
        ui.print_info(&format!("{} non-media file(s) ignored", scan.skipped))?;
    }

    if opts.write_log {
        match write_rename_log(source, opts.dry_run, &scan, &stats) {
            Ok(log_path) => ui.print_success(&format!("Log written to: {}", log_path.display()))?,
            Err(e) => ui.print_warning(&format!("Failed to write log file: {}", e))?,
        }
    }

    Ok(stats)
}
