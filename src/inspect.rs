//! Read-only title listing.
//!
//! The inspect command reports what the rename command would read from each
//! file, without computing or performing any rename.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::id3v1::{ExtractError, TitleLookup, read_title};
use crate::scanner::collect_candidates;
use crate::tui::{Mode, UI};

/// Reads the title of every file, in order.
pub fn inspect_titles(files: &[PathBuf]) -> Vec<(PathBuf, Result<TitleLookup, ExtractError>)> {
    files
        .iter()
        .map(|path| (path.clone(), read_title(path)))
        .collect()
}

pub fn handle_inspect(source: &Path, recursive: bool, config: &Config) -> color_eyre::Result<()> {
    let ui = UI::new().with_color_theme(config.ui.color.theme.clone());
    ui.print_header(&Mode::Inspect, &format!("Source: {}", source.display()))?;

    let spinner = ui.create_spinner("Collecting media files...");
    let scan = collect_candidates(
        source,
        &config.media.extensions,
        recursive || config.scan.recursive,
    );
    spinner.finish_and_clear();
    let scan = scan?;

    for error in &scan.errors {
        ui.print_warning(error)?;
    }

    let mut tagged = 0;
    for (path, lookup) in inspect_titles(&scan.candidates) {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        ui.print_file(name)?;

        match lookup {
            Ok(TitleLookup::Present(title)) if title.is_empty() => {
                ui.print_warning("ID3v1 tag has an empty title")?;
            }
            Ok(TitleLookup::Present(title)) => {
                tagged += 1;
                ui.print_success(&format!("Found Title: \"{}\"", title))?;
            }
            Ok(TitleLookup::Absent(reason)) => {
                ui.print_warning(&format!("No ID3v1 title tag ({})", reason))?;
            }
            Err(e) => {
                ui.print_error(&format!("Error while reading: {}", e))?;
            }
        }
    }

    ui.term.write_line("")?;
    ui.print_info(&format!(
        "{} of {} file(s) carry an ID3v1 title",
        tagged,
        scan.candidates.len()
    ))?;

    Ok(())
}
