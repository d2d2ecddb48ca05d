//! Candidate file discovery.
//!
//! Turns the path given on the command line into the ordered list of media
//! files to process. A single media file is processed on its own; a directory
//! is walked (one level deep unless recursion is requested) and only files
//! with a configured media extension are kept.

use color_eyre::eyre::eyre;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::media::is_media_file;

/// What the input path turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Directory,
}

/// Statistics collected while looking for candidate files.
#[derive(Debug)]
pub struct ScanStats {
    pub kind: SourceKind,
    /// Media files to process, sorted by path
    pub candidates: Vec<PathBuf>,
    /// Regular files ignored because of their extension
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl ScanStats {
    /// Creates a new empty `ScanStats` instance.
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            candidates: Vec::new(),
            skipped: 0,
            errors: Vec::new(),
        }
    }

    pub fn add_candidate(&mut self, path: PathBuf) {
        self.candidates.push(path);
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Records an error encountered during scanning.
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }
}

/// Collects the media files designated by `path`.
///
/// # Arguments
///
/// * `path` - A media file or a directory
/// * `extensions` - Media extensions, matched case-insensitively
/// * `recursive` - Descend into subdirectories
///
/// # Errors
///
/// Returns an error if `path` does not exist, or if it is a file without a
/// media extension. Errors met while walking a directory are recorded in
/// [`ScanStats::errors`] instead.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use retitle::scanner::collect_candidates;
///
/// # fn main() -> color_eyre::Result<()> {
/// let exts = vec![".mp3".to_string()];
/// let stats = collect_candidates(Path::new("/home/me/Music"), &exts, false)?;
/// println!("{} files to process", stats.candidates.len());
/// # Ok(())
/// # }
/// ```
pub fn collect_candidates(
    path: &Path,
    extensions: &[String],
    recursive: bool,
) -> color_eyre::Result<ScanStats> {
    if !path.exists() {
        return Err(eyre!("Path not found at '{}'", path.display()));
    }

    if path.is_file() {
        if !is_media_file(path, extensions) {
            return Err(eyre!(
                "Provided path is neither a directory nor a media file: '{}'",
                path.display()
            ));
        }
        let mut stats = ScanStats::new(SourceKind::File);
        stats.add_candidate(path.to_path_buf());
        return Ok(stats);
    }

    if !path.is_dir() {
        return Err(eyre!(
            "Provided path is neither a directory nor a media file: '{}'",
            path.display()
        ));
    }

    let mut stats = ScanStats::new(SourceKind::Directory);
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(path).min_depth(1).max_depth(max_depth) {
        match entry {
            Ok(entry) if entry.path().is_file() => {
                if is_media_file(entry.path(), extensions) {
                    stats.add_candidate(entry.into_path());
                } else {
                    stats.add_skipped();
                }
            }
            Err(e) => {
                stats.add_error(format!("Error walking directory: {}", e));
            }
            _ => {}
        }
    }

    stats.candidates.sort();
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec![".mp3".to_string()]
    }

    #[test]
    fn test_scan_stats_new() {
        let stats = ScanStats::new(SourceKind::Directory);

        assert_eq!(stats.kind, SourceKind::Directory);
        assert!(stats.candidates.is_empty());
        assert_eq!(stats.skipped, 0);
        assert!(stats.errors.is_empty());
    }

    #[test]
    fn test_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = collect_candidates(&dir.path().join("nope"), &exts(), false);

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Path not found"));
    }

    #[test]
    fn test_single_media_file() {
        let dir = tempfile::tempdir().unwrap();
        let song = dir.path().join("Song.MP3");
        fs::write(&song, b"x").unwrap();

        let stats = collect_candidates(&song, &exts(), false).unwrap();
        assert_eq!(stats.kind, SourceKind::File);
        assert_eq!(stats.candidates, vec![song]);
    }

    #[test]
    fn test_single_non_media_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, b"x").unwrap();

        let err = collect_candidates(&notes, &exts(), false)
            .unwrap_err()
            .to_string();
        assert!(err.contains("neither a directory nor a media file"));
    }

    #[test]
    fn test_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.mp3"), b"x").unwrap();
        fs::write(dir.path().join("a.Mp3"), b"x").unwrap();
        fs::write(dir.path().join("cover.jpg"), b"x").unwrap();
        fs::create_dir(dir.path().join("disc2")).unwrap();
        fs::write(dir.path().join("disc2").join("c.mp3"), b"x").unwrap();

        let stats = collect_candidates(dir.path(), &exts(), false).unwrap();

        assert_eq!(stats.kind, SourceKind::Directory);
        assert_eq!(
            stats.candidates,
            vec![dir.path().join("a.Mp3"), dir.path().join("b.mp3")]
        );
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_directory_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::create_dir(dir.path().join("disc2")).unwrap();
        fs::write(dir.path().join("disc2").join("c.mp3"), b"x").unwrap();

        let stats = collect_candidates(dir.path(), &exts(), true).unwrap();
        assert_eq!(stats.candidates.len(), 2);
        assert!(stats.candidates.contains(&dir.path().join("disc2").join("c.mp3")));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_includes_symlinked_media() {
        let music = tempfile::tempdir().unwrap();
        let store = tempfile::tempdir().unwrap();
        let real = store.path().join("real.mp3");
        fs::write(&real, b"x").unwrap();
        let link = music.path().join("link.mp3");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        std::os::unix::fs::symlink(store.path().join("gone.mp3"), music.path().join("dead.mp3"))
            .unwrap();

        let stats = collect_candidates(music.path(), &exts(), false).unwrap();

        assert_eq!(stats.candidates, vec![link]);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();

        let stats = collect_candidates(dir.path(), &exts(), false).unwrap();
        assert!(stats.candidates.is_empty());
        assert_eq!(stats.skipped, 0);
    }
}
