//! Media file recognition.
//!
//! Files are recognised by extension only. Matching is case-insensitive, so
//! `SONG.MP3` and `song.mp3` are both candidates when `.mp3` is configured.

use std::path::Path;

/// Extensions handled when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mp3"];

/// Extracts the file extension from a path.
///
/// Returns the extension in lowercase with a leading dot, or an empty
/// string if the path has none.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use retitle::media::get_extension;
///
/// assert_eq!(get_extension(Path::new("/music/Track01.MP3")), ".mp3");
/// assert_eq!(get_extension(Path::new("/music/README")), "");
/// ```
pub fn get_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| format!(".{}", s.to_lowercase()))
        .unwrap_or_default()
}

/// Checks whether `path` has one of the given extensions.
///
/// Entries in `extensions` may be written with or without the leading dot
/// and in any case.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use retitle::media::is_media_file;
///
/// let exts = vec![".mp3".to_string()];
/// assert!(is_media_file(Path::new("a.Mp3"), &exts));
/// assert!(!is_media_file(Path::new("cover.jpg"), &exts));
/// ```
pub fn is_media_file(path: &Path, extensions: &[String]) -> bool {
    let ext = get_extension(path);
    if ext.is_empty() {
        return false;
    }

    extensions
        .iter()
        .any(|candidate| normalize_extension(candidate) == ext)
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
