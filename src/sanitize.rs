//! Title to filename conversion.

/// Characters rejected by at least one common filesystem.
pub const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Turns a tag title into a file stem that is safe on common filesystems.
///
/// - Removes `\ / : * ? " < > |`
/// - Removes control characters (ID3v1 titles may carry stray bytes)
/// - Trims spaces from both ends (no-break spaces are title text)
///
/// The result may be empty; callers must not rename to an empty stem.
///
/// # Examples
///
/// ```
/// use retitle::sanitize::sanitize_title;
///
/// assert_eq!(sanitize_title("AC/DC: Live?"), "ACDC Live");
/// assert_eq!(sanitize_title("<|>"), "");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c) && !c.is_control())
        .collect();

    kept.trim_matches(|c: char| c <= ' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title_unchanged() {
        assert_eq!(sanitize_title("Bohemian Rhapsody"), "Bohemian Rhapsody");
    }

    #[test]
    fn test_removes_every_illegal_char() {
        assert_eq!(sanitize_title(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn test_trims_after_removal() {
        assert_eq!(sanitize_title("  ?Intro?  "), "Intro");
        assert_eq!(sanitize_title("Why? "), "Why");
    }

    #[test]
    fn test_only_illegal_chars_yields_empty() {
        assert_eq!(sanitize_title(r#":?"<>|/\"#), "");
        assert_eq!(sanitize_title("   "), "");
    }

    #[test]
    fn test_removes_control_chars() {
        assert_eq!(sanitize_title("Line\u{1}Noise\u{7f}"), "LineNoise");
        assert_eq!(sanitize_title("Tab\tbed"), "Tabbed");
    }

    #[test]
    fn test_keeps_no_break_space() {
        assert_eq!(sanitize_title("\u{a0}Intro\u{a0} "), "\u{a0}Intro\u{a0}");
    }

    #[test]
    fn test_keeps_latin1_text() {
        assert_eq!(sanitize_title("Caf\u{e9} del Mar"), "Caf\u{e9} del Mar");
    }
}
