//! Line rendering for the console and the log file

use super::severity::{color, Tag};
use super::traits::SourceLocation;

/// Final path component, split on either `/` or `\`
///
/// Returns the input unchanged when it has no separator.
pub fn short_filename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn padding(tag: Tag) -> &'static str {
    const SPACES: &str = "          ";
    &SPACES[..Tag::WIDTH.saturating_sub(tag.label.len())]
}

/// Plain line: `<label><pad> (<file> <line>) <message>`, no trailing newline
pub fn render_plain(tag: Tag, location: SourceLocation<'_>, message: &str) -> String {
    format!(
        "{}{} ({} {}) {}",
        tag.label,
        padding(tag),
        short_filename(location.file),
        location.line,
        message
    )
}

/// Colored console line, no trailing newline
pub fn render_colored(tag: Tag, location: SourceLocation<'_>, message: &str) -> String {
    format!(
        "{}{}{}{} ({} {}) {}{}",
        tag.color,
        tag.label,
        color::NEUTRAL,
        padding(tag),
        short_filename(location.file),
        location.line,
        message,
        color::RESET
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Severity;

    #[test]
    fn test_short_filename() {
        assert_eq!(short_filename("/a/b/c.txt"), "c.txt");
        assert_eq!(short_filename("c:\\a\\b.txt"), "b.txt");
        assert_eq!(short_filename("justaname.txt"), "justaname.txt");
        assert_eq!(short_filename("mixed\\dir/name.rs"), "name.rs");
        assert_eq!(short_filename("trailing/"), "");
    }

    #[test]
    fn test_render_plain() {
        let line = render_plain(
            Severity::Error.tag(),
            SourceLocation::new("src/x.cc", 1),
            "bad value: oops",
        );
        assert_eq!(line, "[ERROR]    (x.cc 1) bad value: oops");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_render_colored() {
        let line = render_colored(
            Severity::Success.tag(),
            SourceLocation::new("main.cc", 42),
            &format!("Loaded {} items", 7),
        );
        assert_eq!(
            line,
            "\x1b[32m[SUCCESS]\x1b[97m  (main.cc 42) Loaded 7 items\x1b[0m"
        );
    }

    #[test]
    fn test_labels_align() {
        let location = SourceLocation::new("a.rs", 3);
        let widths: Vec<usize> = Severity::ALL
            .iter()
            .map(|s| render_plain(s.tag(), location, "").find('(').unwrap_or(0))
            .collect();
        assert!(widths.iter().all(|w| *w == Tag::WIDTH + 1));
        assert_eq!(render_plain(Tag::UNKNOWN, location, "m"), "[UNKNOWN]  (a.rs 3) m");
    }
}
