use crate::level::Level;

/// Clears all terminal attributes set by a line's prefix.
pub(crate) const RESET: &str = "\x1b[0m";
/// Applied ahead of every level color so plain-color tags still stand out.
pub(crate) const BOLD: &str = "\x1b[1m";

const FAINT_MAGENTA: &str = "\x1b[35;2m";
const FAINT_WHITE: &str = "\x1b[37;2m";
const BOLD_YELLOW: &str = "\x1b[33m";
const BOLD_RED: &str = "\x1b[31;1m";

/// Fixed color table for level tags. Fatal shares the error color; the tag
/// character is what distinguishes the two.
pub(crate) const fn color(level: Level) -> &'static str {
    match level {
        Level::Debug => FAINT_MAGENTA,
        Level::Info => FAINT_WHITE,
        Level::Warning => BOLD_YELLOW,
        Level::Error | Level::Fatal => BOLD_RED,
    }
}
