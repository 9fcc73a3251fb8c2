/// Rewrites a record body for emission: NUL and carriage-return characters
/// are dropped and every embedded newline gains a two-space indent so
/// continuation lines sit under the level tag.
pub(crate) fn sanitize_body(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    for ch in body.chars() {
        match ch {
            '\0' | '\r' => {}
            '\n' => out.push_str("\n  "),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize_body("hello world"), "hello world");
    }

    #[test]
    fn empty_body_stays_empty() {
        assert_eq!(sanitize_body(""), "");
    }

    #[test]
    fn newlines_gain_continuation_indent() {
        assert_eq!(sanitize_body("line1\nline2"), "line1\n  line2");
        assert_eq!(sanitize_body("a\nb\nc"), "a\n  b\n  c");
    }

    #[test]
    fn trailing_newline_is_indented_too() {
        // A trailing embedded newline still opens a continuation line; the
        // line terminator itself is appended at emission time.
        assert_eq!(sanitize_body("tail\n"), "tail\n  ");
    }

    #[test]
    fn carriage_returns_are_dropped() {
        assert_eq!(sanitize_body("dos\r\nline"), "dos\n  line");
        assert_eq!(sanitize_body("\rleading"), "leading");
    }

    #[test]
    fn nul_bytes_are_dropped() {
        assert_eq!(sanitize_body("a\0b"), "ab");
        assert_eq!(sanitize_body("\0\0"), "");
    }

    #[test]
    fn other_control_characters_are_preserved() {
        assert_eq!(sanitize_body("col1\tcol2"), "col1\tcol2");
        assert_eq!(sanitize_body("\x1b[1mbold\x1b[0m"), "\x1b[1mbold\x1b[0m");
    }

    #[test]
    fn unicode_is_preserved() {
        assert_eq!(sanitize_body("héllo → wörld"), "héllo → wörld");
    }
}
