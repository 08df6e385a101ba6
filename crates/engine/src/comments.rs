//! `//` and `/* */` comment removal.
//!
//! Runs after include expansion, so it sees the included text too. String
//! literals are not special: a `//` inside quotes starts a comment as well.

use crate::buffer::SourceBuffer;
use crate::context::RunContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripState {
    #[default]
    Default,
    InLineComment,
    InBlockComment,
}

/// Result of feeding one byte (plus one byte of lookahead) to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: StripState,
    /// Byte to copy to the output, if any.
    pub emit: Option<u8>,
    /// Bytes consumed: 2 for a comment marker, otherwise 1.
    pub consumed: usize,
    /// Whether this step counts as a deleted comment line.
    pub counts_line: bool,
}

impl Step {
    const fn keep(state: StripState, byte: u8) -> Self {
        Self { next: state, emit: Some(byte), consumed: 1, counts_line: false }
    }

    const fn suppress(state: StripState) -> Self {
        Self { next: state, emit: None, consumed: 1, counts_line: false }
    }

    const fn marker(next: StripState, counts_line: bool) -> Self {
        Self { next, emit: None, consumed: 2, counts_line }
    }
}

/// Transition function of the stripper.
pub const fn transition(state: StripState, byte: u8, lookahead: Option<u8>) -> Step {
    match (state, byte, lookahead) {
        (StripState::Default, b'/', Some(b'/')) => Step::marker(StripState::InLineComment, true),
        (StripState::Default, b'/', Some(b'*')) => Step::marker(StripState::InBlockComment, false),
        (StripState::Default, _, _) => Step::keep(StripState::Default, byte),

        (StripState::InLineComment, b'\n', _) => Step::keep(StripState::Default, byte),
        (StripState::InLineComment, _, _) => Step::suppress(StripState::InLineComment),

        (StripState::InBlockComment, b'*', Some(b'/')) => Step::marker(StripState::Default, true),
        (StripState::InBlockComment, b'\n', _) => Step {
            next: StripState::InBlockComment,
            emit: Some(byte),
            consumed: 1,
            counts_line: true,
        },
        (StripState::InBlockComment, _, _) => Step::suppress(StripState::InBlockComment),
    }
}

/// Remove every comment from `buffer`, keeping all line terminators.
///
/// An unterminated block comment swallows the rest of the buffer.
pub fn strip(buffer: SourceBuffer, ctx: &mut RunContext) -> SourceBuffer {
    let bytes = buffer.as_bytes();
    let mut out = SourceBuffer::with_capacity(bytes.len());
    let mut state = StripState::Default;
    let mut deleted = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        let step = transition(state, bytes[i], bytes.get(i + 1).copied());
        if let Some(byte) = step.emit {
            out.push(byte);
        }
        if step.counts_line {
            deleted += 1;
        }
        state = step.next;
        i += step.consumed;
    }

    ctx.counters_mut().comment_lines_deleted += deleted;
    log::debug!("comment removal: {} -> {} bytes, {deleted} comment line(s)", bytes.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strip_str(input: &str) -> (String, usize) {
        let mut ctx = RunContext::new("t.c");
        let out = strip(SourceBuffer::from(input), &mut ctx);
        (out.to_text().into_owned(), ctx.counters().comment_lines_deleted)
    }

    #[test]
    fn line_comment() {
        assert_eq!(strip_str("// hi\nint x;\n"), ("\nint x;\n".to_string(), 1));
        assert_eq!(strip_str("int x; // trailing\n"), ("int x; \n".to_string(), 1));
    }

    #[test]
    fn block_comment_spanning_lines() {
        assert_eq!(strip_str("/* a\nb */\nfloat f;\n"), ("\n\nfloat f;\n".to_string(), 2));
    }

    #[test]
    fn inline_block_comment() {
        assert_eq!(strip_str("int /* note */ x;"), ("int  x;".to_string(), 1));
    }

    #[test]
    fn lone_slash_is_kept() {
        assert_eq!(strip_str("a = b / c;\n"), ("a = b / c;\n".to_string(), 0));
        assert_eq!(strip_str("x /"), ("x /".to_string(), 0));
    }

    #[test]
    fn unterminated_block_consumes_rest() {
        assert_eq!(strip_str("int a;\n/* open\nint b;"), ("int a;\n\n".to_string(), 1));
    }

    #[test]
    fn star_slash_outside_block_is_text() {
        assert_eq!(strip_str("a */ b"), ("a */ b".to_string(), 0));
    }

    #[test]
    fn line_comment_marker_inside_block_is_ignored() {
        assert_eq!(strip_str("/* // */int x;"), ("int x;".to_string(), 1));
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(strip_str("char *u = \"http://x\";\n"), ("char *u = \"http:\n".to_string(), 1));
    }

    #[test]
    fn transition_table() {
        let step = transition(StripState::Default, b'/', Some(b'/'));
        assert_eq!(step.next, StripState::InLineComment);
        assert_eq!(step.consumed, 2);
        assert!(step.counts_line);

        let step = transition(StripState::InBlockComment, b'\n', None);
        assert_eq!(step.emit, Some(b'\n'));
        assert!(step.counts_line);

        let step = transition(StripState::InBlockComment, b'*', None);
        assert_eq!(step.next, StripState::InBlockComment);
        assert_eq!(step.emit, None);
    }

    fn source_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just("int x;".to_string()),
                Just("\n".to_string()),
                Just("// note".to_string()),
                Just("/* block */".to_string()),
                Just("/* multi\nline */".to_string()),
                Just(" a / b ".to_string()),
                "[a-z ;{}()]{0,8}",
            ],
            0..24,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn preserves_newline_count(text in source_text()) {
            let (out, _) = strip_str(&text);
            prop_assert_eq!(bytecount::count(out.as_bytes(), b'\n'), bytecount::count(text.as_bytes(), b'\n'));
        }

        #[test]
        fn second_pass_is_noop(text in source_text()) {
            let (once, _) = strip_str(&text);
            let (twice, deleted) = strip_str(&once);
            prop_assert_eq!(&twice, &once);
            prop_assert_eq!(deleted, 0);
        }
    }
}
