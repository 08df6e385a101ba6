//! Lexical audit of variable declarations.
//!
//! The scanner does not parse C. It walks the buffer once, watches for a type
//! keyword right after a statement boundary (`;`, `{`, `}` or start of input),
//! and checks every name declared after it. The buffer itself is passed
//! through untouched.

use crate::buffer::SourceBuffer;
use crate::context::RunContext;
use crate::lexical::{is_space, is_type_keyword, is_valid_identifier};

/// Longest collected name that is still checked.
const MAX_NAME_LEN: usize = 255;

/// Check every declared name in `buffer`, recording invalid ones in `ctx`.
pub fn scan(buffer: SourceBuffer, ctx: &mut RunContext) -> SourceBuffer {
    let checked_before = ctx.counters().checked_vars;
    let errors_before = ctx.counters().errors_detected;

    DeclarationScanner::new(buffer.as_bytes()).run(ctx);

    log::debug!(
        "declaration scan: {} name(s) checked, {} invalid",
        ctx.counters().checked_vars - checked_before,
        ctx.counters().errors_detected - errors_before
    );
    buffer
}

struct DeclarationScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    boundary_closed: bool,
    in_paren: bool,
}

impl<'a> DeclarationScanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0, line: 1, boundary_closed: true, in_paren: false }
    }

    /// Byte at `index`, or `None` past the end. NUL is an ordinary byte.
    #[inline]
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.byte_at(self.pos)
    }

    /// Step forward, counting the line terminator the cursor lands on.
    fn advance(&mut self) {
        self.pos += 1;
        if self.current() == Some(b'\n') {
            self.line += 1;
        }
    }

    fn run(&mut self, ctx: &mut RunContext) {
        while let Some(byte) = self.current() {
            match byte {
                b'\n' => self.line += 1,
                b';' | b'{' | b'}' => self.boundary_closed = true,
                b'(' => self.in_paren = true,
                _ => {}
            }

            if self.boundary_closed && byte.is_ascii_alphabetic() {
                self.declaration(ctx);
            }

            if self.pos < self.bytes.len() {
                self.pos += 1;
            }
        }
    }

    /// Handle a candidate declaration starting at the cursor. On return the
    /// cursor sits on the byte that ended the type token or the last name.
    fn declaration(&mut self, ctx: &mut RunContext) {
        let type_start = self.pos;
        while self.current().is_some_and(|b| b.is_ascii_alphanumeric()) {
            self.advance();
        }
        if !is_type_keyword(&self.bytes[type_start..self.pos]) {
            return;
        }

        loop {
            while self.current().is_some_and(|b| is_space(b) || b == b'*') {
                self.advance();
            }

            let (name_start, more) = self.collect_name();
            let bytes = self.bytes;
            let name = self
                .pos
                .checked_sub(name_start)
                .filter(|len| (1..=MAX_NAME_LEN).contains(len))
                .map(|_| &bytes[name_start..self.pos]);

            if let Some(name) = name {
                ctx.counters_mut().checked_vars += 1;
                if !is_valid_identifier(name) {
                    ctx.record_invalid_variable(self.line, String::from_utf8_lossy(name));
                }
                self.boundary_closed = !more;
            }

            if !more {
                break;
            }
            if self.pos < self.bytes.len() {
                self.advance();
            }
        }
    }

    /// Collect one declared name. Returns where it starts and whether a `,`
    /// announced another name on the same declaration.
    ///
    /// A `)` met inside an open parenthesis steps the cursor back one byte
    /// and closes the parenthesis, so the name ends one byte before it.
    fn collect_name(&mut self) -> (usize, bool) {
        let start = self.pos;
        let mut more = false;
        while let Some(byte) = self.current() {
            if matches!(byte, b',' | b';' | b'=' | b'(' | b'[' | b']') {
                break;
            }
            if self.byte_at(self.pos + 1) == Some(b',') {
                more = true;
            }
            if byte == b')' && self.in_paren {
                self.pos -= 1;
                self.in_paren = false;
                break;
            }
            self.advance();
        }
        (start, more)
    }
}
