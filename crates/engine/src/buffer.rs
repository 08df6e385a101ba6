//! Owned program text passed between pipeline stages.

use std::borrow::Cow;

use precompiler_shared_kernel::{ByteSize, LineCount};

/// Program text at one pipeline stage.
///
/// Stored as raw bytes: every stage works on ASCII structure and copies any
/// other byte through untouched, so non-UTF-8 input survives the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn size(&self) -> ByteSize {
        ByteSize::of(&self.bytes)
    }

    pub fn line_count(&self) -> LineCount {
        count_lines(&self.bytes)
    }

    /// Iterate over lines, each including its `\n` terminator when present.
    pub fn lines(&self) -> Lines<'_> {
        Lines { rest: &self.bytes }
    }
}

/// Number of `\n` bytes, plus one for a non-empty unterminated final line.
pub fn count_lines(data: &[u8]) -> LineCount {
    let newlines = bytecount::count(data, b'\n');
    let tail = usize::from(data.last().is_some_and(|&b| b != b'\n'));
    LineCount::new(newlines + tail)
}

pub struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = memchr::memchr(b'\n', self.rest).map_or(self.rest.len(), |pos| pos + 1);
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

impl From<Vec<u8>> for SourceBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self { bytes: text.as_bytes().to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_rules() {
        assert_eq!(count_lines(b"").value(), 0);
        assert_eq!(count_lines(b"a").value(), 1);
        assert_eq!(count_lines(b"a\n").value(), 1);
        assert_eq!(count_lines(b"a\nb").value(), 2);
        assert_eq!(count_lines(b"\n\n").value(), 2);
    }

    #[test]
    fn lines_keep_terminators() {
        let buf = SourceBuffer::from("one\ntwo\nthree");
        let lines: Vec<&[u8]> = buf.lines().collect();
        assert_eq!(lines, vec![&b"one\n"[..], &b"two\n"[..], &b"three"[..]]);
    }

    #[test]
    fn lines_of_empty_buffer() {
        assert_eq!(SourceBuffer::new().lines().count(), 0);
    }
}
