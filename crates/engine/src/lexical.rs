//! Byte classes and identifier rules shared by the stages.

/// Keywords that start a declaration the scanner checks.
pub const TYPE_KEYWORDS: [&str; 12] = [
    "int", "char", "float", "double", "void", "long", "short", "unsigned", "signed", "struct", "enum", "union",
];

/// Whitespace in the C locale sense (includes vertical tab and form feed).
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_type_keyword(token: &[u8]) -> bool {
    TYPE_KEYWORDS.iter().any(|kw| kw.as_bytes() == token)
}

/// A valid identifier is non-empty, starts with an ASCII letter or `_`, and
/// continues with ASCII letters, digits or `_`.
pub fn is_valid_identifier(name: &[u8]) -> bool {
    match name.split_first() {
        Some((&first, rest)) => {
            (first.is_ascii_alphabetic() || first == b'_')
                && rest.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'_')
        }
        None => false,
    }
}
