// crates/shared-kernel/src/value_objects/records.rs
use serde::{Deserialize, Serialize};

use super::counts::{ByteSize, LineCount};

/// A file pulled in by an `#include` directive, recorded on first inclusion only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludedFileRecord {
    /// Path exactly as written between the directive's delimiters.
    pub path: String,
    pub byte_size: ByteSize,
    pub line_count: LineCount,
}

impl IncludedFileRecord {
    pub fn new(path: impl Into<String>, byte_size: ByteSize, line_count: LineCount) -> Self {
        Self { path: path.into(), byte_size, line_count }
    }
}

/// A declared name that failed identifier validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidVariableRecord {
    pub source_path: String,
    /// 1-based line in the include-expanded buffer.
    pub line_number: usize,
    pub identifier_text: String,
}

impl InvalidVariableRecord {
    pub fn new(source_path: impl Into<String>, line_number: usize, identifier_text: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            line_number,
            identifier_text: identifier_text.into(),
        }
    }
}

/// An `#include` target that could not be loaded; the directive line was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeWarning {
    pub path: String,
    pub reason: String,
}

impl IncludeWarning {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), reason: reason.into() }
    }
}
