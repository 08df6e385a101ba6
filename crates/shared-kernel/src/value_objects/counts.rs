// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

/// Number of lines in a buffer: one per `\n`, plus one for an unterminated tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineCount(usize);

impl LineCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Size of a buffer in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct ByteSize(u64);

impl ByteSize {
    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Size of an in-memory byte slice.
    pub fn of(data: &[u8]) -> Self {
        Self(data.len() as u64)
    }
}

impl Default for ByteSize {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

mod display {
    use std::fmt;

    use super::{ByteSize, LineCount};

    impl fmt::Display for LineCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    impl fmt::Display for ByteSize {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }
}
