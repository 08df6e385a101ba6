// crates/shared-kernel/src/value_objects/counters.rs
use serde::{Deserialize, Serialize};

use super::counts::{ByteSize, LineCount};

/// Totals accumulated over one run. Stages only ever increase them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingCounters {
    pub checked_vars: usize,
    pub errors_detected: usize,
    pub comment_lines_deleted: usize,
    pub files_included: usize,
    pub input_lines: LineCount,
    pub input_size: ByteSize,
    pub output_lines: LineCount,
    pub output_size: ByteSize,
}

impl ProcessingCounters {
    pub const fn new() -> Self {
        Self {
            checked_vars: 0,
            errors_detected: 0,
            comment_lines_deleted: 0,
            files_included: 0,
            input_lines: LineCount::zero(),
            input_size: ByteSize::zero(),
            output_lines: LineCount::zero(),
            output_size: ByteSize::zero(),
        }
    }

    /// Number of declared names that passed validation.
    pub const fn valid_vars(&self) -> usize {
        self.checked_vars.saturating_sub(self.errors_detected)
    }
}
