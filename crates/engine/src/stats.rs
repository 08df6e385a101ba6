use precompiler_shared_kernel::ProcessingCounters;
use serde::Serialize;

use crate::buffer::SourceBuffer;
use crate::context::RunContext;

/// Outcome of one pipeline run: the processed text plus everything recorded
/// while producing it.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    #[serde(skip)]
    pub output: SourceBuffer,
    #[serde(flatten)]
    pub context: RunContext,
}

impl RunResult {
    pub fn counters(&self) -> &ProcessingCounters {
        self.context.counters()
    }

    /// True when the declaration scan found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.context.invalid_variables().is_empty()
    }
}
