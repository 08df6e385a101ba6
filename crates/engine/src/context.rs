use std::collections::HashSet;
use std::path::{Path, PathBuf};

use precompiler_shared_kernel::{IncludeWarning, IncludedFileRecord, InvalidVariableRecord, ProcessingCounters};
use serde::Serialize;

/// State shared by the pipeline stages for one run.
///
/// Each stage borrows the context mutably while it runs; counters and lists
/// only grow.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunContext {
    input_path: String,
    counters: ProcessingCounters,
    included_files: Vec<IncludedFileRecord>,
    invalid_variables: Vec<InvalidVariableRecord>,
    include_warnings: Vec<IncludeWarning>,
    #[serde(skip)]
    seen_paths: HashSet<PathBuf>,
}

impl RunContext {
    pub fn new(input_path: impl Into<String>) -> Self {
        Self { input_path: input_path.into(), ..Self::default() }
    }

    /// Path of the top-level input; every diagnostic is attributed to it.
    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    pub fn counters(&self) -> &ProcessingCounters {
        &self.counters
    }

    pub(crate) fn counters_mut(&mut self) -> &mut ProcessingCounters {
        &mut self.counters
    }

    pub fn included_files(&self) -> &[IncludedFileRecord] {
        &self.included_files
    }

    pub fn invalid_variables(&self) -> &[InvalidVariableRecord] {
        &self.invalid_variables
    }

    pub fn include_warnings(&self) -> &[IncludeWarning] {
        &self.include_warnings
    }

    pub fn is_included(&self, path: &Path) -> bool {
        self.seen_paths.contains(path)
    }

    /// Register a first-time inclusion of `path`; callers check
    /// [`is_included`](Self::is_included) before loading.
    pub(crate) fn record_inclusion(&mut self, path: PathBuf, record: IncludedFileRecord) {
        self.seen_paths.insert(path);
        self.included_files.push(record);
        self.counters.files_included += 1;
    }

    pub(crate) fn record_invalid_variable(&mut self, line_number: usize, identifier: impl Into<String>) {
        let record = InvalidVariableRecord::new(self.input_path.clone(), line_number, identifier);
        log::trace!("invalid identifier {:?} at {}:{}", record.identifier_text, record.source_path, line_number);
        self.invalid_variables.push(record);
        self.counters.errors_detected += 1;
    }

    pub(crate) fn record_include_warning(&mut self, warning: IncludeWarning) {
        self.include_warnings.push(warning);
    }
}
