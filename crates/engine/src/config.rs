use derive_builder::Builder;
use std::path::PathBuf;

use crate::error::EngineError;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), build_fn(error = "EngineError"))]
pub struct PipelineOptions {
    /// Top-level source file.
    pub input: PathBuf,
    /// Base directory for include paths; the working directory when unset.
    #[builder(default)]
    pub include_root: Option<PathBuf>,
    /// Abort when an include target cannot be read.
    #[builder(default)]
    pub strict_includes: bool,
}

impl From<derive_builder::UninitializedFieldError> for EngineError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(err.to_string())
    }
}
