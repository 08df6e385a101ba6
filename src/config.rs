// src/config.rs
use derive_builder::Builder;
use precompiler_engine::config::{PipelineOptions, PipelineOptionsBuilder};
use std::path::PathBuf;

use crate::args::Args;
use crate::error::AppError;
use crate::options::ReportFormat;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError"))]
pub struct Config {
    pub pipeline: PipelineOptions,
    /// Destination of the processed source; standard output when unset.
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub verbose: bool,
    #[builder(default)]
    pub format: ReportFormat,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let pipeline = PipelineOptionsBuilder::default()
            .input(args.input)
            .include_root(args.include_root)
            .strict_includes(args.strict)
            .build()?;

        ConfigBuilder::default()
            .pipeline(pipeline)
            .output(args.output)
            .verbose(args.verbose)
            .format(args.format)
            .build()
    }
}
