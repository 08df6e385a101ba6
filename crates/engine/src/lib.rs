// crates/engine/src/lib.rs
pub mod buffer;
pub mod comments;
pub mod config;
pub mod context;
pub mod declarations;
pub mod error;
pub mod include;
pub mod lexical;
pub mod loader;
pub mod stats;

use crate::buffer::SourceBuffer;
use crate::config::PipelineOptions;
use crate::context::RunContext;
use crate::error::{EngineError, Result};
use crate::include::IncludeResolver;
use crate::loader::{ContentLoader, FsLoader, LoadedSource};
use crate::stats::RunResult;

/// Run the full pipeline on `options.input` from the filesystem.
///
/// Include paths resolve against `options.include_root` when set, otherwise
/// against the working directory.
///
/// # Errors
///
/// Returns an error if the input cannot be read, or if an include target
/// cannot be read while `strict_includes` is set.
pub fn run(options: &PipelineOptions) -> Result<RunResult> {
    let bytes = std::fs::read(&options.input)
        .map_err(|source| EngineError::FileRead { path: options.input.clone(), source })?;
    let loader = options.include_root.clone().map_or_else(FsLoader::new, FsLoader::with_root);
    let input_path = options.input.display().to_string();
    process(&input_path, LoadedSource::from_bytes(bytes), &loader, options.strict_includes)
}

/// Run the pipeline on an already loaded top-level source.
///
/// Stages run in a fixed order: include expansion, comment removal, then the
/// declaration scan over the fully expanded text.
///
/// # Errors
///
/// Only in strict mode, when an include target cannot be loaded.
pub fn process(
    input_path: &str,
    source: LoadedSource,
    loader: &dyn ContentLoader,
    strict_includes: bool,
) -> Result<RunResult> {
    let mut ctx = RunContext::new(input_path);
    ctx.counters_mut().input_size = source.size;
    ctx.counters_mut().input_lines = source.lines;
    log::debug!("processing '{input_path}' ({} bytes, {} lines)", source.size, source.lines);

    let expanded = IncludeResolver::new(loader).strict(strict_includes).resolve(source.buffer, &mut ctx)?;
    let stripped = comments::strip(expanded, &mut ctx);
    let output: SourceBuffer = declarations::scan(stripped, &mut ctx);

    ctx.counters_mut().output_size = output.size();
    ctx.counters_mut().output_lines = output.line_count();
    Ok(RunResult { output, context: ctx })
}
