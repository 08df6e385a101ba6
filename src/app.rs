// src/app.rs
use anyhow::{Context, Result};

use crate::config::Config;
use crate::output;
use crate::presentation::{self, RunReport};

/// Process the configured input, write the result and, when verbose, the
/// statistics report.
pub fn run(config: &Config) -> Result<()> {
    let result = precompiler_engine::run(&config.pipeline)
        .with_context(|| format!("failed to process {}", config.pipeline.input.display()))?;

    for warning in result.context.include_warnings() {
        presentation::warn_msg(&format!("cannot include file {}: {}", warning.path, warning.reason));
    }

    output::write_source(config.output.as_deref(), result.output.as_bytes())?;

    if config.verbose {
        let report = RunReport::new(&result, config.output.as_deref());
        let rendered = presentation::render(&report, config.format).context("failed to emit statistics")?;
        output::write_stdout(rendered.as_bytes())?;
    }
    Ok(())
}
