// src/presentation.rs
use std::fmt::Write;
use std::path::Path;

use precompiler_engine::stats::RunResult;
use precompiler_shared_kernel::{
    ErrorContext, IncludeWarning, IncludedFileRecord, InvalidVariableRecord, PresentationResult, ProcessingCounters,
    Result,
};
use serde::Serialize;

use crate::options::ReportFormat;

/// Everything the statistics report shows, borrowed from a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: &'a str,
    pub output: Option<String>,
    pub counters: &'a ProcessingCounters,
    pub valid_vars: usize,
    pub invalid_variables: &'a [InvalidVariableRecord],
    pub included_files: &'a [IncludedFileRecord],
    pub include_warnings: &'a [IncludeWarning],
}

impl<'a> RunReport<'a> {
    pub fn new(result: &'a RunResult, output: Option<&Path>) -> Self {
        let ctx = &result.context;
        Self {
            input: ctx.input_path(),
            output: output.map(|p| p.display().to_string()),
            counters: ctx.counters(),
            valid_vars: ctx.counters().valid_vars(),
            invalid_variables: ctx.invalid_variables(),
            included_files: ctx.included_files(),
            include_warnings: ctx.include_warnings(),
        }
    }
}

pub fn render(report: &RunReport<'_>, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(report)?),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report).context("rendering report")?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Yaml => serde_yaml::to_string(report).context("rendering report"),
    }
}

/// Plain-text report: counters, then one ASCII table per non-empty list.
pub fn render_table(report: &RunReport<'_>) -> PresentationResult<String> {
    let c = report.counters;
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "==== Processing statistics ====")?;
    writeln!(out, "Checked variables: {}", c.checked_vars)?;
    writeln!(out, "Errors detected: {}", c.errors_detected)?;

    if !report.invalid_variables.is_empty() {
        writeln!(out)?;
        writeln!(out, "Invalid identifiers:")?;
        let rows: Vec<[String; 3]> = report
            .invalid_variables
            .iter()
            .map(|r| [r.source_path.clone(), r.line_number.to_string(), r.identifier_text.clone()])
            .collect();
        write_ascii_table(&mut out, ["File", "Line", "Variable"], &rows)?;
    }

    writeln!(out)?;
    writeln!(out, "Comment lines removed: {}", c.comment_lines_deleted)?;
    writeln!(out, "Files included: {}", c.files_included)?;

    if !report.included_files.is_empty() {
        writeln!(out)?;
        writeln!(out, "Included files:")?;
        let rows: Vec<[String; 3]> = report
            .included_files
            .iter()
            .map(|r| [r.path.clone(), r.byte_size.to_string(), r.line_count.to_string()])
            .collect();
        write_ascii_table(&mut out, ["File", "Size", "Lines"], &rows)?;
    }

    writeln!(out)?;
    writeln!(out, "Input file ({}):", report.input)?;
    writeln!(out, "  Size: {} bytes", c.input_size)?;
    writeln!(out, "  Lines: {}", c.input_lines)?;

    writeln!(out)?;
    match &report.output {
        Some(path) => writeln!(out, "Output file ({path}):")?,
        None => writeln!(out, "Output file:")?,
    }
    writeln!(out, "  Size: {} bytes", c.output_size)?;
    writeln!(out, "  Lines: {}", c.output_lines)?;

    writeln!(out)?;
    writeln!(out, "===============================")?;
    Ok(out)
}

/// Columns are two wider than their widest cell; a separator follows the
/// header and every row.
fn write_ascii_table<const N: usize>(
    out: &mut String,
    headers: [&str; N],
    rows: &[[String; N]],
) -> std::fmt::Result {
    let widths: [usize; N] = std::array::from_fn(|col| {
        rows.iter().map(|row| row[col].chars().count()).fold(headers[col].chars().count(), usize::max) + 2
    });

    let separator = |out: &mut String| -> std::fmt::Result {
        for width in widths {
            write!(out, "+{}", "-".repeat(width))?;
        }
        writeln!(out, "+")
    };

    separator(out)?;
    for (header, width) in headers.iter().zip(widths) {
        write!(out, "|{header:<width$}")?;
    }
    writeln!(out, "|")?;
    separator(out)?;

    for row in rows {
        for (cell, width) in row.iter().zip(widths) {
            write!(out, "|{cell:<width$}")?;
        }
        writeln!(out, "|")?;
        separator(out)?;
    }
    Ok(())
}

// Lightweight warning helper so stderr usage stays in one place.
pub fn warn_msg(msg: &str) {
    eprintln!("[warn] {msg}");
}
