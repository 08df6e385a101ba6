// src/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::options::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "precompiler",
    version = crate::VERSION,
    about = "Expands #include directives, strips comments and checks declared identifiers"
)]
pub struct Args {
    /// Source file to process
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub input: PathBuf,

    /// Write the processed source here instead of standard output
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print processing statistics after the source
    #[arg(short, long)]
    pub verbose: bool,

    /// Statistics format
    #[arg(long, value_enum, default_value = "table")]
    pub format: ReportFormat,

    /// Fail when an included file cannot be read
    #[arg(long)]
    pub strict: bool,

    /// Directory that relative include paths are resolved against
    #[arg(long, value_name = "DIR")]
    pub include_root: Option<PathBuf>,
}
