// src/main.rs
use clap::Parser;
use precompiler::args::Args;
use precompiler::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let outcome = Config::try_from(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| precompiler::app::run(&config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
