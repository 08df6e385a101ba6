// src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the `--verbose` statistics are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Yaml,
}
