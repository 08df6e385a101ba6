// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfraResult, InfrastructureError, PrecompilerError, PresentationError, PresentationResult,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    ByteSize, IncludeWarning, IncludedFileRecord, InvalidVariableRecord, LineCount, ProcessingCounters,
};
