// crates/shared-kernel/tests/error_context.rs
use std::io;
use std::path::PathBuf;

use precompiler_shared_kernel::{ErrorContext, InfrastructureError, PrecompilerError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(PrecompilerError::from)
        .context("writing output")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing output"));
    assert!(display.contains("Output error:"));
}

#[test]
fn file_write_error_names_path() {
    let err: std::result::Result<(), InfrastructureError> = Err(InfrastructureError::FileWrite {
        path: PathBuf::from("out.c"),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    });

    let wrapped = err.with_context(|| "saving result".to_string()).unwrap_err();
    let display = wrapped.to_string();
    assert!(display.starts_with("saving result: "));
    assert!(display.contains("'out.c'"));
}
