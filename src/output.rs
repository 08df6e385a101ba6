// src/output.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use precompiler_shared_kernel::{InfraResult, InfrastructureError};

/// Write the processed source to `path`, or to standard output when `None`.
///
/// A file target is created or truncated.
pub fn write_source(path: Option<&Path>, data: &[u8]) -> InfraResult<()> {
    match path {
        Some(path) => write_file(path, data),
        None => write_stdout(data),
    }
}

pub fn write_file(path: &Path, data: &[u8]) -> InfraResult<()> {
    let file_err = |source| InfrastructureError::FileWrite { path: path.to_path_buf(), source };

    let mut writer = File::create(path).map(BufWriter::new).map_err(file_err)?;
    writer.write_all(data).map_err(file_err)?;
    writer.flush().map_err(file_err)
}

pub fn write_stdout(data: &[u8]) -> InfraResult<()> {
    let mut out = io::stdout().lock();
    out.write_all(data).map_err(|source| InfrastructureError::StdoutWrite { source })?;
    out.flush().map_err(|source| InfrastructureError::StdoutWrite { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_is_truncated_and_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        std::fs::write(&path, "old content that is longer\n").unwrap();

        write_source(Some(&path), b"int x;\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "int x;\n");
    }

    #[test]
    fn unwritable_target_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.c");

        let err = write_file(&path, b"x").unwrap_err();
        assert!(matches!(err, InfrastructureError::FileWrite { .. }));
        assert!(err.to_string().contains("out.c"));
    }
}
