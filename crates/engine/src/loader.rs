//! Content loading port and its adapters.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use precompiler_shared_kernel::{ByteSize, LineCount};

use crate::buffer::{SourceBuffer, count_lines};

/// A loaded resource together with the metadata recorded for it.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub buffer: SourceBuffer,
    pub size: ByteSize,
    pub lines: LineCount,
}

impl LoadedSource {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let size = ByteSize::of(&bytes);
        let lines = count_lines(&bytes);
        Self { buffer: SourceBuffer::from(bytes), size, lines }
    }
}

/// Reads a named resource into memory.
pub trait ContentLoader {
    fn load(&self, path: &Path) -> io::Result<LoadedSource>;
}

/// Filesystem loader. Relative paths resolve against `root` when set,
/// otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FsLoader {
    root: Option<PathBuf>,
}

impl FsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ContentLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<LoadedSource> {
        let bytes = std::fs::read(self.resolve(path))?;
        Ok(LoadedSource::from_bytes(bytes))
    }
}

/// In-memory loader keyed by path, mostly for tests and benchmarks.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }
}

impl ContentLoader for MemoryLoader {
    fn load(&self, path: &Path) -> io::Result<LoadedSource> {
        self.files
            .get(path)
            .cloned()
            .map(LoadedSource::from_bytes)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path.display())))
    }
}
