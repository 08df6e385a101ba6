//! `#include` expansion.
//!
//! Each directive naming a file not seen before in the run is replaced by that
//! file's content, itself expanded depth first. A path is registered before
//! its content is expanded, so `A -> B -> A` stops at the second `A`.

use std::path::PathBuf;

use precompiler_shared_kernel::{IncludeWarning, IncludedFileRecord};

use crate::buffer::SourceBuffer;
use crate::context::RunContext;
use crate::error::{EngineError, Result};
use crate::lexical::is_space;
use crate::loader::ContentLoader;

const DIRECTIVE: &[u8] = b"#include";

/// What a single line turned out to be.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// `#include` with a delimited filename.
    Include(&'a [u8]),
    /// Anything else, including directives without a delimiter pair.
    Text,
}

fn classify(line: &[u8]) -> Line<'_> {
    let is_directive = line.starts_with(DIRECTIVE) && line.get(DIRECTIVE.len()).copied().is_some_and(is_space);
    if !is_directive {
        return Line::Text;
    }
    filename(line).map_or(Line::Text, Line::Include)
}

/// Path named by a directive, taken byte for byte where the platform allows.
fn include_path(raw: &[u8]) -> PathBuf {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        PathBuf::from(std::ffi::OsStr::from_bytes(raw))
    }
    #[cfg(not(unix))]
    {
        PathBuf::from(String::from_utf8_lossy(raw).into_owned())
    }
}

/// Text between the first `"`/`<` and the next `"`/`>` on the line.
fn filename(line: &[u8]) -> Option<&[u8]> {
    let open = memchr::memchr2(b'"', b'<', line)?;
    let start = open + 1;
    let len = memchr::memchr2(b'"', b'>', &line[start..])?;
    Some(&line[start..start + len])
}

pub struct IncludeResolver<'a> {
    loader: &'a dyn ContentLoader,
    strict: bool,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(loader: &'a dyn ContentLoader) -> Self {
        Self { loader, strict: false }
    }

    /// Treat an unreadable include target as fatal instead of dropping the line.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Expand every first-occurrence include in `buffer`.
    ///
    /// # Errors
    ///
    /// Only in strict mode, when an include target cannot be loaded.
    pub fn resolve(&self, buffer: SourceBuffer, ctx: &mut RunContext) -> Result<SourceBuffer> {
        let mut out = SourceBuffer::with_capacity(buffer.len());
        self.expand_into(&buffer, ctx, &mut out)?;
        log::debug!(
            "include expansion: {} -> {} bytes, {} file(s) included",
            buffer.len(),
            out.len(),
            ctx.counters().files_included
        );
        Ok(out)
    }

    fn expand_into(&self, source: &SourceBuffer, ctx: &mut RunContext, out: &mut SourceBuffer) -> Result<()> {
        for line in source.lines() {
            match classify(line) {
                Line::Text => out.extend_from_slice(line),
                Line::Include(raw) => {
                    let path = include_path(raw);
                    if ctx.is_included(&path) {
                        log::debug!("skipping already included '{}'", path.display());
                        continue;
                    }
                    self.include(path, String::from_utf8_lossy(raw).into_owned(), ctx, out)?;
                }
            }
        }
        Ok(())
    }

    /// `name` is the printable form of `path`, used in records and warnings.
    fn include(&self, path: PathBuf, name: String, ctx: &mut RunContext, out: &mut SourceBuffer) -> Result<()> {
        let loaded = match self.loader.load(&path) {
            Ok(loaded) => loaded,
            Err(source) if self.strict => return Err(EngineError::IncludeFailed { path: name, source }),
            Err(source) => {
                log::warn!("cannot include file {name}: {source}");
                ctx.record_include_warning(IncludeWarning::new(name, source.to_string()));
                return Ok(());
            }
        };

        ctx.record_inclusion(path, IncludedFileRecord::new(name, loaded.size, loaded.lines));
        self.expand_into(&loaded.buffer, ctx, out)
    }
}
