//! A loaded source file plus its running diagnostic counters.

use std::path::{Path, PathBuf};

use crate::diagnostics::Diagnostics;
use crate::Error;

/// Bytes of one `.dil` source file, its path, and the diagnostics
/// accumulated against it by parsing and analysis.
///
/// A source view is created by the loader (outside this crate's core, but
/// [`SourceView::load`] provides a small reference implementation) and is
/// exclusive to one file — there is no shared mutable state between the
/// source views of different files, so a driver may process many in
/// parallel.
#[derive(Debug, Clone)]
pub struct SourceView {
    path: PathBuf,
    bytes: Vec<u8>,
    diagnostics: Diagnostics,
}

impl SourceView {
    /// Builds a source view directly from already-decoded bytes, bypassing
    /// the `.dil`-extension and file-existence checks `load` performs.
    /// Mainly useful for tests and for callers with their own loader.
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self { path: path.into(), bytes, diagnostics: Diagnostics::new() }
    }

    /// Reads `path` and validates it as UTF-8. Does not enforce the
    /// `.dil` extension policy — that is the driver's concern; this is
    /// offered as the minimal loader the core needs to be runnable
    /// standalone.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        if std::str::from_utf8(&raw).is_err() {
            return Err(Error::NonUtf8 { path: path.to_path_buf() });
        }
        Ok(Self::new(path.to_path_buf(), raw))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Splits into a read-only view of the bytes and a mutable handle to
    /// the diagnostics, so a parser can hold both without the two
    /// borrows conflicting. The fields are disjoint; only the bytes need
    /// read access while parsing runs.
    pub(crate) fn split_for_parsing(&mut self) -> (&[u8], &mut Diagnostics) {
        (&self.bytes, &mut self.diagnostics)
    }

    pub fn errors(&self) -> u32 {
        self.diagnostics.error_count()
    }

    pub fn warnings(&self) -> u32 {
        self.diagnostics.warning_count()
    }

    /// Eligible for code generation: zero errors.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_clean()
    }
}
