use std::io;
use std::path::{Path, PathBuf};

use crate::document::LoadedDocument;
use crate::engine::{EngineError, PdfDocument, PdfEngine};
use crate::lines::{LineMode, LineSequence};
use crate::paths;

/// Read-only view of a PDF path.
///
/// The facade holds a path and an engine, nothing else. Every accessor that
/// needs document content opens the file through the engine, reads what it
/// needs and releases the handle before returning, so two calls may observe
/// different contents if the file changes between them. Use
/// [`load`](Self::load) to take a consistent snapshot instead.
///
/// A facade without a path (or with an empty one) is *unbound*: `is_pdf` is
/// `false`, `page_count` is `0` and every other accessor returns `None`.
#[derive(Debug, Clone)]
pub struct DocumentFacade<E> {
    path: Option<String>,
    engine: E,
    sort: bool,
}

impl<E: PdfEngine> DocumentFacade<E> {
    /// Bind `path` to `engine`.
    pub fn new(engine: E, path: impl Into<String>) -> Self {
        Self::from_optional(engine, Some(path.into()))
    }

    /// A facade with no document bound.
    pub fn unbound(engine: E) -> Self {
        Self::from_optional(engine, None)
    }

    pub fn from_optional(engine: E, path: Option<String>) -> Self {
        Self {
            path: path.filter(|p| !p.is_empty()),
            engine,
            sort: true,
        }
    }

    /// Whether text is extracted in reading order (default `true`).
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// `true` if the bound path ends with `.pdf` (case-sensitive).
    ///
    /// This is a suffix test on the path string; the file is never read.
    pub fn is_pdf(&self) -> bool {
        self.path.as_deref().is_some_and(paths::has_pdf_suffix)
    }

    /// Number of pages, or `0` when unbound.
    ///
    /// Failing to open the document is reported as an error, never as `0`.
    pub fn page_count(&self) -> Result<usize, EngineError> {
        let Some(path) = self.bound_path() else {
            return Ok(0);
        };
        let document = self.engine.open(path)?;
        let count = document.page_count()?;
        tracing::debug!(path = %path.display(), count, "counted pages");
        Ok(count)
    }

    /// Last component of the bound path.
    pub fn base_name(&self) -> Option<&str> {
        self.path.as_deref().map(paths::base_name)
    }

    /// The bound path resolved against the current working directory.
    pub fn absolute_path(&self) -> io::Result<Option<PathBuf>> {
        self.bound_path().map(paths::absolute_path).transpose()
    }

    /// Open the document once and capture the text of every page.
    pub fn load(&self) -> Result<Option<LoadedDocument>, EngineError> {
        self.bound_path()
            .map(|path| LoadedDocument::load(&self.engine, path, self.sort))
            .transpose()
    }

    /// Text of all pages separated by form feeds, or `None` when empty.
    pub fn full_text(&self) -> Result<Option<String>, EngineError> {
        Ok(self.load()?.and_then(|doc| doc.full_text()))
    }

    /// Lines of [`full_text`](Self::full_text) in the requested shape.
    pub fn line_sequence(&self, mode: LineMode) -> Result<Option<LineSequence>, EngineError> {
        Ok(self
            .full_text()?
            .map(|text| LineSequence::from_text(&text, mode)))
    }

    pub fn lines(&self) -> Result<Option<Vec<String>>, EngineError> {
        Ok(self
            .line_sequence(LineMode::Plain)?
            .map(LineSequence::into_lines))
    }

    pub fn indexed_lines(&self) -> Result<Option<Vec<(usize, String)>>, EngineError> {
        Ok(self
            .line_sequence(LineMode::Indexed)?
            .map(LineSequence::into_indexed))
    }

    fn bound_path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new)
    }
}
