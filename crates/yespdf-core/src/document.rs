use std::path::{Path, PathBuf};

use crate::engine::{EngineError, PdfDocument, PdfEngine};
use crate::lines::{LineMode, LineSequence};

/// Separator placed between the texts of consecutive pages.
pub const PAGE_SEPARATOR: char = '\u{0C}';

/// Snapshot of a document's text taken with a single engine open.
///
/// Every accessor works on the captured page texts, so repeated calls agree
/// with each other even if the file changes on disk afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    source: PathBuf,
    pages: Vec<String>,
}

impl LoadedDocument {
    pub fn new(source: impl Into<PathBuf>, pages: Vec<String>) -> Self {
        Self {
            source: source.into(),
            pages,
        }
    }

    /// Open `path` with `engine`, extract every page, and release the handle.
    pub fn load<E: PdfEngine + ?Sized>(
        engine: &E,
        path: &Path,
        sort: bool,
    ) -> Result<Self, EngineError> {
        let document = engine.open(path)?;
        let pages = document.page_texts(sort)?;
        tracing::debug!(
            path = %path.display(),
            pages = pages.len(),
            "extracted page texts"
        );
        Ok(Self::new(path, pages))
    }

    /// Path the snapshot was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// All pages joined by [`PAGE_SEPARATOR`], or `None` when that is empty.
    pub fn full_text(&self) -> Option<String> {
        let mut buf = [0; 4];
        let separator: &str = PAGE_SEPARATOR.encode_utf8(&mut buf);
        let text = self.pages.join(separator);
        if text.is_empty() { None } else { Some(text) }
    }

    /// Lines of [`full_text`](Self::full_text) in the requested shape.
    pub fn line_sequence(&self, mode: LineMode) -> Option<LineSequence> {
        self.full_text().map(|text| LineSequence::from_text(&text, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pages: &[&str]) -> LoadedDocument {
        LoadedDocument::new("sample.pdf", pages.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn pages_joined_with_form_feed() {
        let d = doc(&["Hello", "World", "!"]);
        assert_eq!(d.full_text().as_deref(), Some("Hello\x0cWorld\x0c!"));
        assert_eq!(d.page_count(), 3);
    }

    #[test]
    fn separator_count_is_pages_minus_one() {
        let d = doc(&["a\n", "b\n", "c\n", "d\n"]);
        let text = d.full_text().unwrap();
        assert_eq!(text.matches(PAGE_SEPARATOR).count(), 3);
    }

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(doc(&[]).full_text(), None);
        assert_eq!(doc(&[""]).full_text(), None);
        assert_eq!(doc(&[""]).line_sequence(LineMode::Plain), None);
        assert_eq!(doc(&[""]).line_sequence(LineMode::Indexed), None);
    }

    #[test]
    fn blank_pages_still_leave_separators() {
        // Two empty pages join to a lone form feed, which is not empty.
        let d = doc(&["", ""]);
        assert_eq!(d.full_text().as_deref(), Some("\x0c"));
        assert_eq!(
            d.line_sequence(LineMode::Plain),
            Some(LineSequence::Lines(vec![String::new()]))
        );
    }

    #[test]
    fn page_text_by_index() {
        let d = doc(&["one", "two"]);
        assert_eq!(d.page_text(1), Some("two"));
        assert_eq!(d.page_text(2), None);
        assert_eq!(d.source(), Path::new("sample.pdf"));
    }
}
