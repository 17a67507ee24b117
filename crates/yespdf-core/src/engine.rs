use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
}

impl EngineError {
    /// Failure reading from a document that opened successfully.
    pub fn extraction(e: impl std::fmt::Display) -> Self {
        Self::Extraction(e.to_string())
    }
}

/// Trait for the PDF engine a [`DocumentFacade`](crate::DocumentFacade)
/// delegates to.
///
/// Implementors own every PDF concern (container parsing, content stream
/// decoding, text layout). The facade only ever opens a document, asks it
/// for its page count or page texts, and drops it again.
pub trait PdfEngine {
    /// Open handle on a single document. Dropping it releases the engine's
    /// resources.
    type Document: PdfDocument;

    /// Open the document at `path`.
    fn open(&self, path: &Path) -> Result<Self::Document, EngineError>;
}

/// An opened document, scoped to a single facade call.
pub trait PdfDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<usize, EngineError>;

    /// Text of every page in document order.
    ///
    /// With `sort` set the engine reorders text blocks into natural reading
    /// order; otherwise they come out in content-stream order.
    fn page_texts(&self, sort: bool) -> Result<Vec<String>, EngineError>;
}

impl<E: PdfEngine + ?Sized> PdfEngine for &E {
    type Document = E::Document;

    fn open(&self, path: &Path) -> Result<Self::Document, EngineError> {
        (**self).open(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_are_open_or_extraction() {
        let errors = [
            EngineError::Open("no such file".into()),
            EngineError::extraction("bad xref"),
        ];
        let messages: Vec<String> = errors
            .iter()
            .map(|e| match e {
                EngineError::Open(msg) => format!("open: {msg}"),
                EngineError::Extraction(msg) => format!("extract: {msg}"),
            })
            .collect();
        assert_eq!(messages, vec!["open: no such file", "extract: bad xref"]);
        assert_eq!(
            errors[1].to_string(),
            "failed to extract text: bad xref"
        );
    }
}
