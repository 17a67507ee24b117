//! Read-only facade over a PDF path, backed by MuPDF.
//!
//! ```no_run
//! let pdf = yespdf::document("report.pdf");
//! if pdf.is_pdf() {
//!     println!("{} pages", pdf.page_count()?);
//!     for (i, line) in pdf.indexed_lines()?.unwrap_or_default() {
//!         println!("{i:>4} {line}");
//!     }
//! }
//! # Ok::<(), yespdf::EngineError>(())
//! ```

// Re-export the facade API for convenience
pub use yespdf_core::{
    ConfigFile, DocumentFacade, EngineError, ExtractionOptions, LineMode, LineSequence,
    LoadedDocument, PAGE_SEPARATOR, PdfDocument, PdfEngine, load_config, split_lines,
};
pub use yespdf_mupdf::{MupdfDocument, MupdfEngine};

/// The facade wired to the MuPDF engine.
pub type YesPdf = DocumentFacade<MupdfEngine>;

/// Bind `path`, with extraction options taken from the config files.
pub fn document(path: impl Into<String>) -> YesPdf {
    from_config(Some(path.into()))
}

/// A facade with no document bound.
pub fn unbound() -> YesPdf {
    from_config(None)
}

/// Bind an optional path, with extraction options taken from the config
/// files (`.yespdf.toml` in the working directory over the platform config).
pub fn from_config(path: Option<String>) -> YesPdf {
    let options = load_config().extraction_options();
    tracing::debug!(?options, "resolved extraction options");
    with_options(path, &options)
}

/// Bind an optional path with explicit extraction options.
pub fn with_options(path: Option<String>, options: &ExtractionOptions) -> YesPdf {
    DocumentFacade::from_optional(MupdfEngine::from_options(options), path).with_sort(options.sort)
}
