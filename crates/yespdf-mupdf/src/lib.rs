use std::path::Path;

use mupdf::{Document, TextPageFlags};

use yespdf_core::{EngineError, ExtractionOptions, PdfDocument, PdfEngine};

/// MuPDF-based implementation of [`PdfEngine`].
///
/// This crate is the sole AGPL island. It isolates the mupdf dependency
/// (which is AGPL-3.0) so that the facade and its tests do not transitively
/// depend on it.
///
/// Header and footer exclusion are off by default, so every block on the
/// page contributes text. When enabled, blocks lying entirely in the top or
/// bottom fraction of the page are skipped (running heads, page numbers).
#[derive(Debug, Clone, Default)]
pub struct MupdfEngine {
    /// Fraction of page height from bottom to exclude as footer (0.0–1.0).
    /// `None` disables footer exclusion.
    footer_exclusion_ratio: Option<f32>,
    /// Fraction of page height from top to exclude as header (0.0–1.0).
    /// `None` disables header exclusion.
    header_exclusion_ratio: Option<f32>,
}

impl MupdfEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine configured from resolved [`ExtractionOptions`].
    pub fn from_options(options: &ExtractionOptions) -> Self {
        let mut engine = Self::new();
        if let Some(ratio) = options.header_exclusion {
            engine = engine.with_header_exclusion(ratio);
        }
        if let Some(ratio) = options.footer_exclusion {
            engine = engine.with_footer_exclusion(ratio);
        }
        engine
    }

    /// Set the footer exclusion ratio. Pass `0.0` to disable.
    pub fn with_footer_exclusion(mut self, ratio: f32) -> Self {
        self.footer_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }

    /// Set the header exclusion ratio. Pass `0.0` to disable.
    pub fn with_header_exclusion(mut self, ratio: f32) -> Self {
        self.header_exclusion_ratio = if ratio > 0.0 { Some(ratio) } else { None };
        self
    }
}

impl PdfEngine for MupdfEngine {
    type Document = MupdfDocument;

    fn open(&self, path: &Path) -> Result<MupdfDocument, EngineError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| EngineError::Open("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| EngineError::Open(e.to_string()))?;
        tracing::debug!(path = path_str, "opened document");

        Ok(MupdfDocument {
            document,
            footer_exclusion_ratio: self.footer_exclusion_ratio,
            header_exclusion_ratio: self.header_exclusion_ratio,
        })
    }
}

/// An open MuPDF document. The underlying handle is released on drop.
pub struct MupdfDocument {
    document: Document,
    footer_exclusion_ratio: Option<f32>,
    header_exclusion_ratio: Option<f32>,
}

/// Text of one block with the bounds used for ordering.
struct BlockText {
    top: f32,
    bottom: f32,
    left: f32,
    text: String,
}

impl MupdfDocument {
    fn page_text(&self, page: &mupdf::Page, sort: bool) -> Result<String, EngineError> {
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(EngineError::extraction)?;

        // Get page bounds for header/footer exclusion
        let page_bounds = page
            .bounds()
            .map_err(EngineError::extraction)?;
        let page_height = page_bounds.y1 - page_bounds.y0;

        let header_threshold = self
            .header_exclusion_ratio
            .map(|r| page_bounds.y0 + page_height * r);
        let footer_threshold = self
            .footer_exclusion_ratio
            .map(|r| page_bounds.y1 - page_height * r);

        let mut blocks: Vec<BlockText> = text_page
            .blocks()
            .map(|block| {
                let bounds = block.bounds();
                let mut text = String::new();
                for line in block.lines() {
                    text.extend(line.chars().map(|c| c.char().unwrap_or('\u{FFFD}')));
                    text.push('\n');
                }
                BlockText {
                    top: bounds.y0,
                    bottom: bounds.y1,
                    left: bounds.x0,
                    text,
                }
            })
            .filter(|block| header_threshold.is_none_or(|t| block.bottom > t))
            .filter(|block| footer_threshold.is_none_or(|t| block.top < t))
            .collect();

        // Reading order: bottom edge first, then left edge.
        if sort {
            blocks.sort_by(|a, b| {
                a.bottom
                    .total_cmp(&b.bottom)
                    .then(a.left.total_cmp(&b.left))
            });
        }

        Ok(blocks.into_iter().map(|b| b.text).collect())
    }
}

impl PdfDocument for MupdfDocument {
    fn page_count(&self) -> Result<usize, EngineError> {
        let count = self
            .document
            .page_count()
            .map_err(EngineError::extraction)?;
        usize::try_from(count)
            .map_err(|_| EngineError::Extraction(format!("invalid page count {count}")))
    }

    fn page_texts(&self, sort: bool) -> Result<Vec<String>, EngineError> {
        let mut pages_text = Vec::new();

        for page_result in self
            .document
            .pages()
            .map_err(EngineError::extraction)?
        {
            let page = page_result.map_err(EngineError::extraction)?;
            pages_text.push(self.page_text(&page, sort)?);
        }

        Ok(pages_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MupdfEngine::new().open(&dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(EngineError::Open(_))));
    }

    #[test]
    fn zero_ratio_disables_exclusion() {
        let engine = MupdfEngine::new()
            .with_header_exclusion(0.0)
            .with_footer_exclusion(0.05);
        assert_eq!(engine.header_exclusion_ratio, None);
        assert_eq!(engine.footer_exclusion_ratio, Some(0.05));
    }

    #[test]
    fn options_carry_over() {
        let options = ExtractionOptions {
            sort: false,
            header_exclusion: Some(0.04),
            footer_exclusion: None,
        };
        let engine = MupdfEngine::from_options(&options);
        assert_eq!(engine.header_exclusion_ratio, Some(0.04));
        assert_eq!(engine.footer_exclusion_ratio, None);
    }
}
