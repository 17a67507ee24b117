//! In-memory engine for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::{EngineError, PdfDocument, PdfEngine};

/// What the mock engine finds at a path.
#[derive(Clone, Debug)]
pub enum MockFile {
    /// A readable document with one string per page.
    Pages(Vec<String>),
    /// Opening fails with this message.
    Corrupt(String),
    /// Opening succeeds with this many pages but extracting text fails.
    Unreadable { pages: usize, message: String },
}

impl MockFile {
    pub fn pages<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        Self::Pages(pages.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Default)]
struct MockState {
    opens: AtomicUsize,
    live_handles: AtomicUsize,
    sort_requests: Mutex<Vec<bool>>,
}

/// A hand-rolled [`PdfEngine`] serving documents from a map.
///
/// Paths not in the map fail to open, like a missing file. The mock counts
/// opens and currently live handles so tests can check that every handle is
/// dropped.
#[derive(Clone, Debug, Default)]
pub struct MockEngine {
    files: HashMap<PathBuf, MockFile>,
    state: Arc<MockState>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, file: MockFile) -> Self {
        self.files.insert(path.into(), file);
        self
    }

    /// How many times `open()` has been called.
    pub fn open_count(&self) -> usize {
        self.state.opens.load(Ordering::SeqCst)
    }

    /// Handles opened and not yet dropped.
    pub fn live_handles(&self) -> usize {
        self.state.live_handles.load(Ordering::SeqCst)
    }

    /// The `sort` flag of every `page_texts()` call so far.
    pub fn sort_requests(&self) -> Vec<bool> {
        self.state
            .sort_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl PdfEngine for MockEngine {
    type Document = MockDocument;

    fn open(&self, path: &Path) -> Result<MockDocument, EngineError> {
        self.state.opens.fetch_add(1, Ordering::SeqCst);
        match self.files.get(path) {
            None => Err(EngineError::Open(format!(
                "no such file: '{}'",
                path.display()
            ))),
            Some(MockFile::Corrupt(message)) => Err(EngineError::Open(message.clone())),
            Some(file) => {
                self.state.live_handles.fetch_add(1, Ordering::SeqCst);
                Ok(MockDocument {
                    file: file.clone(),
                    state: Arc::clone(&self.state),
                })
            }
        }
    }
}

/// Handle returned by [`MockEngine::open`].
#[derive(Debug)]
pub struct MockDocument {
    file: MockFile,
    state: Arc<MockState>,
}

impl PdfDocument for MockDocument {
    fn page_count(&self) -> Result<usize, EngineError> {
        match &self.file {
            MockFile::Pages(pages) => Ok(pages.len()),
            MockFile::Unreadable { pages, .. } => Ok(*pages),
            MockFile::Corrupt(message) => Err(EngineError::Open(message.clone())),
        }
    }

    fn page_texts(&self, sort: bool) -> Result<Vec<String>, EngineError> {
        if let Ok(mut requests) = self.state.sort_requests.lock() {
            requests.push(sort);
        }
        match &self.file {
            MockFile::Pages(pages) => Ok(pages.clone()),
            MockFile::Unreadable { message, .. } => Err(EngineError::Extraction(message.clone())),
            MockFile::Corrupt(message) => Err(EngineError::Open(message.clone())),
        }
    }
}

impl Drop for MockDocument {
    fn drop(&mut self) {
        self.state.live_handles.fetch_sub(1, Ordering::SeqCst);
    }
}
