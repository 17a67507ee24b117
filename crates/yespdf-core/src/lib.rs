pub mod config_file;
pub mod document;
pub mod engine;
pub mod facade;
pub mod lines;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod paths;

// Re-export for convenience
pub use config_file::{ConfigFile, ExtractionOptions, load_config};
pub use document::{LoadedDocument, PAGE_SEPARATOR};
pub use engine::{EngineError, PdfDocument, PdfEngine};
pub use facade::DocumentFacade;
pub use lines::{LineMode, LineSequence, split_lines};
