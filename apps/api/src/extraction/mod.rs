//! Text extraction: turns an uploaded document on disk into plain text.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is `PdfTextExtractor`.
//! Implementations are synchronous and must be called from `tokio::task::spawn_blocking`.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Extracts all page text from a document, concatenated in page order.
/// Blank documents yield an empty string rather than an error.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// PDF extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| ExtractionError::Decode(e.to_string()))?;
        debug!("Extracted {} chars from {}", text.len(), path.display());
        Ok(text)
    }
}
