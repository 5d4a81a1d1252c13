/*!
 * PDF text extraction.
 *
 * Uses [`pdf_extract`] to pull the text of every page out of a PDF file. Pages
 * are extracted one by one and joined in page order with a line break, so two
 * pages whose text sits at the same height never run together. `pdf_extract` can panic on malformed input instead of returning
 * an error, so the call is wrapped in [`std::panic::catch_unwind`].
 */

use log::debug;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::errors::AppError;

/// Source of raw document text
pub trait TextExtractor {
    /// Extract the concatenated text of all pages
    fn extract_text(&self, path: &Path) -> Result<String, AppError>;
}

/// Extractor backed by the `pdf-extract` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, AppError> {
        debug!("Running pdf-extract on {:?}", path);

        let result = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)));

        match result {
            Ok(Ok(pages)) => {
                let text = join_pages(&pages);
                debug!("Extracted {} characters from {} pages", text.chars().count(), pages.len());
                Ok(text)
            }
            Ok(Err(e)) => Err(AppError::Extraction(e.to_string())),
            Err(_) => Err(AppError::Extraction(
                "PDF parser panicked (malformed document)".to_string(),
            )),
        }
    }
}

/// Concatenate page texts in order, one line break between pages
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}
