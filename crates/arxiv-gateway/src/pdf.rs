//! PDF text extraction.
//!
//! Thin wrapper over `pdf-extract`: one string per page, in page order.

use crate::error::{ClientError, ClientResult};

/// Extract the text of every page of an in-memory PDF.
///
/// A page without extractable text fails the whole document. Runs on the
/// blocking pool since extraction is CPU-bound; a panic inside the extractor
/// is reported as an extraction error.
pub async fn extract_pages(bytes: Vec<u8>) -> ClientResult<Vec<String>> {
    tokio::task::spawn_blocking(move || extract_pages_sync(&bytes))
        .await
        .map_err(|e| ClientError::pdf(format!("extractor aborted: {e}")))?
}

/// Blocking variant of [`extract_pages`].
pub fn extract_pages_sync(bytes: &[u8]) -> ClientResult<Vec<String>> {
    if !is_pdf(bytes) {
        return Err(ClientError::pdf("response is not a PDF document"));
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ClientError::pdf(e.to_string()))?;

    if let Some(n) = pages.iter().position(|page| page.trim().is_empty()) {
        return Err(ClientError::pdf(format!("page {} has no extractable text", n + 1)));
    }

    tracing::debug!(pages = pages.len(), bytes = bytes.len(), "Extracted PDF text");
    Ok(pages)
}

/// Join page texts with newlines, in page order.
#[must_use]
pub fn join_pages(pages: &[String]) -> String {
    pages.join("\n")
}

/// Magic-byte check (`%PDF-`), tolerating leading whitespace.
#[must_use]
pub fn is_pdf(head: &[u8]) -> bool {
    head.trim_ascii_start().starts_with(b"%PDF-")
}
