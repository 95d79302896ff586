//! Document loading boundary.
//!
//! The review engine assumes it receives a string; this crate is where
//! "no text at all" becomes an explicit error instead. PDF text extraction
//! is treated as a black box that either yields raw text or fails.

use std::fs;
use std::path::Path;

use sow_types::SowDocument;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from PDF {path}: {reason}")]
    Pdf { path: String, reason: String },

    #[error("no text could be extracted from {path}")]
    NoText { path: String },
}

/// Load a SOW document from a PDF or plain-text file.
///
/// Files with a `.pdf` extension go through PDF text extraction; anything
/// else is read as UTF-8 text. A document from which no non-whitespace text
/// can be obtained is rejected here, before the engine ever runs.
pub fn load_document(path: impl AsRef<Path>) -> Result<SowDocument, ExtractError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let raw_text = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf {
            path: display.clone(),
            reason: e.to_string(),
        })?
    } else {
        fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: display.clone(),
            source,
        })?
    };

    if raw_text.trim().is_empty() {
        return Err(ExtractError::NoText { path: display });
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| display.clone());

    tracing::info!(file = %filename, chars = raw_text.len(), "extracted SOW text");
    Ok(SowDocument::new(filename, raw_text))
}

/// Wrap direct text input as a document.
pub fn from_text(text: impl Into<String>) -> SowDocument {
    SowDocument::new("inline", text)
}
