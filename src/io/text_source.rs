//! Text extraction collaborators
//!
//! The converter works on plain text. A `TextExtractor` turns the raw bytes of
//! the input file into that text: PDFs go through `pdf-extract`, while text
//! dumps that were extracted earlier are decoded directly.

use crate::types::StatementError;
use clap::ValueEnum;
use std::path::Path;
use std::sync::Arc;

/// Turns the bytes of an input document into plain text
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document read from `path`
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, StatementError>;
}

/// Extracts text from PDF documents
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path, bytes: &[u8]) -> Result<String, StatementError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| StatementError::extraction(path, e))?;

        log::info!(
            "Extracted {} bytes of text from {}",
            text.len(),
            path.display()
        );
        Ok(text)
    }
}

/// Reads input that is already plain text
///
/// Invalid UTF-8 sequences are replaced rather than rejected. A leading byte
/// order mark is dropped so it cannot hide a date on the first line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, _path: &Path, bytes: &[u8]) -> Result<String, StatementError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.strip_prefix('\u{FEFF}').unwrap_or(&text[..]).to_string())
    }
}

/// Kind of document given as input
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// A statement PDF
    Pdf,
    /// Text previously extracted from a statement PDF
    Text,
}

impl InputFormat {
    /// Guess the format from the file extension: `.txt` is text, anything else a PDF
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => InputFormat::Text,
            _ => InputFormat::Pdf,
        }
    }

    /// Extractor for this format
    pub fn extractor(self) -> Arc<dyn TextExtractor> {
        match self {
            InputFormat::Pdf => Arc::new(PdfTextExtractor),
            InputFormat::Text => Arc::new(PlainTextExtractor),
        }
    }
}
