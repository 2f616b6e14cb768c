//! I/O module
//!
//! Handles getting text in and CSV out.
//!
//! # Components
//!
//! - `text_source` - Text extraction from PDF or plain-text input
//! - `csv_format` - CSV emitter for finalized records

pub mod csv_format;
pub mod text_source;

pub use csv_format::{CsvEmitter, CSV_HEADER};
pub use text_source::{InputFormat, PdfTextExtractor, PlainTextExtractor, TextExtractor};
