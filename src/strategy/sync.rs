//! Synchronous processing strategy
//!
//! Reads the whole input file with `std::fs`, extracts its text on the
//! calling thread and runs the conversion engine straight into the output.

use crate::core::convert_text;
use crate::io::{CsvEmitter, TextExtractor};
use crate::strategy::ProcessingStrategy;
use crate::types::{ConversionSummary, StatementError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use statement_csv::io::PdfTextExtractor;
/// use statement_csv::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::sync::Arc;
///
/// let strategy = SyncProcessingStrategy::new(Arc::new(PdfTextExtractor));
/// let mut output = std::io::stdout();
///
/// strategy.process(Path::new("statement.pdf"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Clone)]
pub struct SyncProcessingStrategy {
    extractor: Arc<dyn TextExtractor>,
}

impl SyncProcessingStrategy {
    /// Create a strategy that uses `extractor` to read input files
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, StatementError> {
        log::debug!("Processing {} synchronously", input_path.display());

        let bytes =
            std::fs::read(input_path).map_err(|e| StatementError::from_read(input_path, e))?;
        let text = self.extractor.extract(input_path, &bytes)?;

        let mut emitter = CsvEmitter::new(output);
        convert_text(&text, &mut emitter)
    }
}
