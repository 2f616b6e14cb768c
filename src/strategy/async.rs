//! Asynchronous processing strategy
//!
//! Reads the input with `tokio::fs` and runs text extraction on the blocking
//! pool of a multi-threaded tokio runtime. Once the text is available the
//! conversion engine runs synchronously to completion, so the CSV is identical
//! to what the sync strategy produces.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── AsyncConfig (worker_threads)
//!     ├── tokio::fs::read (input bytes)
//!     ├── spawn_blocking → TextExtractor (PDF text)
//!     └── convert_text → CsvEmitter (CSV output)
//! ```

use crate::core::convert_text;
use crate::io::{CsvEmitter, TextExtractor};
use crate::strategy::ProcessingStrategy;
use crate::types::{ConversionSummary, StatementError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for the async runtime
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsyncConfig {
    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for AsyncConfig {
    fn default() -> Self {
        Self {
            worker_threads: num_cpus::get(),
        }
    }
}

impl AsyncConfig {
    /// Create an AsyncConfig, falling back to the default for zero threads
    pub fn new(worker_threads: usize) -> Self {
        let default = Self::default();

        let worker_threads = if worker_threads == 0 {
            log::warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads,
                default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self { worker_threads }
    }
}

/// Asynchronous processing strategy
#[derive(Clone)]
pub struct AsyncProcessingStrategy {
    config: AsyncConfig,
    extractor: Arc<dyn TextExtractor>,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy with the specified configuration
    pub fn new(config: AsyncConfig, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { config, extractor }
    }

    /// Read `input_path` and extract its text without blocking the runtime
    async fn load_text(&self, input_path: &Path) -> Result<String, StatementError> {
        let bytes = tokio::fs::read(input_path)
            .await
            .map_err(|e| StatementError::from_read(input_path, e))?;

        let extractor = Arc::clone(&self.extractor);
        let path = input_path.to_path_buf();
        tokio::task::spawn_blocking(move || extractor.extract(&path, &bytes))
            .await
            .map_err(|e| StatementError::runtime(format!("Text extraction task failed: {}", e)))?
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, StatementError> {
        log::debug!(
            "Processing {} on {} worker threads",
            input_path.display(),
            self.config.worker_threads
        );

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .build()
            .map_err(|e| StatementError::runtime(format!("Failed to create tokio runtime: {}", e)))?;

        let text = runtime.block_on(self.load_text(input_path))?;

        let mut emitter = CsvEmitter::new(output);
        convert_text(&text, &mut emitter)
    }
}
