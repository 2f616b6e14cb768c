//! Processing strategy module
//!
//! A strategy covers the complete pipeline for one statement: read the input
//! file, extract its text, run the conversion engine and write the CSV. The
//! strategies differ only at the I/O boundary; the conversion itself is the
//! same synchronous pass in both.

use crate::cli::StrategyType;
use crate::io::TextExtractor;
use crate::types::{ConversionSummary, StatementError};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncConfig, AsyncProcessingStrategy};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete conversion pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Convert the statement at `input_path` and write CSV to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be read (file not found, permission denied)
    /// - Text extraction fails
    /// - Output cannot be written
    ///
    /// Records that cannot be reconstructed are not errors; they are left out
    /// of the output.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<ConversionSummary, StatementError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional runtime configuration (ignored for sync)
/// * `extractor` - Turns the input file into text
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<AsyncConfig>,
    extractor: Arc<dyn TextExtractor>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(extractor)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, extractor))
        }
    }
}
