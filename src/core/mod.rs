//! Core conversion logic
//!
//! This module contains the line-processing components:
//! - `classifier` - Pure predicates for date, code and amount lines
//! - `accumulator` - State machine that reassembles records from lines
//! - `engine` - Drives the accumulator over a whole statement
//! - `traits` - Seam between the engine and record destinations

pub mod accumulator;
pub mod classifier;
pub mod engine;
pub mod traits;

pub use accumulator::{RecordAccumulator, RecordState};
pub use engine::{convert_lines, convert_text, split_lines};
pub use traits::RecordSink;
