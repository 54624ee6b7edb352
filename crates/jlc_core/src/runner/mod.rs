//! Converter execution.
//!
//! The converter runs as a separate process; this program never touches
//! its own argument vector to call into it. Output is captured in full and
//! truncated for display.

mod output;
mod process;
mod types;

pub use process::run_converter;
pub use types::{ConversionError, ConversionReport, RunOptions};
