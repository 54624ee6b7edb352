//! Form state for a single conversion.

use thiserror::Error;

use super::types::{LoggingLevel, ModelFormat};

/// Reasons a form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a part number.")]
    MissingPartNumber,

    #[error("Please choose an output directory.")]
    MissingOutputDir,
}

/// Values entered in the dialog.
///
/// Created fresh each time the dialog opens and dropped after the one
/// conversion it describes. Every optional field is "off" when empty,
/// `false` or `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Component id, e.g. `C1337258`.
    pub part_number: String,
    /// Library root directory.
    pub output_dir: String,

    /// Symbol library name (file stem without `.kicad_sym`).
    pub symbol_lib: String,
    /// Symbol folder, relative to `output_dir`.
    pub symbol_dir: String,
    pub no_symbol: bool,

    /// Footprint library folder, relative to `output_dir`.
    pub footprint_dir: String,
    pub no_footprint: bool,

    /// `None` leaves the converter's default in place.
    pub model_format: Option<ModelFormat>,
    /// Model folder, relative to the footprint folder.
    pub model_dir: String,
    /// KiCad path variable used as the model base.
    pub model_var: String,

    pub use_log_file: bool,
    pub logging_level: LoggingLevel,

    pub skip_existing: bool,
}

impl FormState {
    /// Check the two required fields.
    ///
    /// Nothing else is validated; the converter reports its own errors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.part_number.trim().is_empty() {
            return Err(ValidationError::MissingPartNumber);
        }
        if self.output_dir.trim().is_empty() {
            return Err(ValidationError::MissingOutputDir);
        }
        Ok(())
    }
}
