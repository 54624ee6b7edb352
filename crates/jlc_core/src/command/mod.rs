//! Converter command-line construction.
//!
//! # Example
//!
//! ```
//! use jlc_core::command::CommandBuilder;
//! use jlc_core::form::FormState;
//!
//! let form = FormState {
//!     part_number: "C1337258".to_string(),
//!     output_dir: "libs".to_string(),
//!     skip_existing: true,
//!     ..Default::default()
//! };
//!
//! let cmd = CommandBuilder::default().build(&form);
//! assert_eq!(cmd.to_string(), "JLC2KiCadLib C1337258 -dir libs --skip_existing");
//! ```

mod builder;
mod line;

pub use builder::{CommandBuilder, DEFAULT_PROGRAM};
pub use line::CommandLine;

use crate::form::{FormState, ValidationError};

/// Validate the form and build its command line.
pub fn submit(builder: &CommandBuilder, form: &FormState) -> Result<CommandLine, ValidationError> {
    form.validate()?;
    Ok(builder.build(form))
}
