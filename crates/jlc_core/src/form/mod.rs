//! The dialog's form model.
//!
//! `FormState` holds what the user typed; `ModelFormat` and `LoggingLevel`
//! are the closed option sets shown as selectors.

mod state;
mod types;

pub use state::{FormState, ValidationError};
pub use types::{LoggingLevel, ModelFormat, ParseOptionError};
