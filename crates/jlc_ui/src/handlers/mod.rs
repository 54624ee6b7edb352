//! Handler modules for the dialog's actions.
//!
//! Each module adds `impl App` methods for one concern; `notice` wraps the
//! modal message boxes.

mod browse;
mod convert;
pub mod notice;
