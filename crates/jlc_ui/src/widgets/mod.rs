//! Reusable widget builders.

pub mod form_row;

pub use form_row::{label, text_row, text_row_with_button};
