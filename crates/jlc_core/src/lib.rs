//! JLC Core - Backend logic for JLC2KiCad GUI
//!
//! This crate contains all business logic with zero UI dependencies.
//! It turns a filled-in form into a `JLC2KiCadLib` command line, runs the
//! converter as a subprocess and keeps the settings that pre-fill the
//! form on the next launch.

pub mod command;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod form;
pub mod logging;
pub mod runner;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
