//! Configuration management for JLC2KiCad GUI.
//!
//! This module provides:
//! - TOML-based settings with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Per-key type coercion on load with fallback defaults
//!
//! Settings are an explicit value: the dialog receives them at start and
//! hands them back for saving, nothing reads them from global state.
//!
//! # Example
//!
//! ```no_run
//! use jlc_core::config::{default_config_path, ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(default_config_path());
//! config.load_or_create().unwrap();
//!
//! println!("Last output dir: {}", config.settings().paths.output_dir);
//!
//! config.settings_mut().paths.output_dir = "/home/me/kicad-libs".to_string();
//! config.update_section(ConfigSection::Paths).unwrap();
//! ```

mod coerce;
mod manager;
mod paths;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use paths::{
    default_config_path, default_logs_dir, documents_dir, APPLICATION, CONFIG_PATH_ENV,
    ORGANIZATION,
};
pub use settings::{
    ConfigSection, ConverterSettings, LibrarySettings, LoggingSettings, PathSettings, Settings,
    DEFAULT_OUTPUT_LINES,
};
