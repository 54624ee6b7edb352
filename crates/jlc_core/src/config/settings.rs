//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::command::DEFAULT_PROGRAM;
use crate::form::{LoggingLevel, ModelFormat};

use super::coerce::SectionReader;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Output directory and library sub-folders.
    pub paths: PathSettings,

    /// What the converter should generate.
    pub library: LibrarySettings,

    /// Converter log file options.
    pub logging: LoggingSettings,

    /// How the converter is invoked.
    pub converter: ConverterSettings,
}

/// Output directory and the folders inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathSettings {
    /// Last used output directory.
    pub output_dir: String,

    /// Symbol folder name, relative to `output_dir`.
    pub symbol_dir: String,

    /// Footprint folder name, relative to `output_dir`.
    pub footprint_dir: String,

    /// Model folder name, relative to the footprint folder.
    pub model_dir: String,
}

/// Generation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibrarySettings {
    pub download_symbols: bool,

    pub download_footprint: bool,

    /// Empty when the converter default is used.
    #[serde(serialize_with = "serialize_optional_display")]
    pub model_type: Option<ModelFormat>,

    /// KiCad path variable used as model base.
    pub model_var: String,

    pub skip_existing: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            download_symbols: true,
            download_footprint: true,
            model_type: None,
            model_var: String::new(),
            skip_existing: false,
        }
    }
}

/// Converter log file options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoggingSettings {
    pub use_log_file: bool,

    #[serde(serialize_with = "serialize_display")]
    pub logging_level: LoggingLevel,
}

/// Converter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterSettings {
    /// Executable name or path.
    pub program: String,

    /// Lines of converter output shown in the result notice.
    pub output_lines: u32,
}

pub const DEFAULT_OUTPUT_LINES: u32 = 10;

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            output_lines: DEFAULT_OUTPUT_LINES,
        }
    }
}

/// Config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Library,
    Logging,
    Converter,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 4] = [
        ConfigSection::Paths,
        ConfigSection::Library,
        ConfigSection::Logging,
        ConfigSection::Converter,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Library => "library",
            ConfigSection::Logging => "logging",
            ConfigSection::Converter => "converter",
        }
    }

    /// Comment written above the section in a freshly generated file.
    pub(crate) fn comment(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "# Output directory and library folders",
            ConfigSection::Library => "# What to generate",
            ConfigSection::Logging => "# Converter log file",
            ConfigSection::Converter => "# Converter executable",
        }
    }
}

impl Settings {
    /// Build settings from a parsed document, coercing each key.
    ///
    /// Returns the settings and whether anything was missing or had to be
    /// coerced, i.e. whether the file should be rewritten.
    pub(crate) fn from_table(root: &toml::Table) -> (Self, bool) {
        let defaults = Settings::default();
        let mut dirty = false;

        let mut r = SectionReader::new(root, ConfigSection::Paths.table_name());
        let paths = PathSettings {
            output_dir: r.string("output_dir", &defaults.paths.output_dir),
            symbol_dir: r.string("symbol_dir", &defaults.paths.symbol_dir),
            footprint_dir: r.string("footprint_dir", &defaults.paths.footprint_dir),
            model_dir: r.string("model_dir", &defaults.paths.model_dir),
        };
        dirty |= r.dirty;

        let mut r = SectionReader::new(root, ConfigSection::Library.table_name());
        let library = LibrarySettings {
            download_symbols: r.bool("download_symbols", defaults.library.download_symbols),
            download_footprint: r.bool("download_footprint", defaults.library.download_footprint),
            model_type: r.optional("model_type"),
            model_var: r.string("model_var", &defaults.library.model_var),
            skip_existing: r.bool("skip_existing", defaults.library.skip_existing),
        };
        dirty |= r.dirty;

        let mut r = SectionReader::new(root, ConfigSection::Logging.table_name());
        let logging = LoggingSettings {
            use_log_file: r.bool("use_log_file", defaults.logging.use_log_file),
            logging_level: r.parsed("logging_level", defaults.logging.logging_level),
        };
        dirty |= r.dirty;

        let mut r = SectionReader::new(root, ConfigSection::Converter.table_name());
        let converter = ConverterSettings {
            program: r.string("program", &defaults.converter.program),
            output_lines: r.u32("output_lines", defaults.converter.output_lines),
        };
        dirty |= r.dirty;

        if converter.program.trim().is_empty() {
            tracing::warn!("Empty converter program in settings, using {}", DEFAULT_PROGRAM);
        }

        let settings = Settings {
            paths,
            library,
            logging,
            converter,
        };
        (settings, dirty)
    }

    /// Converter program, falling back to the default when unset.
    pub fn program(&self) -> &str {
        match self.converter.program.trim() {
            "" => DEFAULT_PROGRAM,
            p => p,
        }
    }
}

fn serialize_display<T: Display, S: Serializer>(value: &T, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(value)
}

fn serialize_optional_display<T: Display, S: Serializer>(
    value: &Option<T>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => s.collect_str(v),
        None => s.serialize_str(""),
    }
}
