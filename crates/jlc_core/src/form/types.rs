//! Option types shown as selectors in the form.

use std::fmt;
use std::str::FromStr;

/// 3-D model format requested from the converter (`-models`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFormat {
    /// STEP models.
    Step,
    /// VRML models.
    Wrl,
    /// No 3-D models at all.
    No,
}

impl ModelFormat {
    /// All formats in the order they are offered.
    pub const ALL: [ModelFormat; 3] = [ModelFormat::Step, ModelFormat::Wrl, ModelFormat::No];

    /// Value passed on the command line.
    pub fn as_arg(&self) -> &'static str {
        match self {
            ModelFormat::Step => "STEP",
            ModelFormat::Wrl => "WRL",
            ModelFormat::No => "NO",
        }
    }

    /// Whether this format produces model files (and therefore needs a model folder).
    pub fn writes_models(&self) -> bool {
        !matches!(self, ModelFormat::No)
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Error returned when parsing an unknown option name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

impl FromStr for ModelFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STEP" => Ok(ModelFormat::Step),
            "WRL" => Ok(ModelFormat::Wrl),
            "NO" => Ok(ModelFormat::No),
            _ => Err(ParseOptionError {
                kind: "model format",
                value: s.to_string(),
            }),
        }
    }
}

/// Log level handed to the converter's own log file (`-logging_level`).
///
/// These are the converter's names, not this application's tracing levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoggingLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LoggingLevel {
    /// All levels, most verbose first.
    pub const ALL: [LoggingLevel; 5] = [
        LoggingLevel::Debug,
        LoggingLevel::Info,
        LoggingLevel::Warning,
        LoggingLevel::Error,
        LoggingLevel::Critical,
    ];

    /// Value passed on the command line.
    pub fn as_arg(&self) -> &'static str {
        match self {
            LoggingLevel::Debug => "DEBUG",
            LoggingLevel::Info => "INFO",
            LoggingLevel::Warning => "WARNING",
            LoggingLevel::Error => "ERROR",
            LoggingLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

impl FromStr for LoggingLevel {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LoggingLevel::Debug),
            "INFO" => Ok(LoggingLevel::Info),
            "WARNING" | "WARN" => Ok(LoggingLevel::Warning),
            "ERROR" => Ok(LoggingLevel::Error),
            "CRITICAL" => Ok(LoggingLevel::Critical),
            _ => Err(ParseOptionError {
                kind: "logging level",
                value: s.to_string(),
            }),
        }
    }
}
