//! Types for converter runs.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use super::output::{head_lines, tail_lines};

/// Options for a converter run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Lines of output kept for display.
    pub output_lines: usize,
    /// Working directory for the converter; inherited when `None`.
    pub working_dir: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_lines: crate::config::DEFAULT_OUTPUT_LINES as usize,
            working_dir: None,
        }
    }
}

/// Output of a successful converter run.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl ConversionReport {
    /// Short excerpt for the success notice.
    ///
    /// The converter logs to stderr, so its last lines are shown when
    /// present. Otherwise the first lines of stdout, where the created
    /// files are listed.
    pub fn summary(&self, lines: usize) -> String {
        if self.stderr.trim().is_empty() {
            head_lines(&self.stdout, lines)
        } else {
            tail_lines(&self.stderr, lines)
        }
    }
}

/// Error type for converter runs.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The program could not be started at all.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The converter ran and exited unsuccessfully.
    #[error("{program} exited with code {exit_code}:\n{output}")]
    Failed {
        program: String,
        /// `-1` when terminated by a signal.
        exit_code: i32,
        /// Tail of the captured output.
        output: String,
    },
}

impl ConversionError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ConversionError::Spawn { .. } => None,
            ConversionError::Failed { exit_code, .. } => Some(*exit_code),
        }
    }
}
