//! Subprocess invocation of the converter.

use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;

use crate::command::CommandLine;

use super::output::tail_lines;
use super::types::{ConversionError, ConversionReport, RunOptions};

/// Run the converter described by `cmd` and wait for it to finish.
///
/// Standard input is closed; standard output and error are captured.
/// A non-zero exit is reported as [`ConversionError::Failed`] carrying the
/// last `options.output_lines` lines of stderr (stdout when stderr is empty).
pub async fn run_converter(
    cmd: &CommandLine,
    options: &RunOptions,
) -> Result<ConversionReport, ConversionError> {
    let program = cmd.program().to_string();

    let mut command = Command::new(&program);
    command
        .args(cmd.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = &options.working_dir {
        command.current_dir(dir);
    }

    tracing::info!("Running: {}", cmd);
    let started = Instant::now();

    let output = command
        .output()
        .await
        .map_err(|source| ConversionError::Spawn {
            program: program.clone(),
            source,
        })?;

    let elapsed = started.elapsed();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    for line in stdout.lines() {
        tracing::debug!(target: "converter::stdout", "{}", line);
    }
    for line in stderr.lines() {
        tracing::debug!(target: "converter::stderr", "{}", line);
    }

    let exit_code = output.status.code().unwrap_or(-1);

    if !output.status.success() {
        let source = if stderr.trim().is_empty() { &stdout } else { &stderr };
        tracing::error!("{} exited with code {} after {:?}", program, exit_code, elapsed);
        return Err(ConversionError::Failed {
            program,
            exit_code,
            output: tail_lines(source, options.output_lines),
        });
    }

    tracing::info!("{} finished in {:?}", program, elapsed);

    Ok(ConversionReport {
        exit_code,
        stdout,
        stderr,
        elapsed,
    })
}
