//! Serialises a `FormState` into the converter's argument grammar.

use crate::form::FormState;

use super::line::CommandLine;

/// Default converter executable.
pub const DEFAULT_PROGRAM: &str = "JLC2KiCadLib";

/// Builds `JLC2KiCadLib` command lines.
///
/// The argument order is fixed: positional part number and `-dir` first,
/// then symbol, footprint, model, logging and skip-existing options, each
/// only when the form enables it.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command line. Does not validate; see [`FormState::validate`].
    pub fn build(&self, form: &FormState) -> CommandLine {
        let mut cmd = CommandLine::new(self.program.as_str());
        cmd.arg(form.part_number.trim())
            .flag_value("-dir", form.output_dir.trim());

        if form.no_symbol {
            cmd.arg("--no_symbol");
        } else {
            push_non_empty(&mut cmd, "-symbol_lib", &form.symbol_lib);
            push_non_empty(&mut cmd, "-symbol_lib_dir", &form.symbol_dir);
        }

        if form.no_footprint {
            cmd.arg("--no_footprint");
        } else {
            push_non_empty(&mut cmd, "-footprint_lib", &form.footprint_dir);
        }

        if let Some(format) = form.model_format {
            cmd.flag_value("-models", format.as_arg());
            if format.writes_models() {
                push_non_empty(&mut cmd, "-model_dir", &form.model_dir);
                push_non_empty(&mut cmd, "-model_base_variable", &form.model_var);
            }
        }

        if form.use_log_file {
            cmd.arg("--log_file")
                .flag_value("-logging_level", form.logging_level.as_arg());
        }

        if form.skip_existing {
            cmd.arg("--skip_existing");
        }

        cmd
    }
}

fn push_non_empty(cmd: &mut CommandLine, flag: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        cmd.flag_value(flag, value);
    }
}
