//! Ordered argument vector handed to the converter.

use std::fmt;

/// A complete converter invocation: program name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<String>,
}

impl CommandLine {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            argv: vec![program.into()],
        }
    }

    pub(crate) fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.argv.push(arg.into());
        self
    }

    pub(crate) fn flag_value(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.arg(flag).arg(value)
    }

    /// Program name (first element).
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Full argument vector including the program name.
    pub fn as_slice(&self) -> &[String] {
        &self.argv
    }

    /// Whether the given flag or value appears anywhere after the program name.
    pub fn contains(&self, arg: &str) -> bool {
        self.args().iter().any(|a| a == arg)
    }

    /// Value following `flag`, if present.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        let args = self.args();
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for CommandLine {
    /// Shell-like rendering for logs; arguments with spaces are quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, "\"{}\"", arg.replace('"', "\\\""))?;
            } else {
                f.write_str(arg)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let mut line = CommandLine::new("JLC2KiCadLib");
        line.arg("C1337258").flag_value("-dir", "/home/me/My Libs");
        assert_eq!(line.to_string(), "JLC2KiCadLib C1337258 -dir \"/home/me/My Libs\"");
    }

    #[test]
    fn value_of_finds_following_argument() {
        let mut line = CommandLine::new("tool");
        line.flag_value("-dir", "out").arg("--skip_existing");
        assert_eq!(line.value_of("-dir"), Some("out"));
        assert_eq!(line.value_of("--skip_existing"), None);
        assert_eq!(line.value_of("-models"), None);
    }
}
