//! External command execution behind a swappable interface.

use crate::{Error, Result};
use std::process::{Command, Stdio};

/// Runs an external program and returns what it printed on stdout.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Implementations fail when the program cannot be started, exits with a
    /// non-zero status, or prints something other than UTF-8.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = command_line(program, args);
        log::debug!("Running: {command}");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Launch {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| Error::InvalidOutput { command })
    }
}

/// Render a command for logs and error messages
#[must_use]
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
