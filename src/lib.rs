//! Git Revision Header Stamping Library
//!
//! This library reads the current git revision and commit time, compares the
//! revision against the one recorded in a previously generated header, and
//! rewrites the header only when the revision changed so that dependents are
//! not recompiled needlessly.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{Revision, StampOutcome};
pub use services::runner::{CommandRunner, SystemRunner};

use std::path::PathBuf;
use std::result;

/// Environment variable overriding the git executable.
pub const GIT_PROGRAM_ENV: &str = "SHASTAMP_GIT";

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Launch {
        program: String,
        source: std::io::Error,
    },
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    InvalidOutput {
        command: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Launch { program, source } => {
                write!(f, "Failed to launch '{program}': {source}")
            }
            Error::CommandFailed {
                command,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "Command '{command}' exited with status {code}")?,
                    None => write!(f, "Command '{command}' was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Error::InvalidOutput { command } => {
                write!(f, "Command '{command}' produced non UTF-8 output")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) | Error::Launch { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a single stamping run
#[derive(Debug, Clone)]
pub struct StampOptions {
    pub output: PathBuf,
    pub git_program: String,
    pub reference: String,
}

impl StampOptions {
    /// Options writing to `output` with `git` and `HEAD`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            git_program: "git".to_string(),
            reference: "HEAD".to_string(),
        }
    }

    /// Apply the `SHASTAMP_GIT` override, if set and non-empty.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(program) = std::env::var(GIT_PROGRAM_ENV)
            && !program.is_empty()
        {
            self.git_program = program;
        }
        self
    }
}

/// Read the current revision and rewrite the header if it changed
///
/// # Arguments
/// * `runner` - Runs the git queries
/// * `opts` - Output path and git settings
///
/// # Returns
/// `StampOutcome::Unchanged` when the header already records the revision,
/// `StampOutcome::Written` after the header has been (re)written
pub fn stamp_header<R: CommandRunner + ?Sized>(
    runner: &R,
    opts: &StampOptions,
) -> Result<StampOutcome> {
    let revision =
        services::revision::read_revision(runner, &opts.git_program, &opts.reference)?;

    if services::cache::sha1_matches(&opts.output, &revision.sha1)? {
        log::debug!(
            "{} already records {}",
            opts.output.display(),
            revision.sha1
        );
        return Ok(StampOutcome::Unchanged);
    }

    services::header::write_header(&opts.output, &revision)?;
    log::debug!("Wrote {} for {}", opts.output.display(), revision.sha1);

    Ok(StampOutcome::Written)
}
