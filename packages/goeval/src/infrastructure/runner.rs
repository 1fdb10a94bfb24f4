//! External command execution
//!
//! The evaluation session talks to subprocesses through the
//! [`ProcessRunner`] trait so tests can substitute a fake and avoid
//! spawning anything real.

use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Failure to produce output from a command
#[derive(Debug, Error)]
pub enum RunError {
    /// The process could not be spawned at all
    #[error("{0}")]
    Launch(#[from] std::io::Error),

    /// The process ran but exited non-zero
    #[error("{0}")]
    Failed(String),

    /// No program word to run
    #[error("empty command")]
    EmptyCommand,
}

/// Runs one tokenized command and captures its output
pub trait ProcessRunner {
    /// Run `words[0]` with the remaining words as arguments, in the current
    /// working directory and environment. Returns combined stdout and
    /// stderr with surrounding whitespace trimmed.
    fn run(&self, words: &[String]) -> std::result::Result<String, RunError>;
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, words: &[String]) -> std::result::Result<String, RunError> {
        let (program, args) = words.split_first().ok_or(RunError::EmptyCommand)?;
        debug!(program = %program, args = args.len(), "running command");

        let output = Command::new(program).args(args).output()?;
        if !output.status.success() {
            return Err(RunError::Failed(output.status.to_string()));
        }

        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(String::from_utf8_lossy(&combined).trim().to_string())
    }
}
