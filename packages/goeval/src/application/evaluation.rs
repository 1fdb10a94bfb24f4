//! Evaluation session
//!
//! One `Evaluation` processes one file: parse, bind directives, run each
//! command, collect literal edits, then write the file back. Any failure
//! at any declaration aborts the run before the write, so a failed run
//! never leaves a partially rewritten file behind.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::command;
use crate::error::{EvalError, Result, SyntaxError};
use crate::infrastructure::binder::{self, BoundDirective};
use crate::infrastructure::parser;
use crate::infrastructure::rewriter::{self, Edit};
use crate::infrastructure::runner::{ProcessRunner, SystemProcessRunner};

/// Directive evaluator for Go source files
///
/// ```no_run
/// use goeval::Evaluation;
///
/// Evaluation::new().evaluate("version.go")?;
/// # Ok::<(), goeval::EvalError>(())
/// ```
pub struct Evaluation<R = SystemProcessRunner> {
    runner: R,
}

impl Evaluation<SystemProcessRunner> {
    pub fn new() -> Self {
        Self {
            runner: SystemProcessRunner,
        }
    }
}

impl Default for Evaluation<SystemProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner> Evaluation<R> {
    /// Build a session around a custom command runner.
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }

    /// Process `filename` in place.
    ///
    /// The file is read once, every adjacent `//go:evaluate` directive is
    /// executed in source order, and the rewritten text overwrites the file
    /// only after all of them succeeded.
    pub fn evaluate(&self, filename: impl AsRef<Path>) -> Result<()> {
        let filename = filename.as_ref();
        let file = filename.display().to_string();

        let source = fs::read_to_string(filename)?;
        let tree = parser::parse(&source, &file)?;

        let bindings = binder::bind(&tree, &source, &file)?;
        let mut edits = Vec::with_capacity(bindings.len());
        for binding in &bindings {
            edits.push(self.evaluate_binding(binding, &file)?);
        }

        let rewritten = edits.len();
        let output = rewriter::apply(source, edits);
        fs::write(filename, output)?;
        info!(file = %file, rewritten, "file updated");

        Ok(())
    }

    /// Tokenize, run, and turn one directive into an edit.
    fn evaluate_binding(&self, binding: &BoundDirective<'_>, file: &str) -> Result<Edit> {
        let line = binding.directive.line;

        let words = command::split(&binding.directive.command).map_err(|source| {
            EvalError::Syntax {
                file: file.to_string(),
                line,
                source,
            }
        })?;
        if words.is_empty() {
            return Err(EvalError::Syntax {
                file: file.to_string(),
                line,
                source: SyntaxError::EmptyCommand,
            });
        }

        let value = self.runner.run(&words).map_err(|cause| EvalError::Execution {
            file: file.to_string(),
            line,
            command: words.join(" "),
            cause: cause.to_string(),
        })?;
        debug!(line, command = %words.join(" "), "directive evaluated");

        rewriter::rewrite(binding, &value, file)
    }
}
