//! goeval - evaluate `//go:evaluate` directives in Go source files
//!
//! A build-time code generator: it scans a Go file for declarations tagged
//! with a `//go:evaluate <command>` comment, runs the command, and rewrites
//! the declaration's string literal in place with the command's trimmed
//! output. Everything else in the file stays byte-for-byte identical.
//!
//! ```go,ignore
//! //go:generate goeval
//!
//! //go:evaluate date "+%Y-%m-%d %H:%M:%S %Z"
//! const BuildTime = "2022-12-03 17:22:06 CST"
//!
//! //go:evaluate git rev-list -1 HEAD
//! const GitHash = ""
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use goeval::Evaluation;
//!
//! Evaluation::new().evaluate("version.go")?;
//! # Ok::<(), goeval::EvalError>(())
//! ```
//!
//! A directive binds only to the declaration directly below it (no blank
//! line in between), and only single-name, single-value declarations with
//! a string literal initializer can be rewritten. Any failure aborts the
//! run before the file is written.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Evaluation;
pub use domain::{Directive, GO_EVALUATE};
pub use error::{EvalError, Result, SyntaxError};
pub use infrastructure::runner::{ProcessRunner, RunError, SystemProcessRunner};
