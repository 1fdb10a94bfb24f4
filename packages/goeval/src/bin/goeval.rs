//! goeval CLI
//!
//! Rewrites `//go:evaluate` declarations in one Go source file. Meant to
//! run from a `//go:generate goeval` line, where `go generate` exports the
//! current file as `$GOFILE`.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use goeval::{EvalError, Evaluation};

#[derive(Parser)]
#[command(name = "goeval")]
#[command(about = "Evaluate //go:evaluate directives and rewrite declaration values in place")]
struct Cli {
    /// Go source file to process (defaults to $GOFILE, set by `go generate`)
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let file = cli.file.or_else(|| {
        env::var_os("GOFILE")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    });

    let Some(file) = file else {
        eprintln!("{}", EvalError::Usage);
        return ExitCode::FAILURE;
    };

    if let Err(err) = Evaluation::new().evaluate(&file) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
