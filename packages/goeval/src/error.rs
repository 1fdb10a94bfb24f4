//! Error types for goeval
//!
//! Every failure during an evaluation run maps to one `EvalError` variant.
//! All of them are fatal for the run: the target file is only written when
//! every directive resolved cleanly.

use thiserror::Error;

/// Main error type for evaluation runs
#[derive(Debug, Error)]
pub enum EvalError {
    /// No filename from either the argument list or `$GOFILE`
    #[error("no input filename, specify a file argument or set $GOFILE")]
    Usage,

    /// Source file is not syntactically valid Go
    #[error("{file}:{line}: {detail}")]
    Parse {
        file: String,
        line: usize,
        detail: String,
    },

    /// Directive attached to a declaration with multiple names or values
    #[error("{file}:{line}: only support single value declaration")]
    Binding { file: String, line: usize },

    /// Malformed directive command string
    #[error("{file}:{line}: {source}")]
    Syntax {
        file: String,
        line: usize,
        #[source]
        source: SyntaxError,
    },

    /// External command failed to launch or exited non-zero
    #[error("{file}:{line}: running {command:?}: {cause}")]
    Execution {
        file: String,
        line: usize,
        command: String,
        cause: String,
    },

    /// Declaration value cannot be replaced with a string literal
    #[error("{file}:{line}: {detail}")]
    Rewrite {
        file: String,
        line: usize,
        detail: String,
    },

    /// File read or write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tokenizer errors for the directive command mini-language
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("bad backslash")]
    BadBackslash,

    #[error("bad quoted string")]
    BadQuotedString,

    #[error("mismatched quoted string")]
    MismatchedQuote,

    #[error("expect space after quoted argument")]
    MissingSpaceAfterQuote,

    #[error("empty command")]
    EmptyCommand,
}

/// Result type alias for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;
