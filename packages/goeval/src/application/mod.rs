//! Application layer: the per-file evaluation session.

pub mod evaluation;

pub use evaluation::Evaluation;
