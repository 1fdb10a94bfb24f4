//! Common test utilities for goeval integration tests
//!
//! Fixture builders for Go source files fed to the evaluator.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `content` to a fresh temp file and return its handle.
pub fn write_go_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

/// A single tagged declaration directly below its directive.
pub fn fixture_tagged_const(command: &str, name: &str, value: &str) -> String {
    format!("package testdata\n\n//go:evaluate {command}\nconst {name} = {value}\n")
}

/// The shape the tool is built for: a generate line plus tagged constants.
pub fn fixture_version_file() -> String {
    concat!(
        "package testdata\n",
        "\n",
        "//go:generate goeval\n",
        "\n",
        "//go:evaluate date \"+%Y-%m-%d\"\n",
        "const BuildTime = \"2022-12-03\"\n",
        "\n",
        "//go:evaluate echo hello\n",
        "const Greeting = \"\"\n",
    )
    .to_string()
}
