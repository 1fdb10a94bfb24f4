//! Literal rewriter
//!
//! Turns a bound directive's computed value into a byte-range edit that
//! replaces the declaration's initializer with a freshly quoted Go string
//! literal. Only string-kind literals are rewritable; every other target
//! fails the whole run.

use crate::domain::quoting;
use crate::error::{EvalError, Result};
use crate::infrastructure::binder::BoundDirective;

/// One in-place replacement, expressed against the original source bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start_byte: usize,
    pub end_byte: usize,
    pub text: String,
}

/// Build the edit that substitutes `new_value` for the binding's literal.
///
/// Accepts interpreted and raw (backtick) string literals; both are
/// replaced by an interpreted literal at the same byte range, so the
/// surrounding layout is untouched.
pub fn rewrite(binding: &BoundDirective<'_>, new_value: &str, file: &str) -> Result<Edit> {
    let value = binding.value;
    match value.kind() {
        "interpreted_string_literal" | "raw_string_literal" => Ok(Edit {
            start_byte: value.start_byte(),
            end_byte: value.end_byte(),
            text: quoting::quote(new_value),
        }),
        "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal" => {
            Err(EvalError::Rewrite {
                file: file.to_string(),
                line: binding.directive.line,
                detail: "not support non string type value".to_string(),
            })
        }
        _ => Err(EvalError::Rewrite {
            file: file.to_string(),
            line: binding.directive.line,
            detail: "not support non BasicLiteral expression".to_string(),
        }),
    }
}

/// Splice a set of non-overlapping edits into the source text.
///
/// Applied in descending byte order so earlier offsets stay valid.
pub fn apply(mut source: String, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|e| std::cmp::Reverse(e.start_byte));
    for edit in edits {
        source.replace_range(edit.start_byte..edit.end_byte, &edit.text);
    }
    source
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::binder::bind;
    use tree_sitter::{Parser, Tree};

    fn parse_go(source: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        parser.parse(source, None).unwrap()
    }

    fn single_binding(source: &str) -> (Tree, String) {
        (parse_go(source), source.to_string())
    }

    #[test]
    fn test_rewrite_string_literal() {
        let (tree, source) = single_binding(
            "package main\n\n//go:evaluate echo hello\nconst Greeting = \"\"\n",
        );
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let edit = rewrite(&bindings[0], "hello", "a.go").unwrap();

        assert_eq!(edit.text, "\"hello\"");
        let rewritten = apply(source, vec![edit]);
        assert_eq!(
            rewritten,
            "package main\n\n//go:evaluate echo hello\nconst Greeting = \"hello\"\n"
        );
    }

    #[test]
    fn test_rewrite_raw_string_literal() {
        let (tree, source) =
            single_binding("package main\n\n//go:evaluate echo hi\nconst A = `old`\n");
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let edit = rewrite(&bindings[0], "hi", "a.go").unwrap();
        assert!(apply(source, vec![edit]).contains("const A = \"hi\""));
    }

    #[test]
    fn test_rewrite_escapes_output() {
        let (tree, source) =
            single_binding("package main\n\n//go:evaluate echo x\nconst A = \"\"\n");
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let edit = rewrite(&bindings[0], "say \"hi\"\n twice", "a.go").unwrap();
        assert_eq!(edit.text, r#""say \"hi\"\n twice""#);
    }

    #[test]
    fn test_int_literal_rejected() {
        let (tree, source) =
            single_binding("package main\n\n//go:evaluate echo 43\nconst N = 42\n");
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let err = rewrite(&bindings[0], "43", "a.go").unwrap_err();
        assert_eq!(err.to_string(), "a.go:3: not support non string type value");
    }

    #[test]
    fn test_non_literal_expression_rejected() {
        let (tree, source) =
            single_binding("package main\n\n//go:evaluate echo x\nconst B = A\n");
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let err = rewrite(&bindings[0], "x", "a.go").unwrap_err();
        assert_eq!(
            err.to_string(),
            "a.go:3: not support non BasicLiteral expression"
        );
    }

    #[test]
    fn test_bool_literal_rejected_as_expression() {
        // `true` is an identifier in Go's grammar, not a literal
        let (tree, source) =
            single_binding("package main\n\n//go:evaluate echo x\nconst B = true\n");
        let bindings = bind(&tree, &source, "a.go").unwrap();
        let err = rewrite(&bindings[0], "x", "a.go").unwrap_err();
        assert!(err.to_string().contains("non BasicLiteral"));
    }

    #[test]
    fn test_apply_multiple_edits_descending() {
        let source = "const A = \"1\"\nconst B = \"2\"\n".to_string();
        let edits = vec![
            Edit {
                start_byte: 10,
                end_byte: 13,
                text: "\"one\"".to_string(),
            },
            Edit {
                start_byte: 24,
                end_byte: 27,
                text: "\"two\"".to_string(),
            },
        ];
        assert_eq!(apply(source, edits), "const A = \"one\"\nconst B = \"two\"\n");
    }
}
