//! Go source parsing via tree-sitter
//!
//! The grammar keeps comments as positioned nodes and records the byte range
//! of every node, which is what the binder's adjacency test and the
//! rewriter's in-place splice rely on.

use tree_sitter::{Node, Parser, Tree};

use crate::error::{EvalError, Result};

/// Parse one Go source file into a positioned tree.
///
/// tree-sitter always produces a tree, so "parse failure" means the tree
/// contains an error or missing node; the first such node supplies the
/// diagnostic position.
pub fn parse(source: &str, file: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::language())
        .map_err(|e| EvalError::Parse {
            file: file.to_string(),
            line: 1,
            detail: format!("failed to load Go grammar: {}", e),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| EvalError::Parse {
        file: file.to_string(),
        line: 1,
        detail: "failed to parse source".to_string(),
    })?;

    if tree.root_node().has_error() {
        let (line, detail) = first_error(tree.root_node());
        return Err(EvalError::Parse {
            file: file.to_string(),
            line,
            detail,
        });
    }

    Ok(tree)
}

/// Depth-first search for the first error or missing node.
fn first_error(root: Node<'_>) -> (usize, String) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() {
            return (node.start_position().row + 1, "syntax error".to_string());
        }
        if node.is_missing() {
            return (
                node.start_position().row + 1,
                format!("missing {}", node.kind()),
            );
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            if child.has_error() || child.is_missing() {
                stack.push(child);
            }
        }
    }
    (root.start_position().row + 1, "syntax error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_source() {
        let tree = parse("package main\n\nconst A = \"x\"\n", "a.go").unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_parse_invalid_source() {
        let err = parse("package main\n\nconst = = =\n", "a.go").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("a.go:"), "unexpected message: {msg}");
    }

    #[test]
    fn test_parse_keeps_comment_nodes() {
        let source = "package main\n\n//go:evaluate echo hi\nconst A = \"\"\n";
        let tree = parse(source, "a.go").unwrap();
        let root = tree.root_node();
        let mut cursor = root.walk();
        let has_comment = root.children(&mut cursor).any(|n| n.kind() == "comment");
        assert!(has_comment);
    }
}
