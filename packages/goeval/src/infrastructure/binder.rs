//! Directive binder
//!
//! Associates `//go:evaluate` comments with the declarations they sit on.
//! The binding rule is strict textual adjacency: a comment binds to a
//! `const`/`var` declaration group only when the group starts exactly one
//! byte after the comment ends, i.e. directly on the next line with no
//! blank line or other token between them. Anything looser is silently
//! skipped, which also means a directive can be disabled by inserting a
//! blank line above its declaration.

use std::collections::HashMap;

use tracing::debug;
use tree_sitter::{Node, Tree};

use crate::domain::{directive_command, Directive};
use crate::error::{EvalError, Result};

/// A directive paired with the single initializer expression it targets
#[derive(Debug, Clone)]
pub struct BoundDirective<'t> {
    pub directive: Directive,
    pub value: Node<'t>,
}

/// Scan the tree's top-level declarations for directive bindings.
///
/// Fails when a directive sits on a declaration spec with more than one
/// name or anything other than exactly one initializer. Declarations with
/// no adjacent directive comment are skipped without error.
pub fn bind<'t>(tree: &'t Tree, source: &str, file: &str) -> Result<Vec<BoundDirective<'t>>> {
    let root = tree.root_node();
    let comments = comment_index(root);
    let mut bindings = Vec::new();

    let mut cursor = root.walk();
    for decl in root.children(&mut cursor) {
        if !matches!(decl.kind(), "const_declaration" | "var_declaration") {
            continue;
        }

        let comment = decl
            .start_byte()
            .checked_sub(1)
            .and_then(|end| comments.get(&end));
        let Some(comment) = comment else {
            continue;
        };

        let text = &source[comment.byte_range()];
        let Some(command) = directive_command(text) else {
            continue;
        };

        let directive = Directive {
            command: command.to_string(),
            line: comment.start_position().row + 1,
        };
        debug!(line = directive.line, "directive comment bound");

        let mut spec_cursor = decl.walk();
        for spec in decl.children(&mut spec_cursor) {
            if !matches!(spec.kind(), "const_spec" | "var_spec") {
                continue;
            }
            bindings.push(BoundDirective {
                directive: directive.clone(),
                value: single_value(spec, file, directive.line)?,
            });
        }
    }

    Ok(bindings)
}

/// Enforce the one-name, one-initializer shape and return the initializer.
fn single_value<'t>(spec: Node<'t>, file: &str, line: usize) -> Result<Node<'t>> {
    let mut name_cursor = spec.walk();
    let names = spec.children_by_field_name("name", &mut name_cursor).count();

    let values = spec.child_by_field_name("value");
    let value = match values {
        Some(list) if names == 1 && list.named_child_count() == 1 => list.named_child(0),
        _ => None,
    };

    value.ok_or_else(|| EvalError::Binding {
        file: file.to_string(),
        line,
    })
}

/// Index every comment node in the file by its end byte offset.
///
/// Go collects consecutive comment lines into groups and tests the group's
/// end; since a group ends where its last comment does, indexing individual
/// comment nodes gives the same adjacency answers.
fn comment_index(root: Node<'_>) -> HashMap<usize, Node<'_>> {
    let mut comments = HashMap::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "comment" {
                comments.insert(child.end_byte(), child);
            }
            stack.push(child);
        }
    }
    comments
}
