//! Go declaration parser using tree-sitter

use crate::language::{DeclarationKind, DeclarationPosition, DeclarationSource};
use anyhow::{Context, Result};
use tree_sitter::{Node, Parser};

/// Go parser using tree-sitter
#[derive(Debug, Default, Clone, Copy)]
pub struct GoParser;

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> Self {
        GoParser
    }
}

impl DeclarationSource for GoParser {
    fn declarations(&self, source: &str, filename: &str) -> Result<Vec<DeclarationPosition>> {
        // tree-sitter parsers need `&mut`, so one is built per call
        let mut parser = Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&language.into())
            .context("Failed to set Go language")?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("failed to parse Go file: {}", filename))?;
        let root = tree.root_node();

        // tree-sitter is error-tolerant; anything it had to recover from is a
        // parse failure here
        if root.has_error() {
            let line = first_error_line(root).unwrap_or(1);
            anyhow::bail!(
                "failed to parse Go file: {}: syntax error at line {}",
                filename,
                line
            );
        }
        let has_package = root
            .children(&mut root.walk())
            .any(|child| child.kind() == "package_clause");
        if !has_package {
            anyhow::bail!(
                "failed to parse Go file: {}: missing package clause",
                filename
            );
        }

        let mut decls = Vec::new();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if let Some(decl) = extract_declaration(child, source) {
                decls.push(decl);
            }
        }

        // Sort by source position for determinism
        decls.sort_by_key(|d| d.start_line);
        tracing::debug!(file = filename, count = decls.len(), "discovered declarations");

        Ok(decls)
    }
}

/// Build a DeclarationPosition from a top-level function or method declaration
fn extract_declaration(node: Node, source: &str) -> Option<DeclarationPosition> {
    let kind = match node.kind() {
        "function_declaration" => DeclarationKind::Function,
        "method_declaration" => DeclarationKind::Method,
        _ => return None,
    };

    // identifier for functions, field_identifier for methods
    let name_node = node.child_by_field_name("name")?;
    let name = source.get(name_node.start_byte()..name_node.end_byte())?;

    Some(DeclarationPosition {
        name: name.to_string(),
        kind,
        start_line: node.start_position().row + 1, // tree-sitter uses 0-indexed rows
        end_line: node.end_position().row + 1,
    })
}

/// 1-based line of the first ERROR or MISSING node under `node`
fn first_error_line(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}
