//! Go source parsing via tree-sitter.
//!
//! This is the only boundary between nargs and the file system / grammar:
//! it reads a file, produces a syntax tree, and rejects files the grammar
//! cannot fully parse. Everything downstream works on `ParsedFile`.

use std::fs;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::error::{IoResultExt, NargsError, NargsResult};

/// A successfully parsed Go source file.
///
/// Owns both the source text and the tree so that extracted nodes can
/// borrow from it for the duration of a file's analysis.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    /// Root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }
}

/// Read and parse a single Go file.
///
/// Fails with [`NargsError::Io`] when the file cannot be read and with
/// [`NargsError::Parse`] when the grammar reports a syntax error. A file
/// that parses with embedded error nodes is rejected outright: the run
/// contract is all-or-nothing, never best-effort.
pub fn parse_file(path: &Path) -> NargsResult<ParsedFile> {
    let source = fs::read_to_string(path).with_path(path)?;
    parse_source(path, source)
}

/// Parse already-loaded Go source, attributing errors to `path`.
pub fn parse_source(path: &Path, source: String) -> NargsResult<ParsedFile> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| NargsError::parse(path, format!("failed to load Go grammar: {e}")))?;

    let tree = parser
        .parse(&source, None)
        .ok_or_else(|| NargsError::parse(path, "parser produced no tree"))?;

    if tree.root_node().has_error() {
        let (message, line, column) = first_syntax_error(tree.root_node(), &source);
        return Err(NargsError::parse_at(path, message, line, column));
    }

    Ok(ParsedFile {
        path: path.to_path_buf(),
        source,
        tree,
    })
}

/// 1-based source line of a node's first character.
pub fn line_of(node: Node<'_>) -> usize {
    node.start_position().row + 1
}

/// Locate the first error or missing node in the tree.
///
/// Returns a human-readable message plus 1-based line and column. The
/// traversal is a manual cursor walk so it never recurses on deep trees.
fn first_syntax_error(root: Node<'_>, source: &str) -> (String, usize, usize) {
    let mut cursor = root.walk();
    let mut visited_children = false;
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                let snippet = node
                    .utf8_text(source.as_bytes())
                    .unwrap_or("")
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim();
                if snippet.is_empty() {
                    "unexpected input".to_string()
                } else {
                    format!("unexpected '{snippet}'")
                }
            };
            return (message, pos.row + 1, pos.column + 1);
        }

        if !visited_children && cursor.goto_first_child() {
            continue;
        }
        if cursor.goto_next_sibling() {
            visited_children = false;
            continue;
        }
        if !cursor.goto_parent() {
            break;
        }
        visited_children = true;
    }
    // has_error() was set but no error node surfaced; still reject the file.
    ("syntax error".to_string(), 1, 1)
}
