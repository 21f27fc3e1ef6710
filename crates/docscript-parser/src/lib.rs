//! docscript parser: recursive descent parser producing a rowan-based CST.
//!
//! This crate transforms the token stream from `docscript-lexer` into a
//! lossless concrete syntax tree (CST) using the `rowan` library, and offers
//! typed AST wrappers over it. Every byte of the source is in the tree, so
//! node offsets are source offsets and locations can be computed on demand.

pub mod ast;
pub mod cst;
pub mod error;
mod literal;
mod parser;
pub mod syntax_kind;

use std::fmt::Write;

pub use cst::{SyntaxElement, SyntaxNode, SyntaxToken};
pub use error::ParseError;
pub use literal::{parse_number, unescape_string};
pub use syntax_kind::SyntaxKind;

use ast::stmt::SourceFile;

/// Result of parsing a docscript source file.
///
/// Contains the green tree (the immutable, cheap-to-clone CST) and any
/// parse errors encountered. With the first-error-only strategy, `errors`
/// will contain at most one error.
pub struct Parse {
    green: rowan::GreenNode,
    errors: Vec<ParseError>,
}

impl Parse {
    /// Build the syntax tree root from the green node.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// The typed root of the tree.
    pub fn tree(&self) -> SourceFile {
        SourceFile {
            syntax: self.syntax(),
        }
    }

    /// Parse errors encountered during parsing.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Whether parsing completed without errors.
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a `Result`, yielding the first error if there is one.
    pub fn into_result(self) -> Result<SourceFile, ParseError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(SourceFile {
                syntax: SyntaxNode::new_root(self.green),
            }),
        }
    }
}

/// Parse a docscript source file into a CST.
///
/// This is the main entry point for the parser. It lexes the source,
/// parses the token stream, and returns a [`Parse`] result containing
/// the syntax tree and any errors.
pub fn parse(source: &str) -> Parse {
    let tokens = docscript_lexer::Lexer::tokenize(source);
    let mut p = parser::Parser::new(tokens, source);
    parser::parse_source_file(&mut p);
    let (green, errors) = p.build_tree();
    Parse { green, errors }
}

/// Render a syntax tree as an indented dump, one element per line.
///
/// Nodes print as `KIND@start..end`, tokens additionally print their text.
pub fn debug_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_tree(&mut out, node, 0);
    out.trim_end().to_string()
}

fn write_tree(out: &mut String, node: &SyntaxNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}{:?}@{:?}", node.kind(), node.text_range());
    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => write_tree(out, &n, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                let _ = writeln!(
                    out,
                    "{indent}  {:?}@{:?} {:?}",
                    t.kind(),
                    t.text_range(),
                    t.text()
                );
            }
        }
    }
}
