//! docscript: compile doc-builder expressions to a Doc and print them.
//!
//! A docscript source is a single JavaScript-like expression made of
//! pretty-printer builder calls:
//!
//! ```text
//! group(concat(["foo", line, "bar"]))
//! ```
//!
//! [`evaluate`] parses it, checks that the root is one expression statement,
//! translates the expression into a [`Doc`] (failing at the first node that
//! breaks a DSL rule) and prints the Doc within the configured width.

pub mod builder;
pub mod diagnostics;
pub mod error;
mod number;
pub mod options;
pub mod translate;
pub mod validate;

use tracing::debug;

use docscript_common::LineIndex;
use docscript_doc::{print_doc_to_string, PrintOptions};
use docscript_parser::ast::expr::Expr;
use docscript_parser::ast::stmt::{SourceFile, Stmt};
use docscript_parser::ast::AstNode;

pub use docscript_common::Location;
pub use docscript_doc::Doc;
pub use error::{CompileError, CompileErrorKind, Error};
pub use options::{LiteralPolicy, Options, OptionsError, Vocabulary};

use translate::Translator;
use validate::Validator;

/// Compile `source` and print the resulting Doc.
///
/// Source without any statement prints as the empty string.
///
/// # Example
///
/// ```
/// use docscript::{evaluate, Options};
///
/// let out = evaluate(r#"group(concat(["foo", line, "bar"]))"#, &Options::default());
/// assert_eq!(out.unwrap(), "foo bar");
/// ```
pub fn evaluate(source: &str, options: &Options) -> Result<String, Error> {
    let Some(doc) = compile(source, options)? else {
        return Ok(String::new());
    };
    let output = print_doc_to_string(&doc, &PrintOptions::from(options));
    debug!(len = output.len(), "printed document");
    Ok(output)
}

/// Compile `source` into a Doc without printing it.
///
/// Returns `None` when the source has no statements. A root array literal
/// compiles to the concatenation of its elements.
pub fn compile(source: &str, options: &Options) -> Result<Option<Doc>, Error> {
    let file = docscript_parser::parse(source).into_result()?;
    let line_index = LineIndex::new(source);
    let Some(expr) = root_expression(&file, &line_index)? else {
        return Ok(None);
    };
    let value = Translator::new(&line_index, options).translate(&expr)?;
    Ok(Some(value.into_doc()))
}

/// Check that `source` only uses DSL-legal nodes, without translating it.
///
/// Argument shapes and counts are not checked; see [`validate::Validator`].
pub fn validate(source: &str, options: &Options) -> Result<(), Error> {
    let file = docscript_parser::parse(source).into_result()?;
    let line_index = LineIndex::new(source);
    if let Some(expr) = root_expression(&file, &line_index)? {
        Validator::new(&line_index, options).validate(&expr)?;
    }
    Ok(())
}

/// The expression of the single root statement, or `None` for no statements.
fn root_expression(
    file: &SourceFile,
    line_index: &LineIndex<'_>,
) -> Result<Option<Expr>, CompileError> {
    let statements: Vec<Stmt> = file.statements().collect();
    debug!(statements = statements.len(), "parsed source");

    let root = match statements.as_slice() {
        [] => {
            debug!("no statements, nothing to compile");
            return Ok(None);
        }
        [root] => root,
        [_, second, ..] => {
            return Err(CompileError::at(
                CompileErrorKind::MultipleRoots,
                "There are two root nodes",
                second.syntax(),
                line_index,
            ))
        }
    };

    match root {
        Stmt::ExprStmt(stmt) => match stmt.expr() {
            Some(expr) => Ok(Some(expr)),
            None => Err(root_shape_error(root, line_index)),
        },
        _ => Err(root_shape_error(root, line_index)),
    }
}

fn root_shape_error(root: &Stmt, line_index: &LineIndex<'_>) -> CompileError {
    CompileError::at(
        CompileErrorKind::RootShape,
        "The root node should be ExpressionStatement",
        root.syntax(),
        line_index,
    )
}
