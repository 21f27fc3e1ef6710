//! Standalone check that an expression only uses DSL-legal nodes.
//!
//! This pass covers node kinds, callees, names and literals. An integer
//! parameter (the width of `align`) must be an integer literal, optionally
//! negated. Argument counts and array/scalar shapes depend on translated
//! values and are checked by [`Translator`](crate::translate::Translator)
//! instead.

use docscript_common::LineIndex;
use docscript_parser::ast::expr::{CallExpr, Expr, NameRef};
use docscript_parser::ast::AstNode;

use crate::builder::{ArgShape, BuilderFn, BuilderValue};
use crate::error::{CompileError, CompileErrorKind};
use crate::options::Options;
use crate::translate::Translator;

pub struct Validator<'a> {
    line_index: &'a LineIndex<'a>,
    options: &'a Options,
    translator: Translator<'a>,
}

impl<'a> Validator<'a> {
    pub fn new(line_index: &'a LineIndex<'a>, options: &'a Options) -> Self {
        Self {
            line_index,
            options,
            translator: Translator::new(line_index, options),
        }
    }

    /// Walk `expr` depth-first and fail at the first illegal node.
    pub fn validate(&self, expr: &Expr) -> Result<(), CompileError> {
        match expr {
            Expr::CallExpr(call) => self.call(call),
            Expr::NameRef(name) => self.name(name),
            Expr::Literal(literal) => self.translator.literal(literal).map(drop),
            Expr::ArrayExpr(array) => array.elements().try_for_each(|e| self.validate(&e)),
            other => Err(CompileError::at(
                CompileErrorKind::NodeType,
                format!("{} is invalid node type", other.kind_name()),
                other.syntax(),
                self.line_index,
            )),
        }
    }

    fn call(&self, call: &CallExpr) -> Result<(), CompileError> {
        let builder = self.translator.callee(call)?;
        let params = builder.params();
        call.args()
            .iter()
            .enumerate()
            .try_for_each(|(i, arg)| match params.get(i) {
                Some(ArgShape::Integer) => self.translator.integer_arg(builder, arg).map(drop),
                _ => self.validate(arg),
            })
    }

    /// Builder function names pass too; only translation needs a value.
    fn name(&self, name: &NameRef) -> Result<(), CompileError> {
        let text = name.text();
        let vocabulary = self.options.vocabulary;
        if BuilderValue::from_name(&text, vocabulary).is_some()
            || BuilderFn::from_name(&text, vocabulary).is_some()
        {
            return Ok(());
        }
        Err(CompileError::at(
            CompileErrorKind::UnknownBuilderValue,
            format!("{text} is unknown doc builder value name"),
            name.syntax(),
            self.line_index,
        ))
    }
}

#[cfg(test)]
mod tests {
    use docscript_parser::ast::stmt::Stmt;

    use super::*;
    use crate::options::Vocabulary;

    fn check(source: &str) -> Result<(), String> {
        check_with(source, &Options::default())
    }

    fn check_with(source: &str, options: &Options) -> Result<(), String> {
        let file = docscript_parser::parse(source).into_result().unwrap();
        let Some(Stmt::ExprStmt(stmt)) = file.statements().next() else {
            panic!("expected an expression statement");
        };
        let line_index = LineIndex::new(source);
        Validator::new(&line_index, options)
            .validate(&stmt.expr().unwrap())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn legal_expressions_pass() {
        assert_eq!(check(r#"group(concat(["foo", line, "bar"]))"#), Ok(()));
        assert_eq!(check(r#"ifBreak("a", "b")"#), Ok(()));
    }

    #[test]
    fn shapes_and_arity_are_not_checked() {
        assert_eq!(check(r#"group(["foo"], "extra")"#), Ok(()));
        assert_eq!(check(r#"concat(["a", ["b"]])"#), Ok(()));
    }

    #[test]
    fn builder_function_names_are_allowed_as_values() {
        assert_eq!(check("concat([group, line])"), Ok(()));
    }

    #[test]
    fn first_violation_wins() {
        assert_eq!(
            check("concat([foo, 1 + 1])"),
            Err("foo is unknown doc builder value name (1:8)".to_string())
        );
        assert_eq!(
            check(r#"group(1 + 1, bar)"#),
            Err("BinaryExpression is invalid node type (1:6)".to_string())
        );
    }

    #[test]
    fn callee_and_literal_rules() {
        assert_eq!(
            check("foo()"),
            Err("foo is unknown doc builder function name (1:0)".to_string())
        );
        assert_eq!(
            check(r#"concat(["a", 3])"#),
            Err("An Literal should be string (1:13)".to_string())
        );
        assert_eq!(
            check("this.x()"),
            Err("MemberExpression is invalid callee node type (1:0)".to_string())
        );
    }

    #[test]
    fn align_width_is_an_integer_literal() {
        let options = Options {
            vocabulary: Vocabulary::Extended,
            ..Options::default()
        };
        assert_eq!(check_with(r#"align(4, "a")"#, &options), Ok(()));
        assert_eq!(check_with(r#"align(-1, concat(["a", line]))"#, &options), Ok(()));
        assert_eq!(
            check_with(r#"align("4", "a")"#, &options),
            Err("align argument should be an integer (1:6)".to_string())
        );
        assert_eq!(
            check_with(r#"align(4, foo)"#, &options),
            Err("foo is unknown doc builder value name (1:9)".to_string())
        );
    }
}
