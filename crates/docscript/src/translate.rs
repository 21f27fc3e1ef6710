//! Single-pass translation of a DSL expression into a Doc.
//!
//! Shape rules are checked while translating, so the first error reported is
//! always the first offending node in depth-first, left-to-right order.

use tracing::trace;

use docscript_common::LineIndex;
use docscript_doc::doc::{self, AlignKind, Doc};
use docscript_parser::ast::expr::{ArrayExpr, CallExpr, Expr, Literal, LiteralValue, NameRef};
use docscript_parser::ast::AstNode;
use docscript_parser::SyntaxKind;

use crate::builder::{ArgShape, BuilderFn, BuilderValue};
use crate::error::{CompileError, CompileErrorKind};
use crate::number::js_number_to_string;
use crate::options::{LiteralPolicy, Options};

/// A translated expression: one Doc, or the Docs of an array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Doc(Doc),
    Array(Vec<Doc>),
}

impl Value {
    /// Collapse to a single Doc; an array becomes its concatenation.
    pub fn into_doc(self) -> Doc {
        match self {
            Value::Doc(doc) => doc,
            Value::Array(docs) => Doc::Concat(docs),
        }
    }
}

pub struct Translator<'a> {
    line_index: &'a LineIndex<'a>,
    options: &'a Options,
}

impl<'a> Translator<'a> {
    pub fn new(line_index: &'a LineIndex<'a>, options: &'a Options) -> Self {
        Self {
            line_index,
            options,
        }
    }

    pub fn translate(&self, expr: &Expr) -> Result<Value, CompileError> {
        match expr {
            Expr::CallExpr(call) => self.call(call).map(Value::Doc),
            Expr::NameRef(name) => self.builder_value(name).map(Value::Doc),
            Expr::Literal(literal) => self.literal(literal).map(Value::Doc),
            Expr::ArrayExpr(array) => self.array(array).map(Value::Array),
            other => Err(self.error(
                CompileErrorKind::NodeType,
                format!("{} is invalid node type", other.kind_name()),
                other,
            )),
        }
    }

    fn call(&self, call: &CallExpr) -> Result<Doc, CompileError> {
        let builder = self.callee(call)?;
        let args = call.args();
        if args.len() != builder.arity() {
            return Err(self.error(
                CompileErrorKind::Arity,
                format!(
                    "{} expects {} argument(s) but got {}",
                    builder.name(),
                    builder.arity(),
                    args.len()
                ),
                call,
            ));
        }
        trace!(builder = builder.name(), "translating call");

        let doc = match builder {
            BuilderFn::Group => doc::group(self.scalar_arg(builder, &args[0])?),
            BuilderFn::ConditionalGroup => {
                let states = self.array_arg(builder, &args[0])?;
                doc::conditional_group(states).map_err(|_| {
                    self.error(
                        CompileErrorKind::Shape,
                        "conditionalGroup argument should not be empty",
                        &args[0],
                    )
                })?
            }
            BuilderFn::Concat => doc::concat(self.array_arg(builder, &args[0])?),
            BuilderFn::Fill => doc::fill(self.array_arg(builder, &args[0])?),
            BuilderFn::Indent => doc::indent(self.scalar_arg(builder, &args[0])?),
            BuilderFn::Dedent => doc::dedent(self.scalar_arg(builder, &args[0])?),
            BuilderFn::MarkAsRoot => doc::mark_as_root(self.scalar_arg(builder, &args[0])?),
            BuilderFn::DedentToRoot => doc::dedent_to_root(self.scalar_arg(builder, &args[0])?),
            BuilderFn::LineSuffix => doc::line_suffix(self.scalar_arg(builder, &args[0])?),
            BuilderFn::IfBreak => {
                let break_contents = self.scalar_arg(builder, &args[0])?;
                let flat_contents = self.scalar_arg(builder, &args[1])?;
                doc::if_break(break_contents, flat_contents)
            }
            BuilderFn::Join => {
                let separator = self.scalar_arg(builder, &args[0])?;
                let items = self.array_arg(builder, &args[1])?;
                doc::join(separator, items)
            }
            BuilderFn::Align => {
                let width = self.integer_arg(builder, &args[0])?;
                let contents = self.scalar_arg(builder, &args[1])?;
                doc::align(AlignKind::Width(width), contents)
            }
        };
        Ok(doc)
    }

    /// Resolve the builder a call names.
    pub(crate) fn callee(&self, call: &CallExpr) -> Result<BuilderFn, CompileError> {
        let name = match call.callee() {
            Some(Expr::NameRef(name)) => name.text(),
            Some(other) => {
                return Err(self.error(
                    CompileErrorKind::CalleeShape,
                    format!("{} is invalid callee node type", other.kind_name()),
                    &other,
                ))
            }
            None => {
                return Err(self.error(
                    CompileErrorKind::CalleeShape,
                    "Unknown is invalid callee node type",
                    call,
                ))
            }
        };
        BuilderFn::from_name(&name, self.options.vocabulary).ok_or_else(|| {
            self.error(
                CompileErrorKind::UnknownBuilderFunction,
                format!("{name} is unknown doc builder function name"),
                call,
            )
        })
    }

    fn builder_value(&self, name: &NameRef) -> Result<Doc, CompileError> {
        let text = name.text();
        match BuilderValue::from_name(&text, self.options.vocabulary) {
            Some(value) => Ok(value.to_doc()),
            None => Err(self.error(
                CompileErrorKind::UnknownBuilderValue,
                format!("{text} is unknown doc builder value name"),
                name,
            )),
        }
    }

    pub(crate) fn literal(&self, literal: &Literal) -> Result<Doc, CompileError> {
        let policy = self.options.literal_policy;
        let message = match (literal.value(), policy) {
            (Some(LiteralValue::String(s)), _) if s.is_empty() => "An Literal should not be empty",
            (Some(LiteralValue::String(s)), _) => return Ok(doc::text(s)),
            (Some(LiteralValue::Number(n)), LiteralPolicy::AllowNumbers) => {
                return Ok(doc::text(js_number_to_string(n)))
            }
            (_, LiteralPolicy::StringsOnly) => "An Literal should be string",
            (_, LiteralPolicy::AllowNumbers) => "An Literal should be string or number",
        };
        Err(self.error(CompileErrorKind::LiteralType, message, literal))
    }

    fn array(&self, array: &ArrayExpr) -> Result<Vec<Doc>, CompileError> {
        array
            .elements()
            .map(|element| match self.translate(&element)? {
                Value::Doc(doc) => Ok(doc),
                Value::Array(_) => Err(self.error(
                    CompileErrorKind::NestedArray,
                    "An array should not be nested in an array",
                    &element,
                )),
            })
            .collect()
    }

    fn scalar_arg(&self, builder: BuilderFn, arg: &Expr) -> Result<Doc, CompileError> {
        match self.translate(arg)? {
            Value::Doc(doc) => Ok(doc),
            Value::Array(_) => Err(self.shape_error(builder, ArgShape::Scalar, arg)),
        }
    }

    fn array_arg(&self, builder: BuilderFn, arg: &Expr) -> Result<Vec<Doc>, CompileError> {
        match self.translate(arg)? {
            Value::Array(docs) => Ok(docs),
            Value::Doc(_) => Err(self.shape_error(builder, ArgShape::Array, arg)),
        }
    }

    /// An integer literal, optionally negated: `2`, `-1`.
    pub(crate) fn integer_arg(&self, builder: BuilderFn, arg: &Expr) -> Result<i32, CompileError> {
        let number = match arg {
            Expr::Literal(literal) => number_value(literal),
            Expr::UnaryExpr(unary)
                if unary.op().is_some_and(|op| op.kind() == SyntaxKind::MINUS) =>
            {
                match unary.operand() {
                    Some(Expr::Literal(literal)) => number_value(&literal).map(|n| -n),
                    _ => None,
                }
            }
            _ => None,
        };
        match number {
            Some(n) if n.fract() == 0.0 && n >= i32::MIN as f64 && n <= i32::MAX as f64 => {
                Ok(n as i32)
            }
            _ => Err(self.shape_error(builder, ArgShape::Integer, arg)),
        }
    }

    fn shape_error(&self, builder: BuilderFn, expected: ArgShape, arg: &Expr) -> CompileError {
        let name = builder.name();
        let message = match expected {
            ArgShape::Scalar => format!("{name} argument shouldn't be an array"),
            ArgShape::Array => format!("{name} argument should be an array"),
            ArgShape::Integer => format!("{name} argument should be an integer"),
        };
        self.error(CompileErrorKind::Shape, message, arg)
    }

    fn error(
        &self,
        kind: CompileErrorKind,
        message: impl Into<String>,
        node: &impl AstNode,
    ) -> CompileError {
        CompileError::at(kind, message, node.syntax(), self.line_index)
    }
}

fn number_value(literal: &Literal) -> Option<f64> {
    match literal.value()? {
        LiteralValue::Number(n) => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use docscript_doc::doc::*;
    use docscript_parser::ast::stmt::Stmt;

    use super::*;
    use crate::options::Vocabulary;

    fn translate_with(source: &str, options: &Options) -> Result<Value, CompileError> {
        let file = docscript_parser::parse(source).into_result().unwrap();
        let Some(Stmt::ExprStmt(stmt)) = file.statements().next() else {
            panic!("expected an expression statement");
        };
        let expr = stmt.expr().unwrap();
        let line_index = LineIndex::new(source);
        Translator::new(&line_index, options).translate(&expr)
    }

    fn translate(source: &str) -> Result<Value, CompileError> {
        translate_with(source, &Options::default())
    }

    fn translate_doc(source: &str) -> Doc {
        match translate(source).unwrap() {
            Value::Doc(doc) => doc,
            Value::Array(_) => panic!("expected a single doc"),
        }
    }

    fn error(source: &str) -> String {
        translate(source).unwrap_err().to_string()
    }

    #[test]
    fn every_builder_translates() {
        assert_eq!(translate_doc(r#"group("a")"#), group(text("a")));
        assert_eq!(
            translate_doc(r#"conditionalGroup(["a", "b"])"#),
            conditional_group(vec![text("a"), text("b")]).unwrap()
        );
        assert_eq!(translate_doc(r#"concat(["a", line])"#), concat([text("a"), LINE]));
        assert_eq!(translate_doc(r#"fill(["a", softline])"#), fill([text("a"), SOFTLINE]));
        assert_eq!(translate_doc(r#"indent("a")"#), indent(text("a")));
        assert_eq!(translate_doc(r#"dedent("a")"#), dedent(text("a")));
        assert_eq!(translate_doc(r#"markAsRoot("a")"#), mark_as_root(text("a")));
        assert_eq!(translate_doc(r#"dedentToRoot("a")"#), dedent_to_root(text("a")));
        assert_eq!(translate_doc(r#"lineSuffix("a")"#), line_suffix(text("a")));
        assert_eq!(
            translate_doc(r#"ifBreak("a", "b")"#),
            if_break(text("a"), text("b"))
        );
        assert_eq!(
            translate_doc(r#"join(",", ["a", "b"])"#),
            concat([text("a"), text(","), text("b")])
        );
    }

    #[test]
    fn builder_values() {
        assert_eq!(translate_doc("hardline"), hardline());
        assert_eq!(translate_doc("literalline"), literalline());
        assert_eq!(translate_doc("breakParent"), BREAK_PARENT);
        assert_eq!(translate_doc("lineSuffixBoundary"), LINE_SUFFIX_BOUNDARY);
    }

    #[test]
    fn array_translates_to_sequence() {
        assert_eq!(
            translate(r#"["a", line]"#).unwrap(),
            Value::Array(vec![text("a"), LINE])
        );
    }

    #[test]
    fn parentheses_are_transparent() {
        assert_eq!(translate_doc(r#"group(("a"))"#), group(text("a")));
    }

    #[test]
    fn join_of_empty_array_is_empty_concat() {
        assert_eq!(translate_doc(r#"join(",", [])"#), concat(Vec::<Doc>::new()));
    }

    #[test]
    fn shape_errors() {
        assert_eq!(error(r#"group(["foo"])"#), "group argument shouldn't be an array (1:6)");
        assert_eq!(error(r#"concat("foo")"#), "concat argument should be an array (1:7)");
        assert_eq!(error(r#"join(["a"], ["b"])"#), "join argument shouldn't be an array (1:5)");
        assert_eq!(error(r#"join("a", "b")"#), "join argument should be an array (1:10)");
        assert_eq!(
            error("conditionalGroup([])"),
            "conditionalGroup argument should not be empty (1:17)"
        );
    }

    #[test]
    fn arity_errors() {
        assert_eq!(error(r#"group("a", "b")"#), "group expects 1 argument(s) but got 2 (1:0)");
        assert_eq!(error(r#"ifBreak("a")"#), "ifBreak expects 2 argument(s) but got 1 (1:0)");
        assert_eq!(error("concat()"), "concat expects 1 argument(s) but got 0 (1:0)");
    }

    #[test]
    fn nested_array_error() {
        assert_eq!(
            error(r#"concat(["foo", ["bar"]])"#),
            "An array should not be nested in an array (1:15)"
        );
    }

    #[test]
    fn callee_must_be_identifier() {
        assert_eq!(
            error(r#"a.b("x")"#),
            "MemberExpression is invalid callee node type (1:0)"
        );
    }

    #[test]
    fn builder_function_is_not_a_value() {
        assert_eq!(
            error("concat([group])"),
            "group is unknown doc builder value name (1:8)"
        );
    }

    #[test]
    fn literal_policy() {
        assert_eq!(error("concat([3])"), "An Literal should be string (1:8)");
        assert_eq!(error(r#"concat([""])"#), "An Literal should not be empty (1:8)");
        assert_eq!(error("concat([true])"), "An Literal should be string (1:8)");

        let options = Options {
            literal_policy: LiteralPolicy::AllowNumbers,
            ..Options::default()
        };
        assert_eq!(
            translate_with("concat([3, 1.50, 0x10])", &options).unwrap(),
            Value::Doc(concat([text("3"), text("1.5"), text("16")]))
        );
        assert_eq!(
            translate_with("concat([null])", &options).unwrap_err().to_string(),
            "An Literal should be string or number (1:8)"
        );
    }

    #[test]
    fn extended_vocabulary() {
        let options = Options {
            vocabulary: Vocabulary::Extended,
            ..Options::default()
        };
        assert_eq!(
            translate_with(r#"align(4, "a")"#, &options).unwrap(),
            Value::Doc(align(AlignKind::Width(4), text("a")))
        );
        assert_eq!(
            translate_with(r#"align(-1, "a")"#, &options).unwrap(),
            Value::Doc(dedent(text("a")))
        );
        assert_eq!(
            translate_with("trim", &options).unwrap(),
            Value::Doc(TRIM)
        );
        assert_eq!(
            translate_with(r#"align(1.5, "a")"#, &options).unwrap_err().to_string(),
            "align argument should be an integer (1:6)"
        );
        assert_eq!(
            error(r#"align(4, "a")"#),
            "align is unknown doc builder function name (1:0)"
        );
    }
}
