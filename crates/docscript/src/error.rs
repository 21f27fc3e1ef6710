//! Errors raised while compiling DSL source.

use thiserror::Error;

use docscript_common::{LineIndex, Location, Span};
use docscript_parser::{ParseError, SyntaxNode};

/// Any failure of [`evaluate`](crate::evaluate).
///
/// A parse error surfaces exactly as the parser reported it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl Error {
    pub fn message(&self) -> &str {
        match self {
            Error::Parse(e) => &e.message,
            Error::Compile(e) => &e.message,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Error::Parse(e) => e.location,
            Error::Compile(e) => e.location,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Error::Parse(e) => e.span,
            Error::Compile(e) => e.span,
        }
    }
}

/// What rule a [`CompileError`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileErrorKind {
    /// More than one top-level statement.
    MultipleRoots,
    /// The top-level statement is not an expression statement.
    RootShape,
    /// A node kind the DSL does not allow.
    NodeType,
    /// A call whose callee is not a bare identifier.
    CalleeShape,
    UnknownBuilderFunction,
    UnknownBuilderValue,
    /// Array argument where a single Doc is expected, or the reverse.
    Shape,
    /// Wrong argument count.
    Arity,
    /// Missing, empty or non-string literal.
    LiteralType,
    /// An array element that is itself an array.
    NestedArray,
}

/// A DSL rule violation, located at the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({location})")]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub message: String,
    /// Byte range of the offending node.
    pub span: Span,
    pub location: Location,
}

impl CompileError {
    pub fn new(
        kind: CompileErrorKind,
        message: impl Into<String>,
        span: Span,
        location: Location,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            location,
        }
    }

    /// An error located at `node`.
    pub(crate) fn at(
        kind: CompileErrorKind,
        message: impl Into<String>,
        node: &SyntaxNode,
        line_index: &LineIndex<'_>,
    ) -> Self {
        let range = node.text_range();
        let span = Span::new(range.start().into(), range.end().into());
        Self::new(kind, message, span, line_index.location(span.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_location() {
        let err = CompileError::new(
            CompileErrorKind::MultipleRoots,
            "There are two root nodes",
            Span::new(13, 27),
            Location::new(1, 13),
        );
        assert_eq!(err.to_string(), "There are two root nodes (1:13)");
    }

    #[test]
    fn parse_errors_are_transparent() {
        let parse = ParseError::new("Unexpected token", Span::new(6, 6), Location::new(1, 6));
        let err = Error::from(parse.clone());
        assert_eq!(err.to_string(), parse.to_string());
        assert_eq!(err.location(), Location::new(1, 6));
        assert_eq!(err.span(), Span::new(6, 6));
        assert_eq!(err.message(), "Unexpected token");
    }
}
