//! Parse error types for the docscript parser.

use std::fmt;

use docscript_common::span::{Location, Span};

/// A syntax error with its byte span and human-readable location.
///
/// The parser stops at the first error, so a failed parse carries exactly
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Byte span of the offending token.
    pub span: Span,
    /// Line/column of `span.start`.
    pub location: Location,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(message: impl Into<String>, span: Span, location: Location) -> Self {
        Self {
            message: message.into(),
            span,
            location,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.location)
    }
}

impl std::error::Error for ParseError {}
