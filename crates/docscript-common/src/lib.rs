//! Shared types for the docscript crates: byte spans, line/column locations,
//! and the token vocabulary of the JavaScript expression subset.

pub mod span;
pub mod token;

pub use span::{is_line_terminator, LineIndex, Location, Span};
pub use token::{Token, TokenKind};
