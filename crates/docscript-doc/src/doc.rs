//! The Doc IR and its builders.
//!
//! A [`Doc`] describes content plus line-break opportunities; the printer
//! decides the final layout. Builders mirror the JavaScript pretty-printer
//! API the DSL is named after (`group`, `indent`, `ifBreak`, ...), and the
//! derived builders are defined purely in terms of the primitive variants:
//!
//! - `hardline` is `Concat([Line(Hard), BreakParent])`
//! - `literalline` is `Concat([Line(Literal), BreakParent])`
//! - `dedent(d)` is `Align(d, -1)`
//! - `dedent_to_root(d)` is `Align(d, ToRoot)`
//! - `mark_as_root(d)` is `Align(d, MarkRoot)`
//! - `conditional_group(states)` is `Group(states[0], false, Some(states))`

use once_cell::sync::Lazy;
use thiserror::Error;

/// A document IR node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Literal text to emit verbatim.
    Text(String),
    /// A sequence of docs rendered in order.
    Concat(Vec<Doc>),
    /// Increase indentation of nested line breaks by one level.
    Indent(Box<Doc>),
    /// Change indentation of nested line breaks by an explicit amount.
    Align { contents: Box<Doc>, kind: AlignKind },
    /// Render flat if it fits on the line, broken otherwise.
    ///
    /// `expanded_states` lists alternatives tried in order when the flat
    /// rendering does not fit; the last one is the fallback.
    Group {
        contents: Box<Doc>,
        should_break: bool,
        expanded_states: Option<Vec<Doc>>,
    },
    /// Alternating content/separator parts, each separator broken only when
    /// the next content would not fit.
    Fill(Vec<Doc>),
    /// Choose content by the break state of the enclosing group.
    IfBreak {
        break_contents: Box<Doc>,
        flat_contents: Box<Doc>,
    },
    /// Content deferred until just before the next line break.
    LineSuffix(Box<Doc>),
    /// A line break opportunity.
    Line(LineKind),
    /// Forces every enclosing group to break.
    BreakParent,
    /// Flushes pending line-suffix content with a hard break.
    LineSuffixBoundary,
    /// Removes trailing whitespace on the current line.
    Trim,
}

/// How a [`Doc::Line`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A space when flat, a newline when broken.
    Normal,
    /// Nothing when flat, a newline when broken.
    Soft,
    /// Always a newline.
    Hard,
    /// Always a newline, without re-indenting (only the root indentation).
    Literal,
}

/// The indentation change of a [`Doc::Align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignKind {
    /// Add `n` spaces; a negative width removes the innermost indentation
    /// level instead.
    Width(i32),
    /// Back to the marked root indentation (or column zero).
    ToRoot,
    /// Mark the current indentation as the root for nested `ToRoot` aligns
    /// and literal lines.
    MarkRoot,
}

/// Errors raised by Doc builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    #[error("conditionalGroup requires at least one state")]
    EmptyConditionalGroup,
}

// ── Constants ───────────────────────────────────────────────────────────

pub const LINE: Doc = Doc::Line(LineKind::Normal);
pub const SOFTLINE: Doc = Doc::Line(LineKind::Soft);
pub const BREAK_PARENT: Doc = Doc::BreakParent;
pub const LINE_SUFFIX_BOUNDARY: Doc = Doc::LineSuffixBoundary;
pub const TRIM: Doc = Doc::Trim;

/// `Concat([Line(Hard), BreakParent])`
pub static HARDLINE: Lazy<Doc> =
    Lazy::new(|| Doc::Concat(vec![Doc::Line(LineKind::Hard), Doc::BreakParent]));

/// `Concat([Line(Literal), BreakParent])`
pub static LITERALLINE: Lazy<Doc> =
    Lazy::new(|| Doc::Concat(vec![Doc::Line(LineKind::Literal), Doc::BreakParent]));

// ── Conversions ─────────────────────────────────────────────────────────

impl From<&str> for Doc {
    fn from(s: &str) -> Self {
        Doc::Text(s.to_string())
    }
}

impl From<String> for Doc {
    fn from(s: String) -> Self {
        Doc::Text(s)
    }
}

// ── Builders ────────────────────────────────────────────────────────────

/// Create a `Text` node from a string-like value.
pub fn text(s: impl Into<String>) -> Doc {
    Doc::Text(s.into())
}

/// Create a `Concat` from a sequence of docs.
pub fn concat(parts: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::Concat(parts.into_iter().collect())
}

pub fn indent(contents: impl Into<Doc>) -> Doc {
    Doc::Indent(Box::new(contents.into()))
}

pub fn align(kind: AlignKind, contents: impl Into<Doc>) -> Doc {
    Doc::Align {
        contents: Box::new(contents.into()),
        kind,
    }
}

/// `Align(contents, -1)`: one indentation level less.
pub fn dedent(contents: impl Into<Doc>) -> Doc {
    align(AlignKind::Width(-1), contents)
}

pub fn dedent_to_root(contents: impl Into<Doc>) -> Doc {
    align(AlignKind::ToRoot, contents)
}

pub fn mark_as_root(contents: impl Into<Doc>) -> Doc {
    align(AlignKind::MarkRoot, contents)
}

/// A group that breaks only when it does not fit.
pub fn group(contents: impl Into<Doc>) -> Doc {
    Doc::Group {
        contents: Box::new(contents.into()),
        should_break: false,
        expanded_states: None,
    }
}

/// A group whose layout alternatives are tried in order.
///
/// The first state doubles as the group's contents.
pub fn conditional_group(states: Vec<Doc>) -> Result<Doc, DocError> {
    let first = states.first().cloned().ok_or(DocError::EmptyConditionalGroup)?;
    Ok(Doc::Group {
        contents: Box::new(first),
        should_break: false,
        expanded_states: Some(states),
    })
}

pub fn fill(parts: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::Fill(parts.into_iter().collect())
}

pub fn if_break(break_contents: impl Into<Doc>, flat_contents: impl Into<Doc>) -> Doc {
    Doc::IfBreak {
        break_contents: Box::new(break_contents.into()),
        flat_contents: Box::new(flat_contents.into()),
    }
}

pub fn line_suffix(contents: impl Into<Doc>) -> Doc {
    Doc::LineSuffix(Box::new(contents.into()))
}

/// Interleave `separator` between consecutive `items`.
pub fn join(separator: impl Into<Doc>, items: impl IntoIterator<Item = Doc>) -> Doc {
    let separator = separator.into();
    let mut parts = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            parts.push(separator.clone());
        }
        parts.push(item);
    }
    Doc::Concat(parts)
}

pub fn hardline() -> Doc {
    HARDLINE.clone()
}

pub fn literalline() -> Doc {
    LITERALLINE.clone()
}
