//! Event-based parser for docscript.
//!
//! The parser consumes a token stream and produces events (Open/Close/Advance)
//! that are later converted into a rowan green tree. This decouples parsing
//! logic from tree construction.
//!
//! # Architecture
//!
//! 1. Parse functions call `open()` to start a node, `advance()` to consume
//!    tokens, and `close()` to finish a node with its actual kind.
//! 2. Events are collected into a flat `Vec<Event>`.
//! 3. `build_tree()` converts events into a rowan `GreenNode`.
//!
//! The `open_before()` method enables wrapping a previously completed node
//! (e.g., turning `ident` into `call_expr(ident, arg_list)`) using the
//! "forward parent" technique.
//!
//! # Trivia
//!
//! Whitespace, newlines and comments are always skipped by lookahead. They
//! still become tokens in the tree: `advance()` emits them in front of the
//! significant token, and `open()` flushes pending trivia into the parent
//! first, so every node's range starts at its first significant token.
//! Line breaks only matter for automatic semicolon insertion, which asks
//! [`Parser::has_newline_before`].

pub(crate) mod expressions;
pub(crate) mod statements;

use docscript_common::span::{is_line_terminator, LineIndex, Span};
use docscript_common::token::{Token, TokenKind};

use crate::error::ParseError;
use crate::syntax_kind::SyntaxKind;

/// A parser event. Events are collected during parsing and later converted
/// into a rowan green tree by [`Parser::build_tree`].
#[derive(Debug)]
enum Event {
    /// Start a new CST node. The `kind` is initially TOMBSTONE and gets
    /// patched by `close()` with the real node kind.
    ///
    /// `forward_parent` is used by `open_before()` to indicate that this
    /// node should be opened before the node at the specified event index.
    Open {
        kind: SyntaxKind,
        forward_parent: Option<usize>,
    },
    /// Finish the current CST node.
    Close,
    /// Consume the next token, trivia included.
    Advance,
}

/// An opaque marker for a started but not-yet-closed CST node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkOpened {
    index: usize,
}

/// An opaque marker for a completed (opened and closed) CST node.
/// Used by `open_before()` to wrap a previously completed node.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MarkClosed {
    index: usize,
}

/// Event-based parser for docscript source code.
pub(crate) struct Parser<'src> {
    /// All tokens from the lexer (including Eof).
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Collected parser events.
    events: Vec<Event>,
    /// Original source text (for extracting token text via spans).
    source: &'src str,
    /// Offset to line/column conversion for error locations.
    line_index: LineIndex<'src>,
    /// Collected parse errors.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Create a new parser from a token stream and source text.
    pub(crate) fn new(tokens: Vec<Token>, source: &'src str) -> Self {
        Self {
            tokens,
            pos: 0,
            events: Vec::new(),
            source,
            line_index: LineIndex::new(source),
            errors: Vec::new(),
        }
    }

    // ── Lookahead ──────────────────────────────────────────────────────

    /// Returns the SyntaxKind of the current significant token.
    pub(crate) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    /// Returns the SyntaxKind of the Nth significant token ahead.
    ///
    /// `nth(0)` is equivalent to `current()`. Returns `SyntaxKind::EOF` if
    /// past the end.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|token| !token.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::EOF, |token| SyntaxKind::from(token.kind))
    }

    /// Returns the text of the current significant token.
    pub(crate) fn current_text(&self) -> &'src str {
        let span = self.current_span();
        &self.source[span.start as usize..span.end as usize]
    }

    /// Returns the span of the current significant token.
    pub(crate) fn current_span(&self) -> Span {
        let pos = self.skip_to_significant(self.pos);
        if pos < self.tokens.len() {
            self.tokens[pos].span
        } else {
            // Past end -- return zero-length span at end of source.
            let end = self.source.len() as u32;
            Span::new(end, end)
        }
    }

    /// Check if the current significant token matches the given kind.
    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    /// Check if the current significant token matches any of the given kinds.
    pub(crate) fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current())
    }

    /// Whether a line break separates the previous significant token from
    /// the current one. Block comments spanning lines count as line breaks.
    pub(crate) fn has_newline_before(&self) -> bool {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .take_while(|token| token.kind.is_trivia())
            .any(|token| match token.kind {
                TokenKind::Newline => true,
                TokenKind::BlockComment => self.source
                    [token.span.start as usize..token.span.end as usize]
                    .contains(is_line_terminator),
                _ => false,
            })
    }

    // ── Mutation: node management ──────────────────────────────────────

    /// Start a new CST node. Returns a marker that must be passed to
    /// `close()` to finish the node.
    ///
    /// Pending trivia is flushed into the enclosing node first. The node kind
    /// is initially `TOMBSTONE` and gets patched by `close()`.
    pub(crate) fn open(&mut self) -> MarkOpened {
        self.eat_trivia();
        self.open_here()
    }

    /// Start the root node. Unlike `open()`, leading trivia stays inside it.
    pub(crate) fn open_root(&mut self) -> MarkOpened {
        self.open_here()
    }

    fn open_here(&mut self) -> MarkOpened {
        let mark = MarkOpened {
            index: self.events.len(),
        };
        self.events.push(Event::Open {
            kind: SyntaxKind::TOMBSTONE,
            forward_parent: None,
        });
        mark
    }

    /// Start a new CST node BEFORE a previously completed node.
    ///
    /// This enables wrapping: e.g., after parsing `ident`, we discover it's
    /// actually a function call `ident(args)`. Instead of physically
    /// inserting into the events vec (which would invalidate indices), we
    /// set a `forward_parent` link on the completed node's Open event.
    pub(crate) fn open_before(&mut self, completed: MarkClosed) -> MarkOpened {
        let mark = self.open_here();
        if let Event::Open { forward_parent, .. } = &mut self.events[completed.index] {
            *forward_parent = Some(mark.index);
        }
        mark
    }

    /// Close a CST node, patching its Open event with the actual kind.
    /// Returns a `MarkClosed` that can be used with `open_before()`.
    pub(crate) fn close(&mut self, m: MarkOpened, kind: SyntaxKind) -> MarkClosed {
        if let Event::Open {
            kind: slot_kind, ..
        } = &mut self.events[m.index]
        {
            *slot_kind = kind;
        }
        self.events.push(Event::Close);
        MarkClosed { index: m.index }
    }

    /// The kind a completed node was closed with.
    pub(crate) fn kind_of(&self, m: MarkClosed) -> SyntaxKind {
        match self.events[m.index] {
            Event::Open { kind, .. } => kind,
            _ => SyntaxKind::TOMBSTONE,
        }
    }

    // ── Mutation: token consumption ────────────────────────────────────

    /// Consume the current significant token, emitting Advance events for
    /// the trivia in front of it first.
    pub(crate) fn advance(&mut self) {
        self.eat_trivia();
        if self.pos < self.tokens.len() && self.tokens[self.pos].kind != TokenKind::Eof {
            self.events.push(Event::Advance);
            self.pos += 1;
        }
    }

    /// Emit Advance events for the trivia tokens at the current position.
    pub(crate) fn eat_trivia(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.events.push(Event::Advance);
            self.pos += 1;
        }
    }

    /// If the current token matches `kind`, consume it and return true.
    /// Otherwise, report an unexpected token and return false.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            self.error_unexpected();
            false
        }
    }

    /// If the current token matches `kind`, consume it and return true.
    /// Otherwise, return false (no error emitted).
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume everything up to the end of input into an ERROR_NODE.
    pub(crate) fn skip_rest_as_error(&mut self) {
        if self.at(SyntaxKind::EOF) {
            return;
        }
        let m = self.open();
        while !self.at(SyntaxKind::EOF) {
            self.advance();
        }
        self.close(m, SyntaxKind::ERROR_NODE);
    }

    // ── Error reporting ────────────────────────────────────────────────

    /// Record a parse error at the current token. Only the first error is
    /// kept; later calls are ignored.
    pub(crate) fn error(&mut self, message: impl Into<String>) {
        if self.has_error() {
            return;
        }
        let span = self.current_span();
        let location = self.line_index.location(span.start);
        self.errors.push(ParseError::new(message, span, location));
    }

    /// Report the current token as unexpected, with the most specific
    /// message available for it.
    pub(crate) fn error_unexpected(&mut self) {
        let current = self.current();
        let text = self.current_text();
        let message = if current == SyntaxKind::ERROR {
            if text.starts_with('"') || text.starts_with('\'') {
                "Unterminated string constant".to_string()
            } else if text.starts_with("/*") {
                "Unterminated comment".to_string()
            } else {
                let c = text.chars().next().unwrap_or('\u{fffd}');
                format!("Unexpected character '{c}'")
            }
        } else if current.is_keyword() {
            format!("Unexpected keyword '{text}'")
        } else {
            "Unexpected token".to_string()
        };
        self.error(message);
    }

    /// Whether the parser has encountered an error.
    /// Parse functions should check this and bail early.
    pub(crate) fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    // ── Helpers ────────────────────────────────────────────────────────

    /// Find the position of the next significant token starting from `pos`.
    fn skip_to_significant(&self, mut pos: usize) -> usize {
        while pos < self.tokens.len() && self.tokens[pos].kind.is_trivia() {
            pos += 1;
        }
        pos
    }

    // ── Tree building ──────────────────────────────────────────────────

    /// Convert collected events into a rowan `GreenNode` and errors.
    ///
    /// Forward parents: when `open_before(completed)` is called, the completed
    /// node's Open event gets a `forward_parent` link pointing to the wrapping
    /// Open event. During tree building, when we encounter such an Open, we
    /// follow the chain, collect all kinds, and open nodes in reverse order
    /// (outermost wrapper first). The wrapper Open events are then marked as
    /// TOMBSTONE so they are skipped when encountered later.
    pub(crate) fn build_tree(mut self) -> (rowan::GreenNode, Vec<ParseError>) {
        let mut builder = rowan::GreenNodeBuilder::new();
        let mut token_pos: usize = 0;
        let mut chain: Vec<SyntaxKind> = Vec::new();

        for i in 0..self.events.len() {
            match self.events[i] {
                Event::Open {
                    kind,
                    forward_parent: None,
                } => {
                    if kind != SyntaxKind::TOMBSTONE {
                        builder.start_node(rowan::SyntaxKind(kind as u16));
                    }
                }
                Event::Open {
                    forward_parent: Some(_),
                    ..
                } => {
                    chain.clear();
                    let mut current = Some(i);
                    while let Some(idx) = current {
                        let Event::Open {
                            kind,
                            forward_parent,
                        } = &mut self.events[idx]
                        else {
                            break;
                        };
                        chain.push(*kind);
                        current = forward_parent.take();
                        if idx != i {
                            *kind = SyntaxKind::TOMBSTONE;
                        }
                    }
                    for &kind in chain.iter().rev() {
                        if kind != SyntaxKind::TOMBSTONE {
                            builder.start_node(rowan::SyntaxKind(kind as u16));
                        }
                    }
                }
                Event::Close => builder.finish_node(),
                Event::Advance => {
                    if let Some(token) = self.tokens.get(token_pos) {
                        let kind = SyntaxKind::from(token.kind);
                        let text = &self.source[token.span.start as usize..token.span.end as usize];
                        builder.token(rowan::SyntaxKind(kind as u16), text);
                        token_pos += 1;
                    }
                }
            }
        }

        (builder.finish(), self.errors)
    }
}

/// Parse a complete source file: statements until end of input.
///
/// On the first error the remaining tokens are swept into an ERROR_NODE so
/// the tree still covers the whole source.
pub(crate) fn parse_source_file(p: &mut Parser) {
    let root = p.open_root();

    while !p.at(SyntaxKind::EOF) && !p.has_error() {
        statements::stmt(p);
    }

    if p.has_error() {
        p.skip_rest_as_error();
    }
    p.eat_trivia();
    p.close(root, SyntaxKind::SOURCE_FILE);
}
