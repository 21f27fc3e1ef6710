use serde::Serialize;

use crate::span::Span;

/// A token produced by the docscript lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token from a kind and byte offsets.
    pub fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
        }
    }
}

/// Every kind of token in the JavaScript expression subset docscript reads.
///
/// The lexer is lossless: whitespace, newlines and comments are tokens too,
/// so the concatenated token texts reproduce the source exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ── Keywords (15) ──────────────────────────────────────────────────
    Var,
    Let,
    Const,
    If,
    Else,
    True,
    False,
    Null,
    This,
    New,
    Typeof,
    Void,
    Delete,
    In,
    Instanceof,
    /// Any other reserved word (`function`, `return`, `for`, ...). The parser
    /// never accepts these.
    Reserved,

    // ── Operators (35) ─────────────────────────────────────────────────
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    StarStar,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `==`
    EqEq,
    /// `===`
    EqEqEq,
    /// `!=`
    NotEq,
    /// `!==`
    NotEqEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `!`
    Bang,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `??`
    QuestionQuestion,
    /// `?`
    Question,
    /// `=`
    Eq,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,
    /// `=>`
    FatArrow,

    // ── Delimiters (6) ─────────────────────────────────────────────────
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // ── Punctuation (4) ────────────────────────────────────────────────
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,

    // ── Literals (2) ───────────────────────────────────────────────────
    /// Quoted string, delimiters included: `"foo"`, `'bar'`.
    String,
    /// Numeric literal: `42`, `1.5e3`, `0xFF`, `.5`.
    Number,

    // ── Identifiers (1) ────────────────────────────────────────────────
    /// Identifier, e.g. `group`, `$x`, `_y`.
    Ident,

    // ── Trivia (4) ─────────────────────────────────────────────────────
    /// Run of spaces, tabs and carriage returns.
    Whitespace,
    /// A single `\n`. Only significant for automatic semicolon insertion.
    Newline,
    /// `// ...` up to (not including) the newline.
    LineComment,
    /// `/* ... */`, possibly spanning lines.
    BlockComment,

    // ── Special (2) ────────────────────────────────────────────────────
    /// End of file.
    Eof,
    /// Invalid input: an unknown character, an unterminated string or an
    /// unterminated block comment. The parser reports it.
    Error,
}

impl TokenKind {
    /// Whether this kind is trivia (skipped by the parser's lookahead).
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::Newline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        )
    }
}

/// Look up a keyword from its string representation.
///
/// Returns `Some(TokenKind)` if the string is a keyword or a reserved word,
/// `None` otherwise. The lexer calls this to distinguish keywords from
/// identifiers after scanning an identifier-shaped token.
pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "var" => Some(TokenKind::Var),
        "let" => Some(TokenKind::Let),
        "const" => Some(TokenKind::Const),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "true" => Some(TokenKind::True),
        "false" => Some(TokenKind::False),
        "null" => Some(TokenKind::Null),
        "this" => Some(TokenKind::This),
        "new" => Some(TokenKind::New),
        "typeof" => Some(TokenKind::Typeof),
        "void" => Some(TokenKind::Void),
        "delete" => Some(TokenKind::Delete),
        "in" => Some(TokenKind::In),
        "instanceof" => Some(TokenKind::Instanceof),
        "break" | "case" | "catch" | "class" | "continue" | "debugger" | "default" | "do"
        | "export" | "extends" | "finally" | "for" | "function" | "import" | "return"
        | "super" | "switch" | "throw" | "try" | "while" | "with" | "yield" | "enum" => {
            Some(TokenKind::Reserved)
        }
        _ => None,
    }
}
