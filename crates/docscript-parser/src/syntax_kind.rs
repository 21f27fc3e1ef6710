//! SyntaxKind enum for the docscript CST.
//!
//! This is a superset of `TokenKind` (mapped to SCREAMING_SNAKE_CASE) plus
//! composite node kinds for CST nodes produced by the parser.

use docscript_common::token::TokenKind;

/// Every kind of syntax element in the docscript CST.
///
/// Token kinds (leaves) are mapped 1:1 from [`TokenKind`]. Composite node kinds
/// represent parser-produced tree nodes. The first two values are sentinels used
/// by the event-based parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // ── Sentinels ──────────────────────────────────────────────────────
    /// Placeholder kind for incomplete/unfinished parser events.
    TOMBSTONE = 0,
    /// Wrapper for tokens that follow a parse error.
    ERROR_NODE = 1,

    // ── Keywords ───────────────────────────────────────────────────────
    VAR_KW,
    LET_KW,
    CONST_KW,
    IF_KW,
    ELSE_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    THIS_KW,
    NEW_KW,
    TYPEOF_KW,
    VOID_KW,
    DELETE_KW,
    IN_KW,
    INSTANCEOF_KW,
    RESERVED_KW,

    // ── Operators ──────────────────────────────────────────────────────
    PLUS,
    MINUS,
    STAR,
    STAR_STAR,
    SLASH,
    PERCENT,
    PLUS_PLUS,
    MINUS_MINUS,
    EQ_EQ,
    EQ_EQ_EQ,
    NOT_EQ,
    NOT_EQ_EQ,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    SHL,
    SHR,
    USHR,
    AMP,
    PIPE,
    CARET,
    TILDE,
    BANG,
    AMP_AMP,
    PIPE_PIPE,
    QUESTION_QUESTION,
    QUESTION,
    EQ,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PERCENT_EQ,
    FAT_ARROW,

    // ── Delimiters and punctuation ─────────────────────────────────────
    L_PAREN,
    R_PAREN,
    L_BRACKET,
    R_BRACKET,
    L_BRACE,
    R_BRACE,
    COMMA,
    DOT,
    COLON,
    SEMICOLON,

    // ── Literals and identifiers ───────────────────────────────────────
    STRING,
    NUMBER,
    IDENT,

    // ── Trivia ─────────────────────────────────────────────────────────
    WHITESPACE,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // ── Special tokens ─────────────────────────────────────────────────
    EOF,
    ERROR,

    // ── Statement nodes ────────────────────────────────────────────────
    /// Root node of every parse.
    SOURCE_FILE,
    /// `expr;`
    EXPR_STMT,
    /// `{ stmt* }`
    BLOCK_STMT,
    /// `;`
    EMPTY_STMT,
    /// `var|let|const declarator, ...;`
    VAR_DECL,
    /// `name [= init]`
    VAR_DECLARATOR,
    /// `if (test) stmt [else stmt]`
    IF_STMT,

    // ── Expression nodes ───────────────────────────────────────────────
    /// String, number, boolean or null literal.
    LITERAL,
    /// Identifier in expression position.
    NAME_REF,
    /// `this`
    THIS_EXPR,
    /// `[a, b]`
    ARRAY_EXPR,
    /// `{ key: value }`
    OBJECT_EXPR,
    /// One `key: value` (or shorthand `key`) entry of an object literal.
    PROPERTY,
    /// `(expr)`. Transparent in the typed AST.
    PAREN_EXPR,
    /// `callee(args)`
    CALL_EXPR,
    /// `(a, b)` argument list of a call or `new`.
    ARG_LIST,
    /// `new Callee(args)`
    NEW_EXPR,
    /// `a.b` or `a[b]`
    MEMBER_EXPR,
    /// `!a`, `-a`, `typeof a`, ...
    UNARY_EXPR,
    /// `++a`, `a--`
    UPDATE_EXPR,
    /// `a + b`, `a in b`, ...
    BINARY_EXPR,
    /// `a && b`, `a || b`, `a ?? b`
    LOGICAL_EXPR,
    /// `a ? b : c`
    CONDITIONAL_EXPR,
    /// `a = b`, `a += b`, ...
    ASSIGN_EXPR,
    /// `a, b`
    SEQUENCE_EXPR,
}

impl SyntaxKind {
    /// Whether this kind is trivia (whitespace, newline or comment).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::WHITESPACE
                | SyntaxKind::NEWLINE
                | SyntaxKind::LINE_COMMENT
                | SyntaxKind::BLOCK_COMMENT
        )
    }

    /// Whether this kind is a keyword token (reserved words included).
    pub fn is_keyword(self) -> bool {
        (SyntaxKind::VAR_KW as u16..=SyntaxKind::RESERVED_KW as u16).contains(&(self as u16))
    }

    /// The ESTree node type name of a composite node kind.
    ///
    /// These are the names users see in error messages (`BinaryExpression is
    /// invalid node type`). Token kinds and sentinels have no ESTree name.
    pub fn estree_name(self) -> Option<&'static str> {
        let name = match self {
            SyntaxKind::SOURCE_FILE => "Program",
            SyntaxKind::EXPR_STMT => "ExpressionStatement",
            SyntaxKind::BLOCK_STMT => "BlockStatement",
            SyntaxKind::EMPTY_STMT => "EmptyStatement",
            SyntaxKind::VAR_DECL => "VariableDeclaration",
            SyntaxKind::VAR_DECLARATOR => "VariableDeclarator",
            SyntaxKind::IF_STMT => "IfStatement",
            SyntaxKind::LITERAL => "Literal",
            SyntaxKind::NAME_REF => "Identifier",
            SyntaxKind::THIS_EXPR => "ThisExpression",
            SyntaxKind::ARRAY_EXPR => "ArrayExpression",
            SyntaxKind::OBJECT_EXPR => "ObjectExpression",
            SyntaxKind::PROPERTY => "Property",
            SyntaxKind::PAREN_EXPR => "ParenthesizedExpression",
            SyntaxKind::CALL_EXPR => "CallExpression",
            SyntaxKind::NEW_EXPR => "NewExpression",
            SyntaxKind::MEMBER_EXPR => "MemberExpression",
            SyntaxKind::UNARY_EXPR => "UnaryExpression",
            SyntaxKind::UPDATE_EXPR => "UpdateExpression",
            SyntaxKind::BINARY_EXPR => "BinaryExpression",
            SyntaxKind::LOGICAL_EXPR => "LogicalExpression",
            SyntaxKind::CONDITIONAL_EXPR => "ConditionalExpression",
            SyntaxKind::ASSIGN_EXPR => "AssignmentExpression",
            SyntaxKind::SEQUENCE_EXPR => "SequenceExpression",
            _ => return None,
        };
        Some(name)
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            // Keywords
            TokenKind::Var => SyntaxKind::VAR_KW,
            TokenKind::Let => SyntaxKind::LET_KW,
            TokenKind::Const => SyntaxKind::CONST_KW,
            TokenKind::If => SyntaxKind::IF_KW,
            TokenKind::Else => SyntaxKind::ELSE_KW,
            TokenKind::True => SyntaxKind::TRUE_KW,
            TokenKind::False => SyntaxKind::FALSE_KW,
            TokenKind::Null => SyntaxKind::NULL_KW,
            TokenKind::This => SyntaxKind::THIS_KW,
            TokenKind::New => SyntaxKind::NEW_KW,
            TokenKind::Typeof => SyntaxKind::TYPEOF_KW,
            TokenKind::Void => SyntaxKind::VOID_KW,
            TokenKind::Delete => SyntaxKind::DELETE_KW,
            TokenKind::In => SyntaxKind::IN_KW,
            TokenKind::Instanceof => SyntaxKind::INSTANCEOF_KW,
            TokenKind::Reserved => SyntaxKind::RESERVED_KW,

            // Operators
            TokenKind::Plus => SyntaxKind::PLUS,
            TokenKind::Minus => SyntaxKind::MINUS,
            TokenKind::Star => SyntaxKind::STAR,
            TokenKind::StarStar => SyntaxKind::STAR_STAR,
            TokenKind::Slash => SyntaxKind::SLASH,
            TokenKind::Percent => SyntaxKind::PERCENT,
            TokenKind::PlusPlus => SyntaxKind::PLUS_PLUS,
            TokenKind::MinusMinus => SyntaxKind::MINUS_MINUS,
            TokenKind::EqEq => SyntaxKind::EQ_EQ,
            TokenKind::EqEqEq => SyntaxKind::EQ_EQ_EQ,
            TokenKind::NotEq => SyntaxKind::NOT_EQ,
            TokenKind::NotEqEq => SyntaxKind::NOT_EQ_EQ,
            TokenKind::Lt => SyntaxKind::LT,
            TokenKind::Gt => SyntaxKind::GT,
            TokenKind::LtEq => SyntaxKind::LT_EQ,
            TokenKind::GtEq => SyntaxKind::GT_EQ,
            TokenKind::Shl => SyntaxKind::SHL,
            TokenKind::Shr => SyntaxKind::SHR,
            TokenKind::UShr => SyntaxKind::USHR,
            TokenKind::Amp => SyntaxKind::AMP,
            TokenKind::Pipe => SyntaxKind::PIPE,
            TokenKind::Caret => SyntaxKind::CARET,
            TokenKind::Tilde => SyntaxKind::TILDE,
            TokenKind::Bang => SyntaxKind::BANG,
            TokenKind::AmpAmp => SyntaxKind::AMP_AMP,
            TokenKind::PipePipe => SyntaxKind::PIPE_PIPE,
            TokenKind::QuestionQuestion => SyntaxKind::QUESTION_QUESTION,
            TokenKind::Question => SyntaxKind::QUESTION,
            TokenKind::Eq => SyntaxKind::EQ,
            TokenKind::PlusEq => SyntaxKind::PLUS_EQ,
            TokenKind::MinusEq => SyntaxKind::MINUS_EQ,
            TokenKind::StarEq => SyntaxKind::STAR_EQ,
            TokenKind::SlashEq => SyntaxKind::SLASH_EQ,
            TokenKind::PercentEq => SyntaxKind::PERCENT_EQ,
            TokenKind::FatArrow => SyntaxKind::FAT_ARROW,

            // Delimiters and punctuation
            TokenKind::LParen => SyntaxKind::L_PAREN,
            TokenKind::RParen => SyntaxKind::R_PAREN,
            TokenKind::LBracket => SyntaxKind::L_BRACKET,
            TokenKind::RBracket => SyntaxKind::R_BRACKET,
            TokenKind::LBrace => SyntaxKind::L_BRACE,
            TokenKind::RBrace => SyntaxKind::R_BRACE,
            TokenKind::Comma => SyntaxKind::COMMA,
            TokenKind::Dot => SyntaxKind::DOT,
            TokenKind::Colon => SyntaxKind::COLON,
            TokenKind::Semicolon => SyntaxKind::SEMICOLON,

            // Literals and identifiers
            TokenKind::String => SyntaxKind::STRING,
            TokenKind::Number => SyntaxKind::NUMBER,
            TokenKind::Ident => SyntaxKind::IDENT,

            // Trivia
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::LineComment => SyntaxKind::LINE_COMMENT,
            TokenKind::BlockComment => SyntaxKind::BLOCK_COMMENT,

            // Special
            TokenKind::Eof => SyntaxKind::EOF,
            TokenKind::Error => SyntaxKind::ERROR,
        }
    }
}

impl SyntaxKind {
    /// The last variant. Used to bounds-check raw kinds coming back from rowan.
    pub(crate) const LAST: SyntaxKind = SyntaxKind::SEQUENCE_EXPR;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_to_syntax_kind_keywords() {
        assert_eq!(SyntaxKind::from(TokenKind::Const), SyntaxKind::CONST_KW);
        assert_eq!(SyntaxKind::from(TokenKind::Typeof), SyntaxKind::TYPEOF_KW);
        assert_eq!(SyntaxKind::from(TokenKind::Reserved), SyntaxKind::RESERVED_KW);
    }

    #[test]
    fn token_kind_to_syntax_kind_operators() {
        assert_eq!(SyntaxKind::from(TokenKind::UShr), SyntaxKind::USHR);
        assert_eq!(SyntaxKind::from(TokenKind::QuestionQuestion), SyntaxKind::QUESTION_QUESTION);
        assert_eq!(SyntaxKind::from(TokenKind::LBracket), SyntaxKind::L_BRACKET);
    }

    #[test]
    fn sentinel_kinds_are_first_values() {
        assert_eq!(SyntaxKind::TOMBSTONE as u16, 0);
        assert_eq!(SyntaxKind::ERROR_NODE as u16, 1);
    }

    #[test]
    fn trivia_and_keyword_classes() {
        assert!(SyntaxKind::BLOCK_COMMENT.is_trivia());
        assert!(!SyntaxKind::IDENT.is_trivia());
        assert!(SyntaxKind::VAR_KW.is_keyword());
        assert!(SyntaxKind::RESERVED_KW.is_keyword());
        assert!(!SyntaxKind::IDENT.is_keyword());
        assert!(!SyntaxKind::PLUS.is_keyword());
    }

    #[test]
    fn estree_names_of_nodes() {
        assert_eq!(SyntaxKind::BINARY_EXPR.estree_name(), Some("BinaryExpression"));
        assert_eq!(SyntaxKind::EXPR_STMT.estree_name(), Some("ExpressionStatement"));
        assert_eq!(SyntaxKind::NAME_REF.estree_name(), Some("Identifier"));
        assert_eq!(SyntaxKind::IDENT.estree_name(), None);
        assert_eq!(SyntaxKind::TOMBSTONE.estree_name(), None);
    }

    #[test]
    fn last_is_the_final_variant() {
        assert_eq!(SyntaxKind::LAST as u16, SyntaxKind::SEQUENCE_EXPR as u16);
        assert!(SyntaxKind::SOURCE_FILE < SyntaxKind::LAST);
    }
}
