//! Typed AST nodes for expressions.
//!
//! Parenthesized expressions are transparent: casting a PAREN_EXPR yields the
//! expression inside it, matching an ESTree tree built without
//! `preserveParens`.

use crate::ast::{ast_node, child_node, child_nodes, child_token, AstNode};
use crate::cst::{SyntaxNode, SyntaxToken};
use crate::literal;
use crate::syntax_kind::SyntaxKind;

// ── Expr enum ────────────────────────────────────────────────────────────

/// Any expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal),
    NameRef(NameRef),
    ThisExpr(ThisExpr),
    ArrayExpr(ArrayExpr),
    ObjectExpr(ObjectExpr),
    CallExpr(CallExpr),
    NewExpr(NewExpr),
    MemberExpr(MemberExpr),
    UnaryExpr(UnaryExpr),
    UpdateExpr(UpdateExpr),
    BinaryExpr(BinaryExpr),
    LogicalExpr(LogicalExpr),
    ConditionalExpr(ConditionalExpr),
    AssignExpr(AssignExpr),
    SequenceExpr(SequenceExpr),
}

impl AstNode for Expr {
    fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::PAREN_EXPR => return node.children().find_map(Expr::cast),
            SyntaxKind::LITERAL => Expr::Literal(Literal { syntax: node }),
            SyntaxKind::NAME_REF => Expr::NameRef(NameRef { syntax: node }),
            SyntaxKind::THIS_EXPR => Expr::ThisExpr(ThisExpr { syntax: node }),
            SyntaxKind::ARRAY_EXPR => Expr::ArrayExpr(ArrayExpr { syntax: node }),
            SyntaxKind::OBJECT_EXPR => Expr::ObjectExpr(ObjectExpr { syntax: node }),
            SyntaxKind::CALL_EXPR => Expr::CallExpr(CallExpr { syntax: node }),
            SyntaxKind::NEW_EXPR => Expr::NewExpr(NewExpr { syntax: node }),
            SyntaxKind::MEMBER_EXPR => Expr::MemberExpr(MemberExpr { syntax: node }),
            SyntaxKind::UNARY_EXPR => Expr::UnaryExpr(UnaryExpr { syntax: node }),
            SyntaxKind::UPDATE_EXPR => Expr::UpdateExpr(UpdateExpr { syntax: node }),
            SyntaxKind::BINARY_EXPR => Expr::BinaryExpr(BinaryExpr { syntax: node }),
            SyntaxKind::LOGICAL_EXPR => Expr::LogicalExpr(LogicalExpr { syntax: node }),
            SyntaxKind::CONDITIONAL_EXPR => {
                Expr::ConditionalExpr(ConditionalExpr { syntax: node })
            }
            SyntaxKind::ASSIGN_EXPR => Expr::AssignExpr(AssignExpr { syntax: node }),
            SyntaxKind::SEQUENCE_EXPR => Expr::SequenceExpr(SequenceExpr { syntax: node }),
            _ => return None,
        };
        Some(expr)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(n) => &n.syntax,
            Expr::NameRef(n) => &n.syntax,
            Expr::ThisExpr(n) => &n.syntax,
            Expr::ArrayExpr(n) => &n.syntax,
            Expr::ObjectExpr(n) => &n.syntax,
            Expr::CallExpr(n) => &n.syntax,
            Expr::NewExpr(n) => &n.syntax,
            Expr::MemberExpr(n) => &n.syntax,
            Expr::UnaryExpr(n) => &n.syntax,
            Expr::UpdateExpr(n) => &n.syntax,
            Expr::BinaryExpr(n) => &n.syntax,
            Expr::LogicalExpr(n) => &n.syntax,
            Expr::ConditionalExpr(n) => &n.syntax,
            Expr::AssignExpr(n) => &n.syntax,
            Expr::SequenceExpr(n) => &n.syntax,
        }
    }
}

impl Expr {
    /// The ESTree node type name (`CallExpression`, `Literal`, ...).
    pub fn kind_name(&self) -> &'static str {
        self.syntax().kind().estree_name().unwrap_or("Unknown")
    }

    /// Byte offset where the expression starts.
    pub fn start(&self) -> u32 {
        self.syntax().text_range().start().into()
    }
}

/// First significant token directly under a node.
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|it| !it.kind().is_trivia())
}

// ── Literal ──────────────────────────────────────────────────────────────

ast_node!(Literal, LITERAL);

/// The runtime value of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl Literal {
    /// The literal token (STRING, NUMBER, TRUE_KW, FALSE_KW, NULL_KW).
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.syntax)
    }

    /// Decode the literal's value.
    pub fn value(&self) -> Option<LiteralValue> {
        let token = self.token()?;
        let value = match token.kind() {
            SyntaxKind::STRING => LiteralValue::String(literal::unescape_string(token.text())),
            SyntaxKind::NUMBER => LiteralValue::Number(literal::parse_number(token.text())),
            SyntaxKind::TRUE_KW => LiteralValue::Boolean(true),
            SyntaxKind::FALSE_KW => LiteralValue::Boolean(false),
            SyntaxKind::NULL_KW => LiteralValue::Null,
            _ => return None,
        };
        Some(value)
    }
}

// ── Name Reference ───────────────────────────────────────────────────────

ast_node!(NameRef, NAME_REF);

impl NameRef {
    /// The identifier text.
    pub fn text(&self) -> String {
        child_token(&self.syntax, SyntaxKind::IDENT)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }
}

ast_node!(ThisExpr, THIS_EXPR);

// ── Array and object literals ────────────────────────────────────────────

ast_node!(ArrayExpr, ARRAY_EXPR);

impl ArrayExpr {
    /// The element expressions, in source order.
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        child_nodes(&self.syntax)
    }
}

ast_node!(ObjectExpr, OBJECT_EXPR);

// ── Calls ────────────────────────────────────────────────────────────────

ast_node!(CallExpr, CALL_EXPR);

impl CallExpr {
    /// The expression being called.
    pub fn callee(&self) -> Option<Expr> {
        child_node(&self.syntax)
    }

    /// The argument list.
    pub fn arg_list(&self) -> Option<ArgList> {
        child_node(&self.syntax)
    }

    /// The argument expressions (empty when the list is missing).
    pub fn args(&self) -> Vec<Expr> {
        self.arg_list()
            .map(|list| list.args().collect())
            .unwrap_or_default()
    }
}

ast_node!(ArgList, ARG_LIST);

impl ArgList {
    pub fn args(&self) -> impl Iterator<Item = Expr> + '_ {
        child_nodes(&self.syntax)
    }
}

ast_node!(NewExpr, NEW_EXPR);
ast_node!(MemberExpr, MEMBER_EXPR);

// ── Operators ────────────────────────────────────────────────────────────

ast_node!(UnaryExpr, UNARY_EXPR);

impl UnaryExpr {
    /// The operator token (`!`, `-`, `typeof`, ...).
    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.syntax)
    }

    pub fn operand(&self) -> Option<Expr> {
        child_node(&self.syntax)
    }
}

ast_node!(UpdateExpr, UPDATE_EXPR);

ast_node!(BinaryExpr, BINARY_EXPR);

impl BinaryExpr {
    pub fn lhs(&self) -> Option<Expr> {
        child_node(&self.syntax)
    }

    pub fn rhs(&self) -> Option<Expr> {
        child_nodes(&self.syntax).nth(1)
    }

    /// The operator token.
    pub fn op(&self) -> Option<SyntaxToken> {
        first_token(&self.syntax)
    }
}

ast_node!(LogicalExpr, LOGICAL_EXPR);
ast_node!(ConditionalExpr, CONDITIONAL_EXPR);
ast_node!(AssignExpr, ASSIGN_EXPR);
ast_node!(SequenceExpr, SEQUENCE_EXPR);
