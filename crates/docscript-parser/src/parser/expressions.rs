//! Pratt expression parser for docscript.
//!
//! Covers the JavaScript expression grammar the DSL is written in:
//! literals, identifiers, arrays, objects, grouping, member access, calls,
//! `new`, unary and update operators, binary operators with JavaScript
//! precedence, logical and conditional operators, assignment and sequences.

use crate::syntax_kind::SyntaxKind;

use super::{MarkClosed, Parser};

// ── Binding Power Tables ───────────────────────────────────────────────

/// Returns (left_bp, right_bp) for binary and logical operators.
///
/// Left < right means left-associative (the usual case).
/// Left > right means right-associative (`**`).
fn infix_binding_power(op: SyntaxKind) -> Option<(u8, u8)> {
    let bp = match op {
        SyntaxKind::QUESTION_QUESTION => (1, 2),
        SyntaxKind::PIPE_PIPE => (3, 4),
        SyntaxKind::AMP_AMP => (5, 6),
        SyntaxKind::PIPE => (7, 8),
        SyntaxKind::CARET => (9, 10),
        SyntaxKind::AMP => (11, 12),
        SyntaxKind::EQ_EQ | SyntaxKind::NOT_EQ | SyntaxKind::EQ_EQ_EQ | SyntaxKind::NOT_EQ_EQ => {
            (13, 14)
        }
        SyntaxKind::LT
        | SyntaxKind::GT
        | SyntaxKind::LT_EQ
        | SyntaxKind::GT_EQ
        | SyntaxKind::IN_KW
        | SyntaxKind::INSTANCEOF_KW => (15, 16),
        SyntaxKind::SHL | SyntaxKind::SHR | SyntaxKind::USHR => (17, 18),
        SyntaxKind::PLUS | SyntaxKind::MINUS => (19, 20),
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => (21, 22),
        SyntaxKind::STAR_STAR => (24, 23),
        _ => return None,
    };
    Some(bp)
}

/// Whether `op` builds a LogicalExpression rather than a BinaryExpression.
fn is_logical(op: SyntaxKind) -> bool {
    matches!(
        op,
        SyntaxKind::AMP_AMP | SyntaxKind::PIPE_PIPE | SyntaxKind::QUESTION_QUESTION
    )
}

const PREFIX_OPS: &[SyntaxKind] = &[
    SyntaxKind::BANG,
    SyntaxKind::MINUS,
    SyntaxKind::PLUS,
    SyntaxKind::TILDE,
    SyntaxKind::TYPEOF_KW,
    SyntaxKind::VOID_KW,
    SyntaxKind::DELETE_KW,
];

const UPDATE_OPS: &[SyntaxKind] = &[SyntaxKind::PLUS_PLUS, SyntaxKind::MINUS_MINUS];

const ASSIGN_OPS: &[SyntaxKind] = &[
    SyntaxKind::EQ,
    SyntaxKind::PLUS_EQ,
    SyntaxKind::MINUS_EQ,
    SyntaxKind::STAR_EQ,
    SyntaxKind::SLASH_EQ,
    SyntaxKind::PERCENT_EQ,
];

// ── Expression Entry Points ────────────────────────────────────────────

/// Parse a full expression, comma sequences included.
pub(crate) fn expr(p: &mut Parser) {
    let Some(first) = assign_expr(p) else {
        return;
    };
    if !p.at(SyntaxKind::COMMA) || p.has_error() {
        return;
    }
    let m = p.open_before(first);
    while !p.has_error() && p.eat(SyntaxKind::COMMA) {
        assign_expr(p);
    }
    p.close(m, SyntaxKind::SEQUENCE_EXPR);
}

/// Parse an assignment-level expression (no top-level commas).
pub(crate) fn assign_expr(p: &mut Parser) -> Option<MarkClosed> {
    let lhs = conditional_expr(p)?;
    if p.has_error() || !p.at_any(ASSIGN_OPS) {
        return Some(lhs);
    }
    if !matches!(
        p.kind_of(lhs),
        SyntaxKind::NAME_REF | SyntaxKind::MEMBER_EXPR | SyntaxKind::PAREN_EXPR
    ) {
        p.error("Assigning to rvalue");
        return Some(lhs);
    }
    let m = p.open_before(lhs);
    p.advance(); // operator
    assign_expr(p);
    Some(p.close(m, SyntaxKind::ASSIGN_EXPR))
}

/// `test ? consequent : alternate`
fn conditional_expr(p: &mut Parser) -> Option<MarkClosed> {
    let test = expr_bp(p, 0)?;
    if p.has_error() || !p.at(SyntaxKind::QUESTION) {
        return Some(test);
    }
    let m = p.open_before(test);
    p.advance(); // ?
    assign_expr(p);
    if !p.has_error() && p.expect(SyntaxKind::COLON) {
        assign_expr(p);
    }
    Some(p.close(m, SyntaxKind::CONDITIONAL_EXPR))
}

/// Parse a binary expression with the given minimum binding power.
///
/// This is the core Pratt parsing loop. It first parses a unary operand,
/// then loops over infix operators, consuming them as long as their binding
/// power reaches `min_bp`.
fn expr_bp(p: &mut Parser, min_bp: u8) -> Option<MarkClosed> {
    let mut lhs = unary_expr(p)?;

    loop {
        if p.has_error() {
            break;
        }
        let op = p.current();
        let Some((l_bp, r_bp)) = infix_binding_power(op) else {
            break;
        };
        if l_bp < min_bp {
            break;
        }

        let m = p.open_before(lhs);
        p.advance(); // operator
        expr_bp(p, r_bp);
        let kind = if is_logical(op) {
            SyntaxKind::LOGICAL_EXPR
        } else {
            SyntaxKind::BINARY_EXPR
        };
        lhs = p.close(m, kind);
    }

    Some(lhs)
}

/// Prefix unary/update operators, then postfix update.
fn unary_expr(p: &mut Parser) -> Option<MarkClosed> {
    if p.at_any(PREFIX_OPS) || p.at_any(UPDATE_OPS) {
        let kind = if p.at_any(UPDATE_OPS) {
            SyntaxKind::UPDATE_EXPR
        } else {
            SyntaxKind::UNARY_EXPR
        };
        let m = p.open();
        p.advance(); // operator
        unary_expr(p);
        return Some(p.close(m, kind));
    }

    let operand = call_member_expr(p)?;
    // `a\n++b` is `a; ++b`, not `a++; b`.
    if !p.has_error() && p.at_any(UPDATE_OPS) && !p.has_newline_before() {
        let m = p.open_before(operand);
        p.advance();
        return Some(p.close(m, SyntaxKind::UPDATE_EXPR));
    }
    Some(operand)
}

/// A primary expression (or `new` expression) followed by any number of
/// member accesses and calls.
fn call_member_expr(p: &mut Parser) -> Option<MarkClosed> {
    let base = if p.at(SyntaxKind::NEW_KW) {
        new_expr(p)
    } else {
        primary_expr(p)?
    };
    Some(member_chain(p, base, true))
}

/// Postfix `.name`, `[expr]` and (when `allow_call`) `(args)`.
fn member_chain(p: &mut Parser, mut lhs: MarkClosed, allow_call: bool) -> MarkClosed {
    loop {
        if p.has_error() {
            break;
        }
        match p.current() {
            SyntaxKind::DOT => {
                let m = p.open_before(lhs);
                p.advance(); // .
                // Keywords are valid property names after a dot.
                if p.at(SyntaxKind::IDENT) || p.current().is_keyword() {
                    p.advance();
                } else {
                    p.error_unexpected();
                }
                lhs = p.close(m, SyntaxKind::MEMBER_EXPR);
            }
            SyntaxKind::L_BRACKET => {
                let m = p.open_before(lhs);
                p.advance(); // [
                expr(p);
                if !p.has_error() {
                    p.expect(SyntaxKind::R_BRACKET);
                }
                lhs = p.close(m, SyntaxKind::MEMBER_EXPR);
            }
            SyntaxKind::L_PAREN if allow_call => {
                let m = p.open_before(lhs);
                arg_list(p);
                lhs = p.close(m, SyntaxKind::CALL_EXPR);
            }
            _ => break,
        }
    }
    lhs
}

/// `new Callee` or `new Callee(args)`.
fn new_expr(p: &mut Parser) -> MarkClosed {
    let m = p.open();
    p.advance(); // new
    let callee = if p.at(SyntaxKind::NEW_KW) {
        Some(new_expr(p))
    } else {
        primary_expr(p)
    };
    if let Some(callee) = callee {
        member_chain(p, callee, false);
        if !p.has_error() && p.at(SyntaxKind::L_PAREN) {
            arg_list(p);
        }
    }
    p.close(m, SyntaxKind::NEW_EXPR)
}

/// `(arg, arg, ...)` with an optional trailing comma.
fn arg_list(p: &mut Parser) {
    let m = p.open();
    p.advance(); // (
    while !p.at(SyntaxKind::R_PAREN) && !p.has_error() {
        assign_expr(p);
        if p.has_error() || !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.has_error() {
        p.expect(SyntaxKind::R_PAREN);
    }
    p.close(m, SyntaxKind::ARG_LIST);
}

// ── Primary expressions ────────────────────────────────────────────────

fn primary_expr(p: &mut Parser) -> Option<MarkClosed> {
    let kind = match p.current() {
        SyntaxKind::STRING => {
            if let Err(message) = crate::literal::check_string(p.current_text()) {
                p.error(message);
                return None;
            }
            SyntaxKind::LITERAL
        }
        SyntaxKind::NUMBER
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::NULL_KW => SyntaxKind::LITERAL,
        SyntaxKind::IDENT => SyntaxKind::NAME_REF,
        SyntaxKind::THIS_KW => SyntaxKind::THIS_EXPR,
        SyntaxKind::L_PAREN => return Some(paren_expr(p)),
        SyntaxKind::L_BRACKET => return Some(array_expr(p)),
        SyntaxKind::L_BRACE => return Some(object_expr(p)),
        _ => {
            p.error_unexpected();
            return None;
        }
    };
    let m = p.open();
    p.advance();
    Some(p.close(m, kind))
}

/// `(expr)`
fn paren_expr(p: &mut Parser) -> MarkClosed {
    let m = p.open();
    p.advance(); // (
    expr(p);
    if !p.has_error() {
        p.expect(SyntaxKind::R_PAREN);
    }
    p.close(m, SyntaxKind::PAREN_EXPR)
}

/// `[a, b, c]` with an optional trailing comma. Holes (`[a, , b]`) are
/// rejected.
fn array_expr(p: &mut Parser) -> MarkClosed {
    let m = p.open();
    p.advance(); // [
    while !p.at(SyntaxKind::R_BRACKET) && !p.has_error() {
        if p.at(SyntaxKind::COMMA) {
            p.error_unexpected();
            break;
        }
        assign_expr(p);
        if p.has_error() || !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.has_error() {
        p.expect(SyntaxKind::R_BRACKET);
    }
    p.close(m, SyntaxKind::ARRAY_EXPR)
}

/// `{ key: value, shorthand, [computed]: value }`
fn object_expr(p: &mut Parser) -> MarkClosed {
    let m = p.open();
    p.advance(); // {
    while !p.at(SyntaxKind::R_BRACE) && !p.has_error() {
        property(p);
        if p.has_error() || !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.has_error() {
        p.expect(SyntaxKind::R_BRACE);
    }
    p.close(m, SyntaxKind::OBJECT_EXPR)
}

fn property(p: &mut Parser) {
    let m = p.open();
    let key = p.current();
    match key {
        SyntaxKind::IDENT | SyntaxKind::STRING | SyntaxKind::NUMBER => p.advance(),
        k if k.is_keyword() => p.advance(),
        SyntaxKind::L_BRACKET => {
            p.advance(); // [
            assign_expr(p);
            if !p.has_error() {
                p.expect(SyntaxKind::R_BRACKET);
            }
        }
        _ => p.error_unexpected(),
    }
    if !p.has_error() {
        if p.eat(SyntaxKind::COLON) {
            assign_expr(p);
        } else if key != SyntaxKind::IDENT {
            p.error_unexpected();
        }
    }
    p.close(m, SyntaxKind::PROPERTY);
}
