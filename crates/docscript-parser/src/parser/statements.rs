//! Statement parsing: expression statements, blocks, declarations and `if`.
//!
//! Statement termination follows automatic semicolon insertion: a statement
//! ends at `;`, before a line break, before `}` or at end of input.

use crate::syntax_kind::SyntaxKind;

use super::expressions;
use super::Parser;

/// Parse one statement.
pub(crate) fn stmt(p: &mut Parser) {
    match p.current() {
        SyntaxKind::L_BRACE => block_stmt(p),
        SyntaxKind::SEMICOLON => {
            let m = p.open();
            p.advance();
            p.close(m, SyntaxKind::EMPTY_STMT);
        }
        SyntaxKind::VAR_KW | SyntaxKind::LET_KW | SyntaxKind::CONST_KW => var_decl(p),
        SyntaxKind::IF_KW => if_stmt(p),
        _ => expr_stmt(p),
    }
}

/// `expr` followed by a statement terminator.
fn expr_stmt(p: &mut Parser) {
    let m = p.open();
    expressions::expr(p);
    if !p.has_error() {
        semicolon(p);
    }
    p.close(m, SyntaxKind::EXPR_STMT);
}

/// `{ stmt* }`
fn block_stmt(p: &mut Parser) {
    let m = p.open();
    p.advance(); // {
    while !p.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::EOF]) && !p.has_error() {
        stmt(p);
    }
    if !p.has_error() {
        p.expect(SyntaxKind::R_BRACE);
    }
    p.close(m, SyntaxKind::BLOCK_STMT);
}

/// `var|let|const name [= init], ...;`
fn var_decl(p: &mut Parser) {
    let m = p.open();
    p.advance(); // var / let / const
    loop {
        let d = p.open();
        p.expect(SyntaxKind::IDENT);
        if !p.has_error() && p.eat(SyntaxKind::EQ) {
            expressions::assign_expr(p);
        }
        p.close(d, SyntaxKind::VAR_DECLARATOR);
        if p.has_error() || !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.has_error() {
        semicolon(p);
    }
    p.close(m, SyntaxKind::VAR_DECL);
}

/// `if (test) stmt [else stmt]`
fn if_stmt(p: &mut Parser) {
    let m = p.open();
    p.advance(); // if
    if p.expect(SyntaxKind::L_PAREN) {
        expressions::expr(p);
    }
    if !p.has_error() && p.expect(SyntaxKind::R_PAREN) {
        stmt(p);
    }
    if !p.has_error() && p.eat(SyntaxKind::ELSE_KW) {
        stmt(p);
    }
    p.close(m, SyntaxKind::IF_STMT);
}

/// Consume a `;`, or accept an inserted one.
fn semicolon(p: &mut Parser) {
    if p.eat(SyntaxKind::SEMICOLON) {
        return;
    }
    if p.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::EOF]) || p.has_newline_before() {
        return;
    }
    p.error_unexpected();
}
