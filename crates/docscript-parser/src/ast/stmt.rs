//! Typed AST nodes for the source file and statements.

use crate::ast::{ast_node, child_node, child_nodes, AstNode};
use crate::ast::expr::Expr;
use crate::cst::SyntaxNode;
use crate::syntax_kind::SyntaxKind;

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    /// Top-level statements in source order.
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        child_nodes(&self.syntax)
    }
}

/// Any statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    ExprStmt(ExprStmt),
    BlockStmt(BlockStmt),
    EmptyStmt(EmptyStmt),
    VarDecl(VarDecl),
    IfStmt(IfStmt),
}

impl AstNode for Stmt {
    fn cast(node: SyntaxNode) -> Option<Self> {
        let stmt = match node.kind() {
            SyntaxKind::EXPR_STMT => Stmt::ExprStmt(ExprStmt { syntax: node }),
            SyntaxKind::BLOCK_STMT => Stmt::BlockStmt(BlockStmt { syntax: node }),
            SyntaxKind::EMPTY_STMT => Stmt::EmptyStmt(EmptyStmt { syntax: node }),
            SyntaxKind::VAR_DECL => Stmt::VarDecl(VarDecl { syntax: node }),
            SyntaxKind::IF_STMT => Stmt::IfStmt(IfStmt { syntax: node }),
            _ => return None,
        };
        Some(stmt)
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Stmt::ExprStmt(n) => &n.syntax,
            Stmt::BlockStmt(n) => &n.syntax,
            Stmt::EmptyStmt(n) => &n.syntax,
            Stmt::VarDecl(n) => &n.syntax,
            Stmt::IfStmt(n) => &n.syntax,
        }
    }
}

impl Stmt {
    /// The ESTree node type name (`ExpressionStatement`, ...).
    pub fn kind_name(&self) -> &'static str {
        self.syntax().kind().estree_name().unwrap_or("Unknown")
    }

    /// Byte offset where the statement starts.
    pub fn start(&self) -> u32 {
        self.syntax().text_range().start().into()
    }
}

ast_node!(ExprStmt, EXPR_STMT);

impl ExprStmt {
    pub fn expr(&self) -> Option<Expr> {
        child_node(&self.syntax)
    }
}

ast_node!(BlockStmt, BLOCK_STMT);

impl BlockStmt {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        child_nodes(&self.syntax)
    }
}

ast_node!(EmptyStmt, EMPTY_STMT);
ast_node!(VarDecl, VAR_DECL);
ast_node!(IfStmt, IF_STMT);
