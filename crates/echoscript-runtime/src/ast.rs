//! Abstract Syntax Tree (AST) definitions
//!
//! Closed node set for the EchoScript grammar. Every node records the
//! 1-based source line it started on; runtime errors report through it.

use crate::token::TokenKind;
use serde::{Deserialize, Serialize};

/// AST schema version
///
/// This version number is included in JSON dumps to ensure compatibility.
/// Increment when making breaking changes to the AST structure.
pub const AST_VERSION: u32 = 1;

/// Top-level program: a flat statement list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Versioned AST wrapper for JSON serialization
///
/// Wraps a Program with version metadata for stable JSON output, used when
/// dumping the AST for tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    /// The actual program AST
    #[serde(flatten)]
    pub program: Program,
}

impl VersionedProgram {
    /// Create a new versioned program wrapper
    pub fn new(program: Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Program> for VersionedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `let name = expr;`
    Let(LetStmt),
    /// `print(expr);`
    Print(PrintStmt),
    /// `println(expr);`
    Println(PrintlnStmt),
    /// `func name(params) { body }`
    Func(FuncDecl),
    /// `return expr;`
    Return(ReturnStmt),
    /// `expr;`
    Expr(ExprStmt),
}

impl Stmt {
    /// Get the source line of this statement
    pub fn line(&self) -> usize {
        match self {
            Stmt::Let(s) => s.line,
            Stmt::Print(s) => s.line,
            Stmt::Println(s) => s.line,
            Stmt::Func(s) => s.line,
            Stmt::Return(s) => s.line,
            Stmt::Expr(s) => s.line,
        }
    }
}

/// Variable binding: `let name = value;`
///
/// Binds into the current environment, overwriting any existing binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetStmt {
    pub name: String,
    pub value: Expr,
    pub line: usize,
}

/// `print(value);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub value: Expr,
    pub line: usize,
}

/// `println(value);`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintlnStmt {
    pub value: Expr,
    pub line: usize,
}

/// Function declaration: `func name(a, b) { body }`
///
/// Parameters are bare names; the body is a plain statement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Stmt>,
    pub line: usize,
}

/// `return value;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub value: Expr,
    pub line: usize,
}

/// Expression evaluated for effect: `expr;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
    pub line: usize,
}

/// Expression node
///
/// Parenthesized groups do not get a node of their own; the parser returns
/// the inner expression directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Literal value
    Literal(Literal, usize),
    /// Variable reference
    Variable(VariableExpr),
    /// Binary arithmetic
    Binary(BinaryExpr),
    /// Call to a user-declared function
    Call(CallExpr),
}

impl Expr {
    /// Get the source line of this expression
    pub fn line(&self) -> usize {
        match self {
            Expr::Literal(_, line) => *line,
            Expr::Variable(e) => e.line,
            Expr::Binary(e) => e.line,
            Expr::Call(e) => e.line,
        }
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Char(char),
}

/// Variable reference by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableExpr {
    pub name: String,
    pub line: usize,
}

/// Binary expression
///
/// The operator is stored as its token kind; the evaluator rejects anything
/// outside the arithmetic set rather than trusting the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub line: usize,
}

/// Call expression: `name(args)`
///
/// Calls are always by name; functions are not values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Expr>,
    pub line: usize,
}
