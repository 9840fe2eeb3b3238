//! AST interpreter (tree-walking)
//!
//! Direct AST evaluation with environment-based variable storage.
//! Supports:
//! - Expression evaluation (literals, binary ops, calls)
//! - Statement execution (let bindings, print output, function declarations)
//! - Function calls over a copy of the caller's environment
//!
//! Statement execution reports `return` through a [`ControlFlow`] value
//! instead of unwinding, so a stray top-level `return` is an ordinary
//! runtime error rather than an abort.

mod expr;
mod stmt;

use crate::ast::{FuncDecl, Program};
use crate::value::{RuntimeError, Value};
use std::collections::HashMap;
use std::rc::Rc;

/// Variable bindings visible to the running code
pub(super) type Environment = HashMap<String, Value>;

/// Control flow signal for propagating return out of a function body
#[derive(Debug, Clone, PartialEq)]
pub(super) enum ControlFlow {
    None,
    Return(Value),
}

/// Interpreter state
pub struct Interpreter {
    /// Declared functions by name (redeclaration overwrites)
    pub(super) functions: HashMap<String, Rc<FuncDecl>>,
    /// Buffered print output, one entry per print or println
    pub(super) output: Vec<String>,
}

impl Interpreter {
    /// Create a new interpreter
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            output: Vec::new(),
        }
    }

    /// Evaluate a program against a fresh top-level environment
    pub fn eval(&mut self, program: &Program) -> Result<(), RuntimeError> {
        let mut globals = Environment::new();

        for stmt in &program.statements {
            if let ControlFlow::Return(_) = self.eval_statement(stmt, &mut globals)? {
                // Only a bare top-level `return` surfaces here; function
                // bodies absorb their own returns
                return Err(RuntimeError::ReturnOutsideFunction { line: stmt.line() });
            }
        }

        Ok(())
    }

    /// Lines printed so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Take ownership of the buffered output, leaving the buffer empty
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn run_source(source: &str) -> Result<Vec<String>, RuntimeError> {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let program = Parser::new(tokens).parse().expect("parsing failed");
        let mut interp = Interpreter::new();
        interp.eval(&program)?;
        Ok(interp.take_output())
    }

    #[test]
    fn test_interpreter_creation() {
        let interp = Interpreter::new();
        assert!(interp.functions.is_empty());
        assert!(interp.output().is_empty());
    }

    #[test]
    fn test_eval_literal() {
        let interp = Interpreter::new();
        assert_eq!(interp.eval_literal(&Literal::Int(42)), Value::Int(42));
        assert_eq!(interp.eval_literal(&Literal::Bool(true)), Value::Bool(true));
        assert_eq!(interp.eval_literal(&Literal::Char('x')), Value::Char('x'));
    }

    #[test]
    fn test_let_and_print() {
        let output = run_source("let x = 41;\nprintln(x + 1);").unwrap();
        assert_eq!(output, vec!["42"]);
    }

    #[test]
    fn test_call_works_on_a_copy_of_the_environment() {
        let output = run_source(
            "let x = 1;\n\
             func touch() { let x = 99; return x; }\n\
             println(touch());\n\
             println(x);",
        )
        .unwrap();
        assert_eq!(output, vec!["99", "1"]);
    }

    #[test]
    fn test_fallthrough_call_yields_zero() {
        let output = run_source("func noop() { let a = 1; }\nprintln(noop());").unwrap();
        assert_eq!(output, vec!["0"]);
    }

    #[test]
    fn test_top_level_return_is_an_error() {
        let err = run_source("return 5;").unwrap_err();
        assert_eq!(err, RuntimeError::ReturnOutsideFunction { line: 1 });
    }

    #[test]
    fn test_non_arithmetic_operator_is_rejected() {
        use crate::ast::{BinaryExpr, Expr, ExprStmt, Stmt};
        use crate::token::TokenKind;

        // The parser never builds this shape; the evaluator still checks
        let program = Program {
            statements: vec![Stmt::Expr(ExprStmt {
                expr: Expr::Binary(BinaryExpr {
                    op: TokenKind::Equal,
                    left: Box::new(Expr::Literal(Literal::Int(1), 1)),
                    right: Box::new(Expr::Literal(Literal::Int(2), 1)),
                    line: 1,
                }),
                line: 1,
            })],
        };

        let mut interp = Interpreter::new();
        let err = interp.eval(&program).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::UnknownOperator {
                op: "=".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_take_output_drains_the_buffer() {
        let tokens = Lexer::new("println(1);").tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        let mut interp = Interpreter::new();
        interp.eval(&program).unwrap();
        assert_eq!(interp.take_output(), vec!["1"]);
        assert!(interp.output().is_empty());
    }
}
