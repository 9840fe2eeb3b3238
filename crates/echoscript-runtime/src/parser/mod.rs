//! Parsing (tokens to AST)
//!
//! Recursive descent with single-token lookahead and no backtracking.
//! The grammar is small enough that the parser stops at the first error;
//! there is no recovery or resynchronization.

mod expr;
mod stmt;

use crate::ast::Program;
use crate::diagnostic::{error_codes, Diagnostic};
use crate::token::{Token, TokenKind};

/// Parser state for building AST from tokens
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Create a new parser for the given token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the token stream into a program
    pub fn parse(&mut self) -> Result<Program, Diagnostic> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(Program { statements })
    }

    // === Helper methods ===

    /// Advance to next token and return reference to previous
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        &self.tokens[self.current - 1]
    }

    /// Peek at current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Reference to the most recently consumed token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Check if current token matches kind
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Match and consume token if it matches
    pub(super) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume token of given kind or fail with the given message
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, Diagnostic> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    /// Check if at end of token stream
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len() || self.tokens[self.current].kind == TokenKind::Eof
    }

    /// Build a syntax error at the current token
    pub(super) fn error(&self, message: &str) -> Diagnostic {
        Diagnostic::error_with_code(error_codes::UNEXPECTED_TOKEN, message, self.peek().line)
            .with_label("syntax error")
            .with_help("check your syntax for typos or missing tokens")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Literal, Stmt};
    use crate::lexer::Lexer;

    fn parse_source(source: &str) -> Result<Program, Diagnostic> {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        Parser::new(tokens).parse()
    }

    fn parse_ok(source: &str) -> Program {
        parse_source(source).expect("parsing failed")
    }

    #[test]
    fn test_empty_program() {
        let program = parse_ok("");
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_parse_let_statement() {
        let program = parse_ok("let x = 42;");
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::Let(decl) => {
                assert_eq!(decl.name, "x");
                assert_eq!(decl.value, Expr::Literal(Literal::Int(42), 1));
                assert_eq!(decl.line, 1);
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_print_statements() {
        let program = parse_ok("print(1);\nprintln(2);");
        assert!(matches!(program.statements[0], Stmt::Print(_)));
        assert!(matches!(program.statements[1], Stmt::Println(_)));
        assert_eq!(program.statements[1].line(), 2);
    }

    #[test]
    fn test_parse_function_declaration() {
        let program = parse_ok("func add(a, b) { return a + b; }");
        match &program.statements[0] {
            Stmt::Func(decl) => {
                assert_eq!(decl.name, "add");
                assert_eq!(decl.params, vec!["a".to_string(), "b".to_string()]);
                assert_eq!(decl.body.len(), 1);
                assert!(matches!(decl.body[0], Stmt::Return(_)));
            }
            other => panic!("expected func declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_function_without_params() {
        let program = parse_ok("func hello() { println(\"hi\"); }");
        match &program.statements[0] {
            Stmt::Func(decl) => assert!(decl.params.is_empty()),
            other => panic!("expected func declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_unterminated_body_at_eof_is_tolerated() {
        // The body loop stops at end of input without demanding the brace
        let program = parse_ok("func f() { return 1;");
        match &program.statements[0] {
            Stmt::Func(decl) => assert_eq!(decl.body.len(), 1),
            other => panic!("expected func declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_call_statement() {
        let program = parse_ok("greet();");
        match &program.statements[0] {
            Stmt::Expr(stmt) => assert!(matches!(stmt.expr, Expr::Call(_))),
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_precedence_binds_products_tighter() {
        let program = parse_ok("1 + 2 * 3;");
        let expr = match &program.statements[0] {
            Stmt::Expr(stmt) => &stmt.expr,
            other => panic!("expected expression statement, got {:?}", other),
        };
        match expr {
            Expr::Binary(add) => {
                assert_eq!(add.op, TokenKind::Plus);
                assert_eq!(*add.left, Expr::Literal(Literal::Int(1), 1));
                match add.right.as_ref() {
                    Expr::Binary(mul) => assert_eq!(mul.op, TokenKind::Star),
                    other => panic!("expected product on the right, got {:?}", other),
                }
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_same_precedence_is_left_associative() {
        let program = parse_ok("10 - 2 - 3;");
        let expr = match &program.statements[0] {
            Stmt::Expr(stmt) => &stmt.expr,
            other => panic!("expected expression statement, got {:?}", other),
        };
        match expr {
            Expr::Binary(outer) => {
                assert_eq!(outer.op, TokenKind::Minus);
                assert!(matches!(outer.left.as_ref(), Expr::Binary(_)));
                assert_eq!(*outer.right, Expr::Literal(Literal::Int(3), 1));
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_grouping_produces_no_node() {
        let program = parse_ok("(1 + 2) * 3;");
        let expr = match &program.statements[0] {
            Stmt::Expr(stmt) => &stmt.expr,
            other => panic!("expected expression statement, got {:?}", other),
        };
        match expr {
            Expr::Binary(mul) => {
                assert_eq!(mul.op, TokenKind::Star);
                // The group is just the inner sum
                assert!(matches!(mul.left.as_ref(), Expr::Binary(_)));
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_literals() {
        let program = parse_ok("let a = 1; let b = 2.5; let c = \"s\"; let d = true; let e = 'x';");
        let values: Vec<&Expr> = program
            .statements
            .iter()
            .map(|stmt| match stmt {
                Stmt::Let(decl) => &decl.value,
                other => panic!("expected let statement, got {:?}", other),
            })
            .collect();
        assert_eq!(*values[0], Expr::Literal(Literal::Int(1), 1));
        assert_eq!(*values[1], Expr::Literal(Literal::Float(2.5), 1));
        assert_eq!(*values[2], Expr::Literal(Literal::String("s".to_string()), 1));
        assert_eq!(*values[3], Expr::Literal(Literal::Bool(true), 1));
        assert_eq!(*values[4], Expr::Literal(Literal::Char('x'), 1));
    }

    #[test]
    fn test_call_arguments_parse_in_order() {
        let program = parse_ok("f(1, x, 2 + 3);");
        match &program.statements[0] {
            Stmt::Expr(stmt) => match &stmt.expr {
                Expr::Call(call) => {
                    assert_eq!(call.name, "f");
                    assert_eq!(call.args.len(), 3);
                    assert!(matches!(call.args[1], Expr::Variable(_)));
                    assert!(matches!(call.args[2], Expr::Binary(_)));
                }
                other => panic!("expected call, got {:?}", other),
            },
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon_after_expression() {
        let err = parse_source("1 + 2").unwrap_err();
        assert_eq!(err.message, "Expected ';' after expression.");
        assert_eq!(err.code, error_codes::UNEXPECTED_TOKEN);
        assert_eq!(err.label, "syntax error");
    }

    #[test]
    fn test_let_requires_name_and_equals() {
        assert_eq!(
            parse_source("let = 5;").unwrap_err().message,
            "Expected variable name."
        );
        assert_eq!(
            parse_source("let x 5;").unwrap_err().message,
            "Expected '='."
        );
        assert_eq!(
            parse_source("let x = 5").unwrap_err().message,
            "Expected ';'."
        );
    }

    #[test]
    fn test_print_requires_parentheses() {
        assert_eq!(
            parse_source("print 1;").unwrap_err().message,
            "Expected '('."
        );
        assert_eq!(
            parse_source("println(1;").unwrap_err().message,
            "Expected ')'."
        );
    }

    #[test]
    fn test_function_header_errors() {
        assert_eq!(
            parse_source("func () {}").unwrap_err().message,
            "Expected function name."
        );
        assert_eq!(
            parse_source("func f a) {}").unwrap_err().message,
            "Expected '(' after function name."
        );
        assert_eq!(
            parse_source("func f(a,) {}").unwrap_err().message,
            "Expected parameter name."
        );
        assert_eq!(
            parse_source("func f(a {}").unwrap_err().message,
            "Expected ')' after parameters."
        );
        assert_eq!(
            parse_source("func f(a) return 1;").unwrap_err().message,
            "Expected '{' before function body."
        );
    }

    #[test]
    fn test_call_requires_closing_paren() {
        assert_eq!(
            parse_source("f(1, 2;").unwrap_err().message,
            "Expected ')' after arguments."
        );
    }

    #[test]
    fn test_return_requires_semicolon() {
        assert_eq!(
            parse_source("func f() { return 1 }").unwrap_err().message,
            "Expected ';' after return value."
        );
    }

    #[test]
    fn test_invalid_expression() {
        let err = parse_source("+ 1;").unwrap_err();
        assert_eq!(err.message, "Invalid expression.");
    }

    #[test]
    fn test_unknown_token_is_rejected_here() {
        // The lexer passes unknown characters through; the parser trips on them
        let err = parse_source("let x = @;").unwrap_err();
        assert_eq!(err.message, "Invalid expression.");
    }

    #[test]
    fn test_error_carries_offending_line() {
        let err = parse_source("let a = 1;\nlet b = ;").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_integer_literal_overflow() {
        let err = parse_source("let x = 99999999999999999999;").unwrap_err();
        assert_eq!(err.message, "Invalid number literal.");
        assert_eq!(err.code, error_codes::INVALID_LITERAL);
    }
}
