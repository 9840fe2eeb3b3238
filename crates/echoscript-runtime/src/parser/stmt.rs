//! Statement parsing

use super::Parser;
use crate::ast::{ExprStmt, FuncDecl, LetStmt, PrintStmt, PrintlnStmt, ReturnStmt, Stmt};
use crate::diagnostic::Diagnostic;
use crate::token::TokenKind;

impl Parser {
    /// Parse a single statement
    pub(super) fn parse_statement(&mut self) -> Result<Stmt, Diagnostic> {
        if self.match_token(TokenKind::Let) {
            return self.parse_let();
        }
        if self.match_token(TokenKind::Print) {
            return self.parse_print();
        }
        if self.match_token(TokenKind::Println) {
            return self.parse_println();
        }
        if self.match_token(TokenKind::Func) {
            return self.parse_function();
        }
        if self.match_token(TokenKind::Return) {
            return self.parse_return();
        }

        // Anything else is an expression statement
        let line = self.peek().line;
        let expr = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Stmt::Expr(ExprStmt { expr, line }))
    }

    /// Parse `let name = expr;` (the `let` keyword is already consumed)
    fn parse_let(&mut self) -> Result<Stmt, Diagnostic> {
        let line = self.previous().line;
        let name = self
            .consume(TokenKind::Identifier, "Expected variable name.")?
            .lexeme
            .clone();
        self.consume(TokenKind::Equal, "Expected '='.")?;
        let value = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';'.")?;
        Ok(Stmt::Let(LetStmt { name, value, line }))
    }

    /// Parse `print(expr);`
    fn parse_print(&mut self) -> Result<Stmt, Diagnostic> {
        let line = self.previous().line;
        self.consume(TokenKind::LeftParen, "Expected '('.")?;
        let value = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')'.")?;
        self.consume(TokenKind::Semicolon, "Expected ';'.")?;
        Ok(Stmt::Print(PrintStmt { value, line }))
    }

    /// Parse `println(expr);`
    fn parse_println(&mut self) -> Result<Stmt, Diagnostic> {
        let line = self.previous().line;
        self.consume(TokenKind::LeftParen, "Expected '('.")?;
        let value = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')'.")?;
        self.consume(TokenKind::Semicolon, "Expected ';'.")?;
        Ok(Stmt::Println(PrintlnStmt { value, line }))
    }

    /// Parse `func name(params) { body }`
    fn parse_function(&mut self) -> Result<Stmt, Diagnostic> {
        let line = self.previous().line;
        let name = self
            .consume(TokenKind::Identifier, "Expected function name.")?
            .lexeme
            .clone();

        self.consume(TokenKind::LeftParen, "Expected '(' after function name.")?;
        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                let param = self
                    .consume(TokenKind::Identifier, "Expected parameter name.")?
                    .lexeme
                    .clone();
                params.push(param);
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expected ')' after parameters.")?;

        self.consume(TokenKind::LeftBrace, "Expected '{' before function body.")?;
        let mut body = Vec::new();
        // The loop also stops at end of input, so a missing '}' at the very
        // end of a script is tolerated rather than reported.
        while !self.match_token(TokenKind::RightBrace) && !self.is_at_end() {
            body.push(self.parse_statement()?);
        }

        Ok(Stmt::Func(FuncDecl {
            name,
            params,
            body,
            line,
        }))
    }

    /// Parse `return expr;` (a value is mandatory)
    fn parse_return(&mut self) -> Result<Stmt, Diagnostic> {
        let line = self.previous().line;
        let value = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after return value.")?;
        Ok(Stmt::Return(ReturnStmt { value, line }))
    }
}
