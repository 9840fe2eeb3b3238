//! Expression parsing
//!
//! Two precedence levels: `+`/`-` above `*`/`/`, both left-associative.
//! Factors are literals, identifiers, calls, and parenthesized groups.

use super::Parser;
use crate::ast::{BinaryExpr, CallExpr, Expr, Literal, VariableExpr};
use crate::diagnostic::{error_codes, Diagnostic};
use crate::token::TokenKind;

impl Parser {
    /// Parse an expression: `term (('+' | '-') term)*`
    pub(super) fn parse_expression(&mut self) -> Result<Expr, Diagnostic> {
        let mut expr = self.parse_term()?;

        while self.match_token(TokenKind::Plus) || self.match_token(TokenKind::Minus) {
            let op = self.previous().kind;
            let line = self.previous().line;
            let right = self.parse_term()?;
            expr = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                line,
            });
        }

        Ok(expr)
    }

    /// Parse a term: `factor (('*' | '/') factor)*`
    fn parse_term(&mut self) -> Result<Expr, Diagnostic> {
        let mut expr = self.parse_factor()?;

        while self.match_token(TokenKind::Star) || self.match_token(TokenKind::Slash) {
            let op = self.previous().kind;
            let line = self.previous().line;
            let right = self.parse_factor()?;
            expr = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(expr),
                right: Box::new(right),
                line,
            });
        }

        Ok(expr)
    }

    /// Parse a factor: literal, variable, call, or grouping
    fn parse_factor(&mut self) -> Result<Expr, Diagnostic> {
        if self.match_token(TokenKind::True) {
            return Ok(Expr::Literal(Literal::Bool(true), self.previous().line));
        }
        if self.match_token(TokenKind::False) {
            return Ok(Expr::Literal(Literal::Bool(false), self.previous().line));
        }

        if self.match_token(TokenKind::Char) {
            let token = self.previous();
            let line = token.line;
            let value = token.lexeme.chars().next().ok_or_else(|| {
                Diagnostic::error_with_code(
                    error_codes::INVALID_LITERAL,
                    "Invalid character literal.",
                    line,
                )
                .with_label("syntax error")
            })?;
            return Ok(Expr::Literal(Literal::Char(value), line));
        }

        if self.match_token(TokenKind::Float) {
            let token = self.previous();
            let line = token.line;
            let value: f64 = token.lexeme.parse().map_err(|_| {
                Diagnostic::error_with_code(
                    error_codes::INVALID_LITERAL,
                    "Invalid float literal.",
                    line,
                )
                .with_label("syntax error")
            })?;
            return Ok(Expr::Literal(Literal::Float(value), line));
        }

        if self.match_token(TokenKind::Number) {
            let token = self.previous();
            let line = token.line;
            let value: i64 = token.lexeme.parse().map_err(|_| {
                Diagnostic::error_with_code(
                    error_codes::INVALID_LITERAL,
                    "Invalid number literal.",
                    line,
                )
                .with_label("syntax error")
            })?;
            return Ok(Expr::Literal(Literal::Int(value), line));
        }

        if self.match_token(TokenKind::String) {
            let token = self.previous();
            return Ok(Expr::Literal(
                Literal::String(token.lexeme.clone()),
                token.line,
            ));
        }

        if self.match_token(TokenKind::Identifier) {
            let name = self.previous().lexeme.clone();
            let line = self.previous().line;

            // A '(' right after an identifier makes it a call
            if self.match_token(TokenKind::LeftParen) {
                let mut args = Vec::new();
                if !self.check(TokenKind::RightParen) {
                    loop {
                        args.push(self.parse_expression()?);
                        if !self.match_token(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                self.consume(TokenKind::RightParen, "Expected ')' after arguments.")?;
                return Ok(Expr::Call(CallExpr { name, args, line }));
            }

            return Ok(Expr::Variable(VariableExpr { name, line }));
        }

        if self.match_token(TokenKind::LeftParen) {
            let expr = self.parse_expression()?;
            self.consume(TokenKind::RightParen, "Expected ')'.")?;
            return Ok(expr);
        }

        Err(self.error("Invalid expression."))
    }
}
