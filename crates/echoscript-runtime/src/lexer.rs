//! Lexical analysis (tokenization)
//!
//! The lexer converts EchoScript source code into a stream of tokens with
//! 1-based line information. Scanning is a single pass with one character of
//! lookahead. Most oddities pass through as `Unknown` tokens for the parser
//! to reject; only the cases that would otherwise lose source text are fatal
//! here (unterminated string/char literals and a stray `#`).

use crate::diagnostic::{error_codes, Diagnostic};
use crate::token::{Token, TokenKind};

/// Lexer state for tokenizing source code
pub struct Lexer {
    /// Original source code
    source: String,
    /// Characters of source code
    chars: Vec<char>,
    /// Current position in chars
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let chars: Vec<char> = source.chars().collect();
        Self {
            source,
            chars,
            current: 0,
            line: 1,
        }
    }

    /// Tokenize the source code
    ///
    /// On success the final token is always `Eof` with an empty lexeme. The
    /// first fatal error aborts the scan.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Diagnostic> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token
    fn next_token(&mut self) -> Result<Token, Diagnostic> {
        self.skip_whitespace_and_comments()?;

        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, ""));
        }

        let c = self.advance();

        match c {
            // Single-character tokens
            '(' => Ok(self.make_token(TokenKind::LeftParen, "(")),
            ')' => Ok(self.make_token(TokenKind::RightParen, ")")),
            '{' => Ok(self.make_token(TokenKind::LeftBrace, "{")),
            '}' => Ok(self.make_token(TokenKind::RightBrace, "}")),
            ';' => Ok(self.make_token(TokenKind::Semicolon, ";")),
            ',' => Ok(self.make_token(TokenKind::Comma, ",")),
            '=' => Ok(self.make_token(TokenKind::Equal, "=")),
            '+' => Ok(self.make_token(TokenKind::Plus, "+")),
            '-' => Ok(self.make_token(TokenKind::Minus, "-")),
            '*' => Ok(self.make_token(TokenKind::Star, "*")),
            '/' => Ok(self.make_token(TokenKind::Slash, "/")),

            // Literals
            '"' => self.string(),
            '\'' => self.char_literal(),
            c if c.is_ascii_digit() => Ok(self.number()),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => Ok(self.identifier()),

            // Anything else flows through for the parser to reject
            _ => Ok(self.make_token(TokenKind::Unknown, c.to_string())),
        }
    }

    /// Skip whitespace and `##` comments
    ///
    /// A single `#` is fatal: it is neither a token nor a comment starter.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), Diagnostic> {
        loop {
            if self.is_at_end() {
                return Ok(());
            }

            match self.peek() {
                ' ' | '\r' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '#' => {
                    if self.peek_next() == Some('#') {
                        // Comment runs to end of line
                        while !self.is_at_end() && self.peek() != '\n' {
                            self.advance();
                        }
                    } else {
                        return Err(self.error(
                            error_codes::SYNTAX_ERROR,
                            "Unexpected single '#' character, did you mean '##'?",
                        ));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scan a string literal
    ///
    /// No escape sequences; a newline inside the literal is taken verbatim
    /// and still advances the line counter.
    fn string(&mut self) -> Result<Token, Diagnostic> {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            if self.peek() == '\n' {
                self.line += 1;
            }
            value.push(self.advance());
        }

        if self.is_at_end() {
            return Err(self.error(
                error_codes::UNTERMINATED_STRING,
                "Unterminated string literal",
            ));
        }

        self.advance(); // Closing "
        Ok(self.make_token(TokenKind::String, value))
    }

    /// Scan a character literal
    ///
    /// `'x'` holds exactly one character. A doubled quote between the
    /// delimiters (`''''`) encodes a literal single quote.
    fn char_literal(&mut self) -> Result<Token, Diagnostic> {
        if self.is_at_end() {
            return Err(self.error(
                error_codes::UNTERMINATED_CHAR,
                "Unterminated character literal",
            ));
        }

        let value = if self.peek() == '\'' {
            self.advance();
            if self.peek() != '\'' {
                return Err(self.error(error_codes::EMPTY_CHAR, "Invalid empty character literal"));
            }
            self.advance();
            '\''
        } else {
            self.advance()
        };

        if self.is_at_end() || self.advance() != '\'' {
            return Err(self.error(
                error_codes::UNTERMINATED_CHAR,
                "Unterminated character literal",
            ));
        }

        Ok(self.make_token(TokenKind::Char, value.to_string()))
    }

    /// Scan a number literal (integer or float)
    ///
    /// A dot only makes a float if a digit follows it; `1.` scans as the
    /// integer `1` and leaves the dot behind.
    fn number(&mut self) -> Token {
        let start = self.current - 1; // -1 because we already advanced past first digit
        let mut kind = TokenKind::Number;

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' {
            if let Some(c) = self.peek_next() {
                if c.is_ascii_digit() {
                    kind = TokenKind::Float;
                    self.advance(); // consume .

                    while !self.is_at_end() && self.peek().is_ascii_digit() {
                        self.advance();
                    }
                }
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        self.make_token(kind, lexeme)
    }

    /// Scan an identifier or keyword
    fn identifier(&mut self) -> Token {
        let start = self.current - 1; // -1 because we already advanced past first char

        while !self.is_at_end() {
            let c = self.peek();
            if c.is_ascii_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        let kind = TokenKind::is_keyword(&lexeme).unwrap_or(TokenKind::Identifier);

        self.make_token(kind, lexeme)
    }

    // === Character navigation ===

    /// Advance to next character and return it
    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    /// Peek at current character without advancing
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Peek at next character (current + 1)
    fn peek_next(&self) -> Option<char> {
        if self.current + 1 >= self.chars.len() {
            None
        } else {
            Some(self.chars[self.current + 1])
        }
    }

    /// Check if we've reached the end of source
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    // === Token and error creation ===

    /// Create a token on the current line
    fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.line)
    }

    /// Create a fatal scan diagnostic on the current line
    fn error(&self, code: &str, message: &str) -> Diagnostic {
        Diagnostic::error_with_code(code, message, self.line)
            .with_snippet(self.get_line_snippet(self.line))
            .with_label("lexer error")
    }

    /// Get the source line for a given line number
    fn get_line_snippet(&self, line: usize) -> String {
        self.source
            .lines()
            .nth(line - 1)
            .unwrap_or("")
            .to_string()
    }
}
