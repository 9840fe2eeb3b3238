//! Token types for lexical analysis
//!
//! Defines all token types recognized by the EchoScript lexer.

use serde::{Deserialize, Serialize};

/// Token produced by the lexer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The source text of this token (string and char tokens exclude their quotes)
    pub lexeme: String,
    /// 1-based source line
    pub line: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// Classification of token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal (42)
    Number,
    /// Float literal (3.14)
    Float,
    /// String literal ("hello")
    String,
    /// Character literal ('a')
    Char,
    /// Identifier
    Identifier,

    // Keywords
    /// `let` keyword (variable binding)
    Let,
    /// `func` keyword (function declaration)
    Func,
    /// `return` keyword
    Return,
    /// `print` keyword
    Print,
    /// `println` keyword
    Println,
    /// `true` keyword
    True,
    /// `false` keyword
    False,

    // Operators
    /// `+` (addition)
    Plus,
    /// `-` (subtraction)
    Minus,
    /// `*` (multiplication)
    Star,
    /// `/` (division)
    Slash,

    // Punctuation
    /// `=` (binding)
    Equal,
    /// `(` (left parenthesis)
    LeftParen,
    /// `)` (right parenthesis)
    RightParen,
    /// `{` (left brace)
    LeftBrace,
    /// `}` (right brace)
    RightBrace,
    /// `;` (semicolon)
    Semicolon,
    /// `,` (comma)
    Comma,

    // Special
    /// End of file
    Eof,
    /// Character the lexer could not classify
    Unknown,
}

/// The fixed keyword table. The language has exactly these seven keywords;
/// lookup never consults a growable structure.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("let", TokenKind::Let),
    ("func", TokenKind::Func),
    ("return", TokenKind::Return),
    ("print", TokenKind::Print),
    ("println", TokenKind::Println),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

impl TokenKind {
    /// Check if a string is a keyword and return its token kind
    pub fn is_keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, kind)| *kind)
    }

    /// Get the string representation of this token kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Char => "char",
            TokenKind::Identifier => "identifier",
            TokenKind::Let => "let",
            TokenKind::Func => "func",
            TokenKind::Return => "return",
            TokenKind::Print => "print",
            TokenKind::Println => "println",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Eof => "EOF",
            TokenKind::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new(TokenKind::Number, "42", 1);
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "42");
        assert_eq!(token.line, 1);
    }

    #[test]
    fn test_keyword_detection() {
        assert_eq!(TokenKind::is_keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::is_keyword("func"), Some(TokenKind::Func));
        assert_eq!(TokenKind::is_keyword("return"), Some(TokenKind::Return));
        assert_eq!(TokenKind::is_keyword("print"), Some(TokenKind::Print));
        assert_eq!(TokenKind::is_keyword("println"), Some(TokenKind::Println));
        assert_eq!(TokenKind::is_keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::is_keyword("false"), Some(TokenKind::False));
    }

    #[test]
    fn test_non_keyword() {
        assert_eq!(TokenKind::is_keyword("foo"), None);
        assert_eq!(TokenKind::is_keyword("x"), None);
        assert_eq!(TokenKind::is_keyword("Let"), None); // Case-sensitive
        assert_eq!(TokenKind::is_keyword("printl"), None); // No prefix matching
    }

    #[test]
    fn test_keyword_table_is_complete() {
        assert_eq!(KEYWORDS.len(), 7);
        for (spelling, kind) in KEYWORDS {
            assert_eq!(TokenKind::is_keyword(spelling), Some(*kind));
            assert_eq!(kind.as_str(), *spelling);
        }
    }

    #[test]
    fn test_token_kind_as_str() {
        assert_eq!(TokenKind::Let.as_str(), "let");
        assert_eq!(TokenKind::Plus.as_str(), "+");
        assert_eq!(TokenKind::LeftBrace.as_str(), "{");
        assert_eq!(TokenKind::Eof.as_str(), "EOF");
    }
}
