//! EchoScript Runtime - Core language implementation
//!
//! This library provides the complete EchoScript language runtime including:
//! - Lexical analysis and parsing
//! - Tree-walking interpretation with buffered output
//! - Diagnostics shared by every stage

/// EchoScript runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod ast;
pub mod diagnostic;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod token;
pub mod value;

// Re-export commonly used types
pub use ast::{Program, VersionedProgram, AST_VERSION};
pub use diagnostic::{error_codes, Diagnostic, DiagnosticLevel, DIAG_VERSION};
pub use interpreter::Interpreter;
pub use lexer::Lexer;
pub use parser::Parser;
pub use runtime::{EchoScript, RunResult};
pub use token::{Token, TokenKind};
pub use value::{NumericKind, RuntimeError, Value};
