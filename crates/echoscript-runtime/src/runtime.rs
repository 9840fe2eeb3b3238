//! EchoScript runtime API for embedding

use crate::diagnostic::{error_codes, Diagnostic};
use crate::interpreter::Interpreter;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::RuntimeError;

/// Result type for a script run: every output line in order, or the first
/// error as a diagnostic. No partial output escapes on error.
pub type RunResult = Result<Vec<String>, Diagnostic>;

/// EchoScript runtime instance
///
/// Provides a high-level API for embedding EchoScript in host applications.
/// Runs are independent; nothing persists from one `run` call to the next.
///
/// # Examples
///
/// ```
/// use echoscript_runtime::EchoScript;
///
/// let runtime = EchoScript::new();
/// let output = runtime.run("println(1 + 2);").unwrap();
/// assert_eq!(output, vec!["3"]);
/// ```
pub struct EchoScript;

impl EchoScript {
    /// Create a new EchoScript runtime instance
    pub fn new() -> Self {
        Self
    }

    /// Run EchoScript source to completion
    ///
    /// Returns the buffered print output, or the first diagnostic from
    /// whichever stage rejected the script.
    ///
    /// # Examples
    ///
    /// ```
    /// use echoscript_runtime::EchoScript;
    ///
    /// let runtime = EchoScript::new();
    /// let output = runtime.run("let x = 2;\nprintln(x * 21);").unwrap();
    /// assert_eq!(output, vec!["42"]);
    /// ```
    pub fn run(&self, source: &str) -> RunResult {
        let tokens = Lexer::new(source)
            .tokenize()
            .map_err(|diagnostic| attach_snippet(diagnostic, source))?;

        let program = Parser::new(tokens)
            .parse()
            .map_err(|diagnostic| attach_snippet(diagnostic, source))?;

        let mut interpreter = Interpreter::new();
        match interpreter.eval(&program) {
            Ok(()) => Ok(interpreter.take_output()),
            Err(error) => Err(attach_snippet(runtime_error_to_diagnostic(error), source)),
        }
    }

    /// Run an EchoScript source file
    ///
    /// Reads and runs the script at the given path; the path is recorded on
    /// any resulting diagnostic.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use echoscript_runtime::EchoScript;
    ///
    /// let runtime = EchoScript::new();
    /// let result = runtime.run_file("program.es");
    /// ```
    pub fn run_file(&self, path: &str) -> RunResult {
        // File-level failures have no meaningful position; line 1 keeps the
        // diagnostic inside the 1-based scheme
        let source = std::fs::read_to_string(path).map_err(|e| {
            Diagnostic::error(format!("Failed to read file: {}", e), 1).with_file(path)
        })?;

        self.run(&source)
            .map_err(|diagnostic| diagnostic.with_file(path))
    }
}

impl Default for EchoScript {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a RuntimeError to a Diagnostic
fn runtime_error_to_diagnostic(error: RuntimeError) -> Diagnostic {
    let code = match &error {
        RuntimeError::UndefinedVariable { .. } => error_codes::UNDEFINED_VARIABLE,
        RuntimeError::UndefinedFunction { .. } => error_codes::UNDEFINED_FUNCTION,
        RuntimeError::ArityMismatch { .. } => error_codes::ARITY_MISMATCH,
        RuntimeError::DivisionByZero { .. } => error_codes::DIVISION_BY_ZERO,
        RuntimeError::UnknownOperator { .. } => error_codes::UNKNOWN_OPERATOR,
        RuntimeError::InvalidOperandType { .. } => error_codes::INVALID_OPERAND,
        RuntimeError::ReturnOutsideFunction { .. } => error_codes::RETURN_OUTSIDE_FUNCTION,
    };

    Diagnostic::error_with_code(code, error.to_string(), error.line()).with_label("runtime error")
}

/// Attach the offending source line when the diagnostic lacks one
///
/// The parser and interpreter work on tokens and AST nodes, so the facade
/// is the first place that can pair their diagnostics with source text.
fn attach_snippet(diagnostic: Diagnostic, source: &str) -> Diagnostic {
    if !diagnostic.snippet.is_empty() {
        return diagnostic;
    }
    match source.lines().nth(diagnostic.line.saturating_sub(1)) {
        Some(text) => diagnostic.with_snippet(text),
        None => diagnostic,
    }
}
