//! Diagnostic system for errors
//!
//! All user-facing errors flow through the unified Diagnostic type,
//! ensuring consistent formatting across the lexer, parser, and interpreter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic schema version
pub const DIAG_VERSION: u32 = 1;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Fatal error that stops the run
    #[serde(rename = "error")]
    Error,
    /// Warning that does not stop the run
    #[serde(rename = "warning")]
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message (error or warning)
///
/// EchoScript tracks source positions at line granularity, so diagnostics
/// carry a line and the text of that line rather than a column range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic schema version
    pub diag_version: u32,
    /// Severity level
    pub level: DiagnosticLevel,
    /// Error code (e.g., "ES0004")
    pub code: String,
    /// Main diagnostic message
    pub message: String,
    /// File path, or "<script>" when the source did not come from a file
    pub file: String,
    /// Line number (1-based)
    pub line: usize,
    /// Source line string
    pub snippet: String,
    /// Short label describing which stage rejected the input
    pub label: String,
    /// Suggested fix (optional)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic with code
    pub fn error_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            diag_version: DIAG_VERSION,
            level: DiagnosticLevel::Error,
            code: code.into(),
            message: message.into(),
            file: "<script>".to_string(),
            line,
            snippet: String::new(),
            label: String::new(),
            help: None,
        }
    }

    /// Create a new warning diagnostic with code
    pub fn warning_with_code(
        code: impl Into<String>,
        message: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            ..Self::error_with_code(code, message, line)
        }
    }

    /// Create a new error diagnostic (uses generic error code)
    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self::error_with_code(error_codes::GENERIC_ERROR, message, line)
    }

    /// Create a new warning diagnostic (uses generic warning code)
    pub fn warning(message: impl Into<String>, line: usize) -> Self {
        Self::warning_with_code(error_codes::GENERIC_WARNING, message, line)
    }

    /// Set the file path
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the snippet (source line)
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Set the label (stage description)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a help message
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Format as human-readable string
    pub fn to_human_string(&self) -> String {
        let mut output = String::new();

        // Header: error[ES0004]: Division by zero
        output.push_str(&format!(
            "{}[{}]: {}\n",
            self.level, self.code, self.message
        ));

        // Location: --> path/to/file.es:12
        output.push_str(&format!("  --> {}:{}\n", self.file, self.line));

        // Snippet with label
        if !self.snippet.is_empty() {
            output.push_str("   |\n");
            output.push_str(&format!("{:>2} | {}\n", self.line, self.snippet));
            if !self.label.is_empty() {
                output.push_str(&format!("   | {}\n", self.label));
            }
        }

        // Help
        if let Some(help) = &self.help {
            output.push_str(&format!("   = help: {}\n", help));
        }

        output
    }

    /// Format as JSON string
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format as compact JSON string
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Error code registry
pub mod error_codes {
    // ES0xxx - Runtime Errors
    pub const UNDEFINED_VARIABLE: &str = "ES0001";
    pub const UNDEFINED_FUNCTION: &str = "ES0002";
    pub const ARITY_MISMATCH: &str = "ES0003";
    pub const DIVISION_BY_ZERO: &str = "ES0004";
    pub const UNKNOWN_OPERATOR: &str = "ES0005";
    pub const INVALID_OPERAND: &str = "ES0006";
    pub const RETURN_OUTSIDE_FUNCTION: &str = "ES0007";

    // ES1xxx - Syntax Errors
    pub const SYNTAX_ERROR: &str = "ES1000";
    pub const UNEXPECTED_TOKEN: &str = "ES1001";
    pub const UNTERMINATED_STRING: &str = "ES1002";
    pub const UNTERMINATED_CHAR: &str = "ES1003";
    pub const EMPTY_CHAR: &str = "ES1004";
    pub const INVALID_LITERAL: &str = "ES1005";

    // ES9xxx - Internal Errors
    pub const GENERIC_ERROR: &str = "ES9999";
    pub const GENERIC_WARNING: &str = "EW9999";
}
