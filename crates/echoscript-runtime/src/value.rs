//! Value types for the EchoScript runtime
//!
//! Value semantics:
//! - Ints, floats, bools, chars: plain copies
//! - Strings: heap-allocated, reference-counted (Rc<String>), immutable
//!
//! Environments clone values wholesale on every call, so everything here is
//! cheap to clone. The runtime is single-threaded throughout; nothing needs
//! to cross a thread boundary.

use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Runtime value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Immutable string
    String(Rc<String>),
    /// Boolean
    Bool(bool),
    /// Single character
    Char(char),
}

/// Arithmetic classification of a numeric operand
///
/// Ints, bools, and chars all count as integral; only floats are floating.
/// The classification decides whether a binary operation stays in the
/// integer domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Int,
    Float,
}

impl Value {
    /// Construct a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Rc::new(s.into()))
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
        }
    }

    /// Classify this value for arithmetic
    ///
    /// Returns the magnitude and whether it came from the integral or
    /// floating world: ints pass through, `true`/`false` count as 1/0, and
    /// chars count as their ordinal. Strings are not numeric.
    pub fn as_numeric(&self) -> Option<(f64, NumericKind)> {
        match self {
            Value::Int(i) => Some((*i as f64, NumericKind::Int)),
            Value::Float(x) => Some((*x, NumericKind::Float)),
            Value::Bool(b) => Some((if *b { 1.0 } else { 0.0 }, NumericKind::Int)),
            Value::Char(c) => Some((*c as u32 as f64, NumericKind::Int)),
            Value::String(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", format_float(*x)),
            Value::String(s) => write!(f, "{}", s.as_ref()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Render a float the way the language's `toString` does
///
/// Integral magnitudes keep an explicit `.0` suffix so floats stay visually
/// distinct from ints. Everything else uses default formatting with trailing
/// zeros trimmed, never trimming down to a bare trailing dot.
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        return format!("{}.0", value as i64);
    }

    let mut text = format!("{}", value);
    if text.contains('.') && !text.contains('e') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.push('0');
        }
    }
    text
}

/// Runtime error type with source line information
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeError {
    /// Variable reference not found in the current environment
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String, line: usize },
    /// Call target not in the function table
    #[error("Function not defined: {name}")]
    UndefinedFunction { name: String, line: usize },
    /// Call supplied fewer arguments than the declaration has parameters
    #[error("Function {name} expects {expected} arguments, got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        line: usize,
    },
    /// Division with a zero right-hand magnitude
    #[error("Division by zero")]
    DivisionByZero { line: usize },
    /// Non-arithmetic operator reached the evaluator
    #[error("Unknown operator '{op}'")]
    UnknownOperator { op: String, line: usize },
    /// Non-numeric, non-string operand in arithmetic
    #[error("Invalid operand type for arithmetic operation: {type_name}")]
    InvalidOperandType { type_name: String, line: usize },
    /// `return` executed outside any function body
    #[error("Return statement outside of a function")]
    ReturnOutsideFunction { line: usize },
}

impl RuntimeError {
    /// Get the source line of this error
    pub fn line(&self) -> usize {
        match self {
            RuntimeError::UndefinedVariable { line, .. } => *line,
            RuntimeError::UndefinedFunction { line, .. } => *line,
            RuntimeError::ArityMismatch { line, .. } => *line,
            RuntimeError::DivisionByZero { line } => *line,
            RuntimeError::UnknownOperator { line, .. } => *line,
            RuntimeError::InvalidOperandType { line, .. } => *line,
            RuntimeError::ReturnOutsideFunction { line } => *line,
        }
    }
}
