//! Expression evaluation

use crate::ast::{BinaryExpr, CallExpr, Expr, Literal};
use crate::interpreter::{ControlFlow, Environment, Interpreter};
use crate::token::TokenKind;
use crate::value::{NumericKind, RuntimeError, Value};

impl Interpreter {
    /// Evaluate an expression
    pub(super) fn eval_expr(
        &mut self,
        expr: &Expr,
        env: &mut Environment,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(lit, _) => Ok(self.eval_literal(lit)),
            Expr::Variable(var) => {
                env.get(&var.name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable {
                        name: var.name.clone(),
                        line: var.line,
                    })
            }
            Expr::Binary(binary) => self.eval_binary(binary, env),
            Expr::Call(call) => self.eval_call(call, env),
        }
    }

    /// Evaluate a literal
    pub(super) fn eval_literal(&self, lit: &Literal) -> Value {
        match lit {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(f) => Value::Float(*f),
            Literal::String(s) => Value::string(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Char(c) => Value::Char(*c),
        }
    }

    /// Evaluate a binary expression
    fn eval_binary(
        &mut self,
        binary: &BinaryExpr,
        env: &mut Environment,
    ) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&binary.left, env)?;
        let right = self.eval_expr(&binary.right, env)?;

        // A string on either side turns every operator into concatenation
        if matches!(left, Value::String(_)) || matches!(right, Value::String(_)) {
            return Ok(Value::string(format!("{}{}", left, right)));
        }

        match binary.op {
            TokenKind::Slash => {
                let (a, left_kind) = self.numeric_operand(&left, binary.line)?;
                let (b, right_kind) = self.numeric_operand(&right, binary.line)?;
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line: binary.line });
                }
                let quotient = a / b;
                // An integral quotient of two integral operands narrows back
                if left_kind == NumericKind::Int
                    && right_kind == NumericKind::Int
                    && quotient.fract() == 0.0
                {
                    Ok(Value::Int(quotient as i64))
                } else {
                    Ok(Value::Float(quotient))
                }
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star => {
                // Two integral operands stay in the integer domain, with
                // fixed-width wrapping at the i64 boundary
                if let Some((a, b)) = integer_operands(&left, &right) {
                    let result = match binary.op {
                        TokenKind::Plus => a.wrapping_add(b),
                        TokenKind::Minus => a.wrapping_sub(b),
                        _ => a.wrapping_mul(b),
                    };
                    return Ok(Value::Int(result));
                }
                let (a, _) = self.numeric_operand(&left, binary.line)?;
                let (b, _) = self.numeric_operand(&right, binary.line)?;
                let result = match binary.op {
                    TokenKind::Plus => a + b,
                    TokenKind::Minus => a - b,
                    _ => a * b,
                };
                Ok(Value::Float(result))
            }
            other => Err(RuntimeError::UnknownOperator {
                op: other.as_str().to_string(),
                line: binary.line,
            }),
        }
    }

    /// Evaluate a function call
    fn eval_call(
        &mut self,
        call: &CallExpr,
        env: &mut Environment,
    ) -> Result<Value, RuntimeError> {
        let function = self.functions.get(&call.name).cloned().ok_or_else(|| {
            RuntimeError::UndefinedFunction {
                name: call.name.clone(),
                line: call.line,
            }
        })?;

        // Arguments evaluate left to right in the caller's environment
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.eval_expr(arg, env)?);
        }

        // Missing arguments are an error; extras are silently dropped
        if args.len() < function.params.len() {
            return Err(RuntimeError::ArityMismatch {
                name: call.name.clone(),
                expected: function.params.len(),
                found: args.len(),
                line: call.line,
            });
        }

        // The callee sees a copy of the caller's bindings, so nothing it
        // does can leak back
        let mut call_env = env.clone();
        for (param, arg) in function.params.iter().zip(args) {
            call_env.insert(param.clone(), arg);
        }

        match self.eval_block(&function.body, &mut call_env)? {
            ControlFlow::Return(value) => Ok(value),
            ControlFlow::None => Ok(Value::Int(0)),
        }
    }

    /// Coerce an operand to its numeric view, or fail with its type name
    fn numeric_operand(&self, value: &Value, line: usize) -> Result<(f64, NumericKind), RuntimeError> {
        value
            .as_numeric()
            .ok_or_else(|| RuntimeError::InvalidOperandType {
                type_name: value.type_name().to_string(),
                line,
            })
    }
}

/// Exact integer views of both operands, when both classify integral
fn integer_operands(left: &Value, right: &Value) -> Option<(i64, i64)> {
    let as_int = |value: &Value| match value {
        Value::Int(n) => Some(*n),
        Value::Bool(b) => Some(*b as i64),
        Value::Char(c) => Some(*c as i64),
        _ => None,
    };
    Some((as_int(left)?, as_int(right)?))
}
