//! Statement execution

use crate::ast::Stmt;
use crate::interpreter::{ControlFlow, Environment, Interpreter};
use crate::value::RuntimeError;
use std::rc::Rc;

impl Interpreter {
    /// Execute a statement against the given environment
    pub(super) fn eval_statement(
        &mut self,
        stmt: &Stmt,
        env: &mut Environment,
    ) -> Result<ControlFlow, RuntimeError> {
        match stmt {
            Stmt::Let(decl) => {
                let value = self.eval_expr(&decl.value, env)?;
                env.insert(decl.name.clone(), value);
                Ok(ControlFlow::None)
            }
            Stmt::Print(print) => {
                let value = self.eval_expr(&print.value, env)?;
                self.output.push(value.to_string());
                Ok(ControlFlow::None)
            }
            Stmt::Println(println) => {
                let value = self.eval_expr(&println.value, env)?;
                self.output.push(value.to_string());
                Ok(ControlFlow::None)
            }
            Stmt::Func(decl) => {
                // Declaration only registers the body; nothing runs until a call
                self.functions
                    .insert(decl.name.clone(), Rc::new(decl.clone()));
                Ok(ControlFlow::None)
            }
            Stmt::Return(ret) => {
                let value = self.eval_expr(&ret.value, env)?;
                Ok(ControlFlow::Return(value))
            }
            Stmt::Expr(stmt) => {
                self.eval_expr(&stmt.expr, env)?;
                Ok(ControlFlow::None)
            }
        }
    }

    /// Execute a function body, stopping at the first `return`
    pub(super) fn eval_block(
        &mut self,
        body: &[Stmt],
        env: &mut Environment,
    ) -> Result<ControlFlow, RuntimeError> {
        for stmt in body {
            if let ControlFlow::Return(value) = self.eval_statement(stmt, env)? {
                return Ok(ControlFlow::Return(value));
            }
        }
        Ok(ControlFlow::None)
    }
}
