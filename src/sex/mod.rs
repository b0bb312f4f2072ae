//! The selection-expression (SEX) engine: a small infix expression language
//! compiled to an AST and evaluated against a [`Record`] to filter it.
//!
//! A conventional lexer → parser → AST → evaluator pipeline; the operator
//! set and AST node shape follow `rec-sex-ast.h`/`rec-sex-parser.c`.

mod ast;
mod eval;
mod lex;
mod parser;

use std::collections::HashMap;

pub use ast::Ast;
pub use eval::Value;

use crate::error::Result;
use crate::record::Record;

/// A compiled selection expression, ready to be evaluated against records.
#[derive(Debug, Clone)]
pub struct Sex {
    ast: Ast,
    case_insensitive: bool,
    fixed: HashMap<String, String>,
}

impl Sex {
    /// Compile `expr`. Fails with a `ParseError` if the expression is
    /// syntactically invalid (e.g. empty, or a dangling operator).
    pub fn compile(expr: &str) -> Result<Self> {
        Self::compile_with_case(expr, false)
    }

    /// Compile `expr`, folding case for string comparisons, regex matches,
    /// and enum matching at evaluation time.
    pub fn compile_with_case(expr: &str, case_insensitive: bool) -> Result<Self> {
        let ast = parser::parse(expr)?;
        Ok(Self { ast, case_insensitive, fixed: HashMap::new() })
    }

    /// Pre-bind `name` to a literal string value: every reference to `name`
    /// resolves to `value` regardless of the record being evaluated.
    pub fn fix(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fixed.insert(name.into(), value.into());
    }

    /// Evaluate against `record`, returning the typed result.
    pub fn eval(&self, record: &Record) -> Result<Value> {
        let ctx = eval::EvalContext {
            record,
            case_insensitive: self.case_insensitive,
            fixed: &self.fixed,
        };
        eval::eval(&self.ast, &ctx)
    }

    /// Evaluate against `record`, reducing the result to "did it match".
    pub fn matches(&self, record: &Record) -> Result<bool> {
        let ctx = eval::EvalContext {
            record,
            case_insensitive: self.case_insensitive,
            fixed: &self.fixed,
        };
        eval::eval_bool(&self.ast, &ctx)
    }
}
