//! Evaluating a compiled [`Ast`] against a host [`Record`].

use std::collections::HashMap;

use regex::RegexBuilder;
use unicase::UniCase;

use crate::dates::parse_date;
use crate::error::{Error, Result};
use crate::record::Record;

use super::ast::{Ast, BinOp, UnOp};

/// A typed SEX value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    /// Truthiness used by boolean contexts (`&&`, `||`, `=>`, `?:`, and the
    /// overall match result).
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Real(r) => *r != 0.0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(r) => Some(*r),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => coerce_str(s).and_then(|n| n.as_f64()),
        }
    }

    fn to_display_string(&self) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

/// A missing name resolution propagates through the expression; the context
/// that consumes it (the ultimate boolean result) treats it as `false`.
type EvalValue = Option<Value>;

enum Num {
    Int(i64),
    Real(f64),
}

impl Num {
    fn as_f64(&self) -> Option<f64> {
        Some(match self {
            Num::Int(n) => *n as f64,
            Num::Real(r) => *r,
        })
    }
}

fn coerce_str(s: &str) -> Option<Num> {
    let t = s.trim();
    if is_int_token(t) {
        t.parse::<i64>().ok().map(Num::Int)
    } else if is_real_token(t) {
        t.parse::<f64>().ok().map(Num::Real)
    } else {
        None
    }
}

fn is_int_token(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_real_token(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    match s.split_once('.') {
        Some((a, b)) => {
            !a.is_empty()
                && !b.is_empty()
                && a.bytes().all(|b| b.is_ascii_digit())
                && b.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn coerce_numeric(v: &Value) -> Option<Num> {
    match v {
        Value::Int(n) => Some(Num::Int(*n)),
        Value::Real(r) => Some(Num::Real(*r)),
        Value::Bool(b) => Some(Num::Int(if *b { 1 } else { 0 })),
        Value::Str(s) => coerce_str(s),
    }
}

/// Evaluation context: the record being filtered, case-folding mode, and any
/// pre-bound ("fixed") name values.
pub struct EvalContext<'a> {
    pub record: &'a Record,
    pub case_insensitive: bool,
    pub fixed: &'a HashMap<String, String>,
}

/// Evaluate `ast` against `ctx`, returning the top-level typed result.
pub fn eval(ast: &Ast, ctx: &EvalContext) -> Result<Value> {
    Ok(eval_inner(ast, ctx)?.unwrap_or(Value::Bool(false)))
}

/// Evaluate `ast` and reduce it to the boolean "did this record match".
pub fn eval_bool(ast: &Ast, ctx: &EvalContext) -> Result<bool> {
    Ok(eval(ast, ctx)?.truthy())
}

fn eval_inner(ast: &Ast, ctx: &EvalContext) -> Result<EvalValue> {
    match ast {
        Ast::Int(n) => Ok(Some(Value::Int(*n))),
        Ast::Real(r) => Ok(Some(Value::Real(*r))),
        Ast::Str(s) => Ok(Some(Value::Str(s.clone()))),
        Ast::Name { name, index } => Ok(resolve_name(ctx, name, *index)),
        Ast::Count(name) => Ok(Some(Value::Int(ctx.record.count_named(name) as i64))),
        Ast::Unary(op, inner) => eval_unary(*op, inner, ctx),
        Ast::Binary(op, lhs, rhs) => eval_binary(*op, lhs, rhs, ctx),
        Ast::Cond(test, then_branch, else_branch) => {
            if eval_bool(test, ctx)? {
                eval_inner(then_branch, ctx)
            } else {
                eval_inner(else_branch, ctx)
            }
        }
    }
}

fn resolve_name(ctx: &EvalContext, name: &str, index: Option<i64>) -> EvalValue {
    if let Some(fixed) = ctx.fixed.get(name) {
        return Some(Value::Str(fixed.clone()));
    }
    let idx = index.unwrap_or(0).max(0) as usize;
    ctx.record
        .field_at(name, idx)
        .map(|f| Value::Str(f.value().to_string()))
}

fn eval_unary(op: UnOp, inner: &Ast, ctx: &EvalContext) -> Result<EvalValue> {
    match op {
        UnOp::Not => Ok(Some(Value::Bool(!eval_bool(inner, ctx)?))),
        UnOp::Neg => {
            let Some(v) = eval_inner(inner, ctx)? else { return Ok(None) };
            match coerce_numeric(&v).ok_or_else(|| Error::eval("'-' applied to a non-numeric value"))? {
                Num::Int(n) => Ok(Some(Value::Int(-n))),
                Num::Real(r) => Ok(Some(Value::Real(-r))),
            }
        }
    }
}

fn eval_binary(op: BinOp, lhs: &Ast, rhs: &Ast, ctx: &EvalContext) -> Result<EvalValue> {
    match op {
        BinOp::And => {
            if !eval_bool(lhs, ctx)? {
                return Ok(Some(Value::Bool(false)));
            }
            Ok(Some(Value::Bool(eval_bool(rhs, ctx)?)))
        }
        BinOp::Or => {
            if eval_bool(lhs, ctx)? {
                return Ok(Some(Value::Bool(true)));
            }
            Ok(Some(Value::Bool(eval_bool(rhs, ctx)?)))
        }
        BinOp::Implies => {
            if !eval_bool(lhs, ctx)? {
                return Ok(Some(Value::Bool(true)));
            }
            Ok(Some(Value::Bool(eval_bool(rhs, ctx)?)))
        }
        _ => {
            let Some(l) = eval_inner(lhs, ctx)? else { return Ok(None) };
            let Some(r) = eval_inner(rhs, ctx)? else { return Ok(None) };
            eval_binary_values(op, &l, &r, ctx.case_insensitive)
        }
    }
}

fn eval_binary_values(op: BinOp, l: &Value, r: &Value, case_insensitive: bool) -> Result<EvalValue> {
    match op {
        BinOp::Add => Ok(Some(arith_or_concat(l, r))),
        BinOp::Sub | BinOp::Mul | BinOp::Div | BinOp::Mod => {
            let ln = coerce_numeric(l).ok_or_else(|| Error::eval("arithmetic on a non-numeric operand"))?;
            let rn = coerce_numeric(r).ok_or_else(|| Error::eval("arithmetic on a non-numeric operand"))?;
            numeric_op(op, ln, rn).map(Some)
        }
        BinOp::Eq | BinOp::Neq | BinOp::Lt | BinOp::Gt | BinOp::Le | BinOp::Ge => {
            Ok(Some(Value::Bool(compare(op, l, r, case_insensitive))))
        }
        BinOp::Match => {
            let text = l.to_display_string();
            let pattern = r.to_display_string();
            let re = RegexBuilder::new(&pattern)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(|_| Error::eval(format!("invalid regular expression: {pattern}")))?;
            Ok(Some(Value::Bool(re.is_match(&text))))
        }
        BinOp::Before | BinOp::After | BinOp::SameTime => {
            let (Some(a), Some(b)) = (parse_date(&l.to_display_string()), parse_date(&r.to_display_string()))
            else {
                return Ok(Some(Value::Bool(false)));
            };
            let result = match op {
                BinOp::Before => a < b,
                BinOp::After => a > b,
                BinOp::SameTime => a == b,
                _ => unreachable!(),
            };
            Ok(Some(Value::Bool(result)))
        }
        BinOp::And | BinOp::Or | BinOp::Implies => unreachable!("short-circuited above"),
    }
}

fn arith_or_concat(l: &Value, r: &Value) -> Value {
    if let (Value::Str(a), Value::Str(b)) = (l, r) {
        if coerce_str(a).is_none() || coerce_str(b).is_none() {
            return Value::Str(format!("{a}{b}"));
        }
    }
    match (coerce_numeric(l), coerce_numeric(r)) {
        (Some(Num::Int(a)), Some(Num::Int(b))) => Value::Int(a + b),
        (Some(a), Some(b)) => Value::Real(a.as_f64().unwrap() + b.as_f64().unwrap()),
        _ => Value::Str(format!("{}{}", l.to_display_string(), r.to_display_string())),
    }
}

fn numeric_op(op: BinOp, l: Num, r: Num) -> Result<Value> {
    if let (Num::Int(a), Num::Int(b)) = (&l, &r) {
        return match op {
            BinOp::Sub => Ok(Value::Int(a - b)),
            BinOp::Mul => Ok(Value::Int(a * b)),
            BinOp::Div => {
                if *b == 0 {
                    Err(Error::eval("division by zero"))
                } else {
                    Ok(Value::Int(a / b))
                }
            }
            BinOp::Mod => {
                if *b == 0 {
                    Err(Error::eval("modulo by zero"))
                } else {
                    Ok(Value::Int(a % b))
                }
            }
            _ => unreachable!(),
        };
    }

    let a = l.as_f64().unwrap();
    let b = r.as_f64().unwrap();
    match op {
        BinOp::Sub => Ok(Value::Real(a - b)),
        BinOp::Mul => Ok(Value::Real(a * b)),
        BinOp::Div => {
            if b == 0.0 {
                Err(Error::eval("division by zero"))
            } else {
                Ok(Value::Real(a / b))
            }
        }
        BinOp::Mod => {
            if b == 0.0 {
                Err(Error::eval("modulo by zero"))
            } else {
                Ok(Value::Real(a % b))
            }
        }
        _ => unreachable!(),
    }
}

fn compare(op: BinOp, l: &Value, r: &Value, case_insensitive: bool) -> bool {
    let cmp = match (coerce_numeric(l), coerce_numeric(r)) {
        (Some(a), Some(b)) => a.as_f64().unwrap().partial_cmp(&b.as_f64().unwrap()),
        (None, None) => {
            let (a, b) = (l.to_display_string(), r.to_display_string());
            if case_insensitive {
                UniCase::unicode(&a).partial_cmp(&UniCase::unicode(&b))
            } else {
                a.partial_cmp(&b)
            }
        }
        (Some(_), None) | (None, Some(_)) => return false,
    };

    let Some(ord) = cmp else { return matches!(op, BinOp::Neq) };

    match op {
        BinOp::Eq => ord.is_eq(),
        BinOp::Neq => !ord.is_eq(),
        BinOp::Lt => ord.is_lt(),
        BinOp::Gt => ord.is_gt(),
        BinOp::Le => ord.is_le(),
        BinOp::Ge => ord.is_ge(),
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    fn ctx<'a>(record: &'a Record, fixed: &'a HashMap<String, String>) -> EvalContext<'a> {
        EvalContext { record, case_insensitive: false, fixed }
    }

    fn record_xy() -> Record {
        let mut r = Record::new();
        r.push_field(Field::new("x", "3"));
        r.push_field(Field::new("y", "4"));
        r
    }

    #[test]
    fn arithmetic_and_missing_field_count() {
        let fixed = HashMap::new();
        let r = record_xy();
        let c = ctx(&r, &fixed);

        assert!(eval_bool(&super::super::parser::parse("x + y = 7").unwrap(), &c).unwrap());
        assert!(eval_bool(&super::super::parser::parse("#z = 0").unwrap(), &c).unwrap());
        assert!(super::super::parser::parse("x / 0")
            .and_then(|ast| eval(&ast, &c))
            .is_err());
    }

    #[test]
    fn subscript_selects_nth_occurrence() {
        let mut r = Record::new();
        r.push_field(Field::new("t", "1"));
        r.push_field(Field::new("t", "2"));
        let fixed = HashMap::new();
        let c = ctx(&r, &fixed);

        assert!(eval_bool(&super::super::parser::parse("t[1] = 2").unwrap(), &c).unwrap());
        assert!(eval_bool(&super::super::parser::parse("t = 1").unwrap(), &c).unwrap());
    }

    #[test]
    fn missing_name_is_falsy_not_error() {
        let r = Record::new();
        let fixed = HashMap::new();
        let c = ctx(&r, &fixed);
        assert!(!eval_bool(&super::super::parser::parse("missing = 1").unwrap(), &c).unwrap());
    }

    #[test]
    fn short_circuit_skips_division_by_zero() {
        let r = record_xy();
        let fixed = HashMap::new();
        let c = ctx(&r, &fixed);
        let result = eval_bool(&super::super::parser::parse("1 = 1 || 1 / 0 = 0").unwrap(), &c);
        assert_eq!(result, Ok(true));
    }

    #[test]
    fn regex_match_respects_case_sensitivity() {
        let mut r = Record::new();
        r.push_field(Field::new("name", "Alice"));
        let fixed = HashMap::new();
        let mut c = ctx(&r, &fixed);
        assert!(!eval_bool(&super::super::parser::parse("name ~ \"^alice$\"").unwrap(), &c).unwrap());
        c.case_insensitive = true;
        assert!(eval_bool(&super::super::parser::parse("name ~ \"^alice$\"").unwrap(), &c).unwrap());
    }

    #[test]
    fn disparate_kind_comparisons_are_always_false() {
        let mut r = Record::new();
        r.push_field(Field::new("name", "Alice"));
        let fixed = HashMap::new();
        let c = ctx(&r, &fixed);

        assert!(!eval_bool(&super::super::parser::parse("name = 5").unwrap(), &c).unwrap());
        assert!(!eval_bool(&super::super::parser::parse("name != 5").unwrap(), &c).unwrap());
        assert!(!eval_bool(&super::super::parser::parse("name < 5").unwrap(), &c).unwrap());
        assert!(!eval_bool(&super::super::parser::parse("name > 5").unwrap(), &c).unwrap());
    }
}
