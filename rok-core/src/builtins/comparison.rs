// rok-core - Comparison built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Comparison operations: >, >=, <, <=, ==, !=

use crate::error::{Error, Result};
use crate::value::Value;

use super::require_arity;

// ============================================================================
// Ordering
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrderOp {
    Gt,
    Ge,
    Lt,
    Le,
}

impl OrderOp {
    fn name(self) -> &'static str {
        match self {
            OrderOp::Gt => ">",
            OrderOp::Ge => ">=",
            OrderOp::Lt => "<",
            OrderOp::Le => "<=",
        }
    }

    fn holds(self, x: i64, y: i64) -> bool {
        match self {
            OrderOp::Gt => x > y,
            OrderOp::Ge => x >= y,
            OrderOp::Lt => x < y,
            OrderOp::Le => x <= y,
        }
    }
}

pub(crate) fn builtin_order(op: OrderOp, args: Vec<Value>) -> Result<Value> {
    let name = op.name();
    require_arity(name, &args, 2)?;
    match (&args[0], &args[1]) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::bool(op.holds(*x, *y))),
        (Value::Number(_), other) => Err(Error::type_error(name, 1, "Number", other.type_name())),
        (other, _) => Err(Error::type_error(name, 0, "Number", other.type_name())),
    }
}

// ============================================================================
// Equality
// ============================================================================

pub(crate) fn builtin_eq(args: Vec<Value>) -> Result<Value> {
    require_arity("==", &args, 2)?;
    Ok(Value::bool(args[0] == args[1]))
}

pub(crate) fn builtin_ne(args: Vec<Value>) -> Result<Value> {
    require_arity("!=", &args, 2)?;
    Ok(Value::bool(args[0] != args[1]))
}
