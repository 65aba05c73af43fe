// rok-core - List built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Q-Expression operations: list, join, head, tail, len

use im::Vector;

use crate::error::{Error, Result};
use crate::value::Value;

use super::{require_nonempty_qexpr, require_qexpr, single};

/// (list a b ...) - the arguments as a Q-Expression
pub(crate) fn builtin_list(args: Vec<Value>) -> Value {
    Value::Qexpr(args.into_iter().collect())
}

/// (join {a} {b c} ...) - concatenate Q-Expressions in argument order
pub(crate) fn builtin_join(args: Vec<Value>) -> Result<Value> {
    let mut joined = Vector::new();
    for (i, arg) in args.into_iter().enumerate() {
        joined.append(require_qexpr("join", i, arg)?);
    }
    Ok(Value::Qexpr(joined))
}

/// (head {a b c}) - {a}
pub(crate) fn builtin_head(args: Vec<Value>) -> Result<Value> {
    let mut items = require_nonempty_qexpr("head", 0, single("head", args)?)?;
    items.truncate(1);
    Ok(Value::Qexpr(items))
}

/// (tail {a b c}) - {b c}
pub(crate) fn builtin_tail(args: Vec<Value>) -> Result<Value> {
    let mut items = require_nonempty_qexpr("tail", 0, single("tail", args)?)?;
    items.pop_front();
    Ok(Value::Qexpr(items))
}

/// (len {a b c}) - 3
pub(crate) fn builtin_len(args: Vec<Value>) -> Result<Value> {
    let items = require_qexpr("len", 0, single("len", args)?)?;
    i64::try_from(items.len())
        .map(Value::Number)
        .map_err(|_| Error::Overflow("len"))
}
