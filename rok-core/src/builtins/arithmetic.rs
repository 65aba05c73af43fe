// rok-core - Arithmetic built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Arithmetic operations: +, -, *, /, %, ^
//!
//! All operators fold left over their arguments. A single argument to `-`
//! negates it. Arithmetic is checked: overflow is an error rather than a
//! wrapped result.

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl ArithOp {
    fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Mod => "%",
            ArithOp::Pow => "^",
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64> {
        let overflow = || Error::Overflow(self.name());
        match self {
            ArithOp::Add => x.checked_add(y).ok_or_else(overflow),
            ArithOp::Sub => x.checked_sub(y).ok_or_else(overflow),
            ArithOp::Mul => x.checked_mul(y).ok_or_else(overflow),
            ArithOp::Div if y == 0 => Err(Error::DivisionByZero),
            ArithOp::Div => x.checked_div(y).ok_or_else(overflow),
            ArithOp::Mod if y == 0 => Err(Error::DivisionByZero),
            ArithOp::Mod => x.checked_rem(y).ok_or_else(overflow),
            ArithOp::Pow => power(x, y),
        }
    }
}

fn power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        return Err(Error::NegativeExponent);
    }
    match u32::try_from(exponent) {
        Ok(exp) => base.checked_pow(exp).ok_or(Error::Overflow("^")),
        // Only these bases survive an exponent this large.
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => Err(Error::Overflow("^")),
        },
    }
}

pub(crate) fn builtin_arith(op: ArithOp, args: Vec<Value>) -> Result<Value> {
    let name = op.name();
    let nums = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| match arg {
            Value::Number(n) => Ok(n),
            other => Err(Error::type_error(name, i, "Number", other.type_name())),
        })
        .collect::<Result<Vec<i64>>>()?;

    let Some((&first, rest)) = nums.split_first() else {
        return Err(Error::arity_at_least(name, 1, 0));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or(Error::Overflow(name));
    }

    rest.iter()
        .try_fold(first, |acc, &y| op.apply(acc, y))
        .map(Value::Number)
}
