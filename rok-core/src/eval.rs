// rok-core - Evaluator for Rok
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Tree-walking evaluator.
//!
//! Atoms and Q-Expressions evaluate to themselves, symbols are looked up, and
//! S-Expressions evaluate their children left to right before applying the
//! first to the rest. The first error produced stops the whole expression.

use std::cell::Cell;
use std::iter;

use im::Vector;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::value::{Lambda, VARIADIC_MARKER, Value};

// ============================================================================
// Recursion limit
// ============================================================================

const DEFAULT_MAX_EVAL_DEPTH: usize = 1000;

thread_local! {
    static EVAL_DEPTH: Cell<usize> = const { Cell::new(0) };
    static MAX_EVAL_DEPTH: Cell<usize> = const { Cell::new(DEFAULT_MAX_EVAL_DEPTH) };
}

/// Set the maximum S-Expression nesting depth for this thread.
/// Returns the previous limit.
pub fn set_max_eval_depth(depth: usize) -> usize {
    MAX_EVAL_DEPTH.with(|d| d.replace(depth))
}

/// Get the current maximum eval recursion depth.
#[inline]
#[must_use]
pub fn get_max_eval_depth() -> usize {
    MAX_EVAL_DEPTH.with(|d| d.get())
}

/// Get the current eval recursion depth.
#[inline]
#[must_use]
pub fn get_eval_depth() -> usize {
    EVAL_DEPTH.with(|d| d.get())
}

struct EvalDepthGuard;

impl EvalDepthGuard {
    fn new() -> Result<Self> {
        let (current, max) = EVAL_DEPTH.with(|d| {
            let current = d.get();
            d.set(current + 1);
            (current + 1, MAX_EVAL_DEPTH.with(|m| m.get()))
        });
        if current > max {
            EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
            Err(Error::DepthExceeded(max))
        } else {
            Ok(EvalDepthGuard)
        }
    }
}

impl Drop for EvalDepthGuard {
    fn drop(&mut self) {
        EVAL_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Grow the native stack before recursing if it is running low.
#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 100 * 1024;
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate a value in an environment.
pub fn eval(env: &Env, value: Value) -> Value {
    match value {
        Value::Symbol(sym) => env.lookup(&sym).unwrap_or_else(Value::from),
        Value::Sexpr(items) => match EvalDepthGuard::new() {
            Ok(_guard) => ensure_sufficient_stack(|| eval_sexpr(env, items)),
            Err(e) => e.into(),
        },
        other => other,
    }
}

fn eval_sexpr(env: &Env, items: Vector<Value>) -> Value {
    if items.is_empty() {
        return Value::Sexpr(items);
    }

    let mut evaluated = Vec::with_capacity(items.len());
    for item in items {
        let value = eval(env, item);
        if value.is_error() {
            return value;
        }
        evaluated.push(value);
    }

    if evaluated.len() == 1 {
        return evaluated.swap_remove(0);
    }

    let args = evaluated.split_off(1);
    match evaluated.pop() {
        Some(func) => apply(env, func, args),
        None => Value::unit(),
    }
}

/// Apply a function value to already-evaluated arguments.
///
/// Builtins run directly against `env`. Lambdas bind their formals in a new
/// frame under their captured environment; supplying fewer arguments than
/// formals returns a partially applied lambda.
pub fn apply(env: &Env, func: Value, args: Vec<Value>) -> Value {
    if let Some(err) = args.iter().find(|a| a.is_error()) {
        return err.clone();
    }

    match func {
        Value::Builtin(builtin) => {
            tracing::trace!(builtin = builtin.name(), argc = args.len(), "apply builtin");
            builtin.call(env, args)
        }
        Value::Lambda(lambda) => {
            tracing::trace!(formals = lambda.formals.len(), argc = args.len(), "apply lambda");
            call_lambda(&lambda, args).unwrap_or_else(Value::from)
        }
        err @ Value::Error(_) => err,
        other => Error::NotCallable(other.type_name()).into(),
    }
}

fn call_lambda(lambda: &Lambda, args: Vec<Value>) -> Result<Value> {
    let given = args.len();
    let formals = &lambda.formals;
    let mut supplied = lambda.bound.clone();

    let mut bound = 0;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let Some(formal) = formals.get(bound) else {
            return Err(Error::TooManyArguments {
                expected: formals.len(),
                got: given,
            });
        };
        bound += 1;

        if formal.name() == VARIADIC_MARKER {
            let rest = variadic_target(&formals[bound..])?;
            let collected = iter::once(arg).chain(args.by_ref()).collect();
            supplied.push((rest.clone(), Value::Qexpr(collected)));
            bound += 1;
            break;
        }
        supplied.push((formal.clone(), arg));
    }

    let mut remaining = &formals[bound..];
    if remaining.first().is_some_and(|f| f.name() == VARIADIC_MARKER) {
        let rest = variadic_target(&remaining[1..])?;
        supplied.push((rest.clone(), Value::Qexpr(Vector::new())));
        remaining = &[];
    }

    if !remaining.is_empty() {
        return Ok(Value::partial(
            remaining.to_vec(),
            lambda.body.clone(),
            lambda.env.clone(),
            supplied,
        ));
    }

    let frame = lambda.env.child();
    for (formal, arg) in supplied {
        frame.define(formal, arg);
    }
    Ok(eval(&frame, Value::Sexpr(lambda.body.clone())))
}

/// The formal after `&`, which must be the last one.
fn variadic_target(after: &[Symbol]) -> Result<&Symbol> {
    match after {
        [rest] => Ok(rest),
        _ => Err(Error::InvalidVariadic),
    }
}
