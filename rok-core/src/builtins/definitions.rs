// rok-core - Definition built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Binding forms: `\`, `def`, `=`

use crate::env::Env;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::value::Value;

use super::{require_qexpr, require_symbols};

/// (\ {formals} {body}) - build a closure over the calling environment
pub(crate) fn builtin_lambda(env: &Env, args: Vec<Value>) -> Result<Value> {
    let [formals, body]: [Value; 2] = args
        .try_into()
        .map_err(|args: Vec<Value>| Error::arity("\\", 2, args.len()))?;

    let formals = require_qexpr("\\", 0, formals)?;
    let body = require_qexpr("\\", 1, body)?;
    let formals = require_symbols("\\", formals)?;

    Ok(Value::lambda(formals, body, env.clone()))
}

/// (def {a b} 1 2) - bind each symbol in the root environment
pub(crate) fn builtin_def(env: &Env, args: Vec<Value>) -> Result<Value> {
    bind_all("def", env, args, Env::def)
}

/// (= {a b} 1 2) - bind each symbol in the nearest owning frame
pub(crate) fn builtin_put(env: &Env, args: Vec<Value>) -> Result<Value> {
    bind_all("=", env, args, Env::put)
}

fn bind_all(
    name: &'static str,
    env: &Env,
    args: Vec<Value>,
    bind: fn(&Env, Symbol, Value),
) -> Result<Value> {
    let mut args = args.into_iter();
    let Some(targets) = args.next() else {
        return Err(Error::arity_at_least(name, 1, 0));
    };
    let symbols = require_symbols(name, require_qexpr(name, 0, targets)?)?;
    let values: Vec<Value> = args.collect();

    if symbols.len() != values.len() {
        return Err(Error::SymbolCount {
            name,
            symbols: symbols.len(),
            values: values.len(),
        });
    }

    for (sym, val) in symbols.into_iter().zip(values) {
        bind(env, sym, val);
    }
    Ok(Value::unit())
}
