// rok-core - Control built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Control operations: if, eval, error

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::eval;
use crate::value::Value;

use super::{require_qexpr, single};

/// (if cond {then} {else}) - evaluate the branch selected by a Boolean
pub(crate) fn builtin_if(env: &Env, args: Vec<Value>) -> Result<Value> {
    let [cond, then, otherwise]: [Value; 3] = args
        .try_into()
        .map_err(|args: Vec<Value>| Error::arity("if", 3, args.len()))?;

    let cond = match cond {
        Value::Bool(b) => b,
        other => return Err(Error::type_error("if", 0, "Boolean", other.type_name())),
    };
    let then = require_qexpr("if", 1, then)?;
    let otherwise = require_qexpr("if", 2, otherwise)?;

    let branch = if cond { then } else { otherwise };
    Ok(eval(env, Value::Sexpr(branch)))
}

/// (eval {expr}) - evaluate a Q-Expression as code
pub(crate) fn builtin_eval(env: &Env, args: Vec<Value>) -> Result<Value> {
    let items = require_qexpr("eval", 0, single("eval", args)?)?;
    Ok(eval(env, Value::Sexpr(items)))
}

/// (error "message") - raise a user error
pub(crate) fn builtin_error(args: Vec<Value>) -> Result<Value> {
    match single("error", args)? {
        Value::String(message) => Ok(Value::Error(message)),
        other => Err(Error::type_error("error", 0, "String", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;

    fn env() -> Env {
        let env = Env::new();
        register_builtins(&env);
        env
    }

    fn branch(n: i64) -> Value {
        Value::qexpr(vec![Value::number(n)])
    }

    #[test]
    fn test_if_selects_branch() {
        let env = env();
        assert_eq!(
            builtin_if(&env, vec![Value::bool(true), branch(1), branch(2)]),
            Ok(Value::number(1))
        );
        assert_eq!(
            builtin_if(&env, vec![Value::bool(false), branch(1), branch(2)]),
            Ok(Value::number(2))
        );
    }

    #[test]
    fn test_if_does_not_evaluate_other_branch() {
        let env = env();
        let poisoned = Value::qexpr(vec![Value::symbol("undefined-thing")]);
        assert_eq!(
            builtin_if(&env, vec![Value::bool(true), branch(1), poisoned]),
            Ok(Value::number(1))
        );
    }

    #[test]
    fn test_if_rejects_numbers_as_conditions() {
        assert_eq!(
            builtin_if(&env(), vec![Value::number(1), branch(1), branch(2)]),
            Err(Error::type_error("if", 0, "Boolean", "Number"))
        );
        assert_eq!(
            builtin_if(&env(), vec![Value::bool(true), branch(1)]),
            Err(Error::arity("if", 3, 2))
        );
    }

    #[test]
    fn test_eval_runs_qexpr() {
        let code = Value::qexpr(vec![
            Value::symbol("+"),
            Value::number(1),
            Value::number(2),
        ]);
        assert_eq!(builtin_eval(&env(), vec![code]), Ok(Value::number(3)));
    }

    #[test]
    fn test_eval_type_error() {
        assert_eq!(
            builtin_eval(&env(), vec![Value::number(1)]),
            Err(Error::type_error("eval", 0, "Q-Expression", "Number"))
        );
    }

    #[test]
    fn test_error_builds_error_value() {
        assert_eq!(
            builtin_error(vec![Value::string("boom")]),
            Ok(Value::error("boom"))
        );
        assert_eq!(
            builtin_error(vec![Value::symbol("boom")]),
            Err(Error::type_error("error", 0, "String", "Symbol"))
        );
    }
}
