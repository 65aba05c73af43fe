// rok-core - Built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Built-in functions for Rok.
//!
//! Every builtin shares one calling convention: it receives the calling
//! environment and owns its already-evaluated argument list. Failures are
//! returned as [`Error`] and surface to the language as error values.

mod arithmetic;
mod comparison;
mod control;
mod definitions;
mod io;
mod lists;

use im::Vector;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::value::Value;

use arithmetic::ArithOp;
use comparison::OrderOp;

/// The fixed set of primitive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
    Ne,
    If,
    List,
    Eval,
    Join,
    Head,
    Tail,
    Len,
    Lambda,
    Def,
    Put,
    Error,
    Print,
    Load,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 25] = [
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::Pow,
        Builtin::Gt,
        Builtin::Ge,
        Builtin::Lt,
        Builtin::Le,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::If,
        Builtin::List,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Len,
        Builtin::Lambda,
        Builtin::Def,
        Builtin::Put,
        Builtin::Error,
        Builtin::Print,
        Builtin::Load,
    ];

    /// The symbol the builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::Pow => "^",
            Builtin::Gt => ">",
            Builtin::Ge => ">=",
            Builtin::Lt => "<",
            Builtin::Le => "<=",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::If => "if",
            Builtin::List => "list",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Len => "len",
            Builtin::Lambda => "\\",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Error => "error",
            Builtin::Print => "print",
            Builtin::Load => "load",
        }
    }

    /// Look a builtin up by its symbol.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Invoke the builtin, converting a failure into an error value.
    pub fn call(self, env: &Env, args: Vec<Value>) -> Value {
        self.invoke(env, args).unwrap_or_else(Value::from)
    }

    fn invoke(self, env: &Env, args: Vec<Value>) -> Result<Value> {
        match self {
            Builtin::Add => arithmetic::builtin_arith(ArithOp::Add, args),
            Builtin::Sub => arithmetic::builtin_arith(ArithOp::Sub, args),
            Builtin::Mul => arithmetic::builtin_arith(ArithOp::Mul, args),
            Builtin::Div => arithmetic::builtin_arith(ArithOp::Div, args),
            Builtin::Mod => arithmetic::builtin_arith(ArithOp::Mod, args),
            Builtin::Pow => arithmetic::builtin_arith(ArithOp::Pow, args),
            Builtin::Gt => comparison::builtin_order(OrderOp::Gt, args),
            Builtin::Ge => comparison::builtin_order(OrderOp::Ge, args),
            Builtin::Lt => comparison::builtin_order(OrderOp::Lt, args),
            Builtin::Le => comparison::builtin_order(OrderOp::Le, args),
            Builtin::Eq => comparison::builtin_eq(args),
            Builtin::Ne => comparison::builtin_ne(args),
            Builtin::If => control::builtin_if(env, args),
            Builtin::List => Ok(lists::builtin_list(args)),
            Builtin::Eval => control::builtin_eval(env, args),
            Builtin::Join => lists::builtin_join(args),
            Builtin::Head => lists::builtin_head(args),
            Builtin::Tail => lists::builtin_tail(args),
            Builtin::Len => lists::builtin_len(args),
            Builtin::Lambda => definitions::builtin_lambda(env, args),
            Builtin::Def => definitions::builtin_def(env, args),
            Builtin::Put => definitions::builtin_put(env, args),
            Builtin::Error => control::builtin_error(args),
            Builtin::Print => io::builtin_print(args),
            Builtin::Load => io::builtin_load(env, args),
        }
    }
}

/// Register all built-in functions in the given environment.
pub fn register_builtins(env: &Env) {
    for builtin in Builtin::ALL {
        env.define(Symbol::new(builtin.name()), Value::Builtin(builtin));
    }
}

// ============================================================================
// Argument checking helpers
// ============================================================================

/// Fail unless exactly `expected` arguments were passed.
pub(crate) fn require_arity(name: &'static str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(Error::arity(name, expected, args.len()))
    }
}

/// Take the contents of a Q-Expression argument.
pub(crate) fn require_qexpr(name: &'static str, index: usize, val: Value) -> Result<Vector<Value>> {
    match val {
        Value::Qexpr(items) => Ok(items),
        other => Err(Error::type_error(
            name,
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

/// Take the contents of a non-empty Q-Expression argument.
pub(crate) fn require_nonempty_qexpr(
    name: &'static str,
    index: usize,
    val: Value,
) -> Result<Vector<Value>> {
    let items = require_qexpr(name, index, val)?;
    if items.is_empty() {
        Err(Error::EmptyList { name, index })
    } else {
        Ok(items)
    }
}

/// Convert the elements of a Q-Expression into symbols.
pub(crate) fn require_symbols(name: &'static str, items: Vector<Value>) -> Result<Vec<Symbol>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Symbol(sym) => Ok(sym),
            other => Err(Error::NonSymbol {
                name,
                got: other.type_name(),
            }),
        })
        .collect()
}

/// Split a single-argument list into its argument.
pub(crate) fn single(name: &'static str, args: Vec<Value>) -> Result<Value> {
    require_arity(name, &args, 1)?;
    args.into_iter()
        .next()
        .ok_or_else(|| Error::arity(name, 1, 0))
}
