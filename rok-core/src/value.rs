// rok-core - Value types for Rok
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for Rok.
//!
//! `Value` is the central enum representing all Rok values. Sequences are
//! stored in persistent vectors, so cloning a value (for example when it is
//! bound into an environment) yields an independent copy without walking the
//! whole structure.

use std::fmt;
use std::rc::Rc;

use im::Vector;

use crate::builtins::Builtin;
use crate::env::Env;
use crate::error::Error;
use crate::symbol::Symbol;

/// Formal parameter that collects the remaining arguments into a Q-Expression.
pub const VARIADIC_MARKER: &str = "&";

/// A Rok runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Number(i64),
    /// A failed computation. Propagates through every operation that sees it.
    Error(String),
    Symbol(Symbol),
    String(String),
    Bool(bool),
    /// S-Expression: children are evaluated and the first is applied.
    Sexpr(Vector<Value>),
    /// Q-Expression: inert data, never evaluated implicitly.
    Qexpr(Vector<Value>),
    Builtin(Builtin),
    Lambda(Rc<Lambda>),
}

/// A user-defined function together with the environment it closes over.
///
/// `bound` holds the arguments already supplied by partial application.
/// They are re-bound into a fresh frame on every call, so assignments made
/// by one call never reach the next.
#[derive(Debug)]
pub struct Lambda {
    pub formals: Vec<Symbol>,
    pub body: Vector<Value>,
    pub env: Env,
    pub bound: Vec<(Symbol, Value)>,
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn sexpr(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Sexpr(items.into_iter().collect())
    }

    pub fn qexpr(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Qexpr(items.into_iter().collect())
    }

    /// The empty S-Expression `()`, returned by side-effecting builtins.
    pub fn unit() -> Self {
        Value::Sexpr(Vector::new())
    }

    pub fn lambda(formals: Vec<Symbol>, body: Vector<Value>, env: Env) -> Self {
        Value::partial(formals, body, env, Vec::new())
    }

    /// A lambda with some of its arguments already supplied.
    pub fn partial(
        formals: Vec<Symbol>,
        body: Vector<Value>,
        env: Env,
        bound: Vec<(Symbol, Value)>,
    ) -> Self {
        Value::Lambda(Rc::new(Lambda {
            formals,
            body,
            env,
            bound,
        }))
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Name of the value's type as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::Bool(_) => "Boolean",
            Value::Sexpr(_) => "S-Expression",
            Value::Qexpr(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Lambda(_))
    }

    /// Element count of a sequence, `None` for atoms.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Sexpr(items) | Value::Qexpr(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Turn a Q-Expression into an S-Expression so it can be evaluated.
    /// Other values are returned unchanged.
    #[must_use]
    pub fn into_sexpr(self) -> Self {
        match self {
            Value::Qexpr(items) => Value::Sexpr(items),
            other => other,
        }
    }

    /// Turn an S-Expression into inert data. Other values are returned unchanged.
    #[must_use]
    pub fn into_qexpr(self) -> Self {
        match self {
            Value::Sexpr(items) => Value::Qexpr(items),
            other => other,
        }
    }
}

impl From<Error> for Value {
    fn from(e: Error) -> Self {
        Value::Error(e.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Structural equality.
///
/// Lambdas compare by formals, body and supplied arguments; their captured
/// environments are ignored. Builtins compare by operation. A builtin never
/// equals a lambda.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Sexpr(a), Value::Sexpr(b)) | (Value::Qexpr(a), Value::Qexpr(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Lambda(a), Value::Lambda(b)) => {
                Rc::ptr_eq(a, b)
                    || (a.formals == b.formals && a.body == b.body && a.bound == b.bound)
            }
            _ => false,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Sexpr(items) => write_seq(f, '(', items.iter(), ')'),
            Value::Qexpr(items) => write_seq(f, '{', items.iter(), '}'),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda(lambda) => {
                write!(f, "(\\ ")?;
                write_seq(f, '{', lambda.formals.iter(), '}')?;
                write!(f, " ")?;
                write_seq(f, '{', lambda.body.iter(), '}')?;
                write!(f, ")")
            }
        }
    }
}

fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    open: char,
    items: impl Iterator<Item = T>,
    close: char,
) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

/// Escape quotes, backslashes and control characters for printing.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0B' => out.push_str("\\v"),
            '\x0C' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}
