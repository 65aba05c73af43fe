// rok-core - Error types for the Rok evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Rok evaluation.
//!
//! Builtins report failures as [`Error`]; the calling convention turns them
//! into [`Value::Error`](crate::Value::Error) so the language only ever sees
//! errors as values.

use std::fmt;

use crate::symbol::Symbol;

/// Result type for Rok evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Symbol not bound anywhere in the environment chain
    UnboundSymbol(Symbol),
    /// Wrong number of arguments to a builtin
    Arity {
        name: &'static str,
        expected: AritySpec,
        got: usize,
    },
    /// Argument of the wrong type
    Type {
        name: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
    /// Empty Q-Expression where at least one element is required
    EmptyList { name: &'static str, index: usize },
    /// First element of an S-Expression is not a function
    NotCallable(&'static str),
    /// Lambda called with more arguments than it has formals
    TooManyArguments { expected: usize, got: usize },
    /// Definition target that is not a symbol
    NonSymbol {
        name: &'static str,
        got: &'static str,
    },
    /// Symbol list and value list of `def`/`=` differ in length
    SymbolCount {
        name: &'static str,
        symbols: usize,
        values: usize,
    },
    DivisionByZero,
    /// Integer overflow in an arithmetic operator
    Overflow(&'static str),
    NegativeExponent,
    /// `&` not followed by exactly one symbol
    InvalidVariadic,
    /// Number literal outside the integer range
    InvalidNumber,
    /// `load` could not read or parse its file
    Load(String),
    /// Writing to standard output failed
    Io(String),
    /// A prelude form evaluated to an error
    Prelude(String),
    /// Evaluation nested deeper than the configured maximum
    DepthExceeded(usize),
}

/// Specification for expected arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnboundSymbol(sym) => write!(f, "Unbound Symbol '{}'", sym),
            Error::Arity {
                name,
                expected,
                got,
            } => write!(
                f,
                "Function '{}' passed incorrect number of arguments. Got {}, Expected {}.",
                name, got, expected
            ),
            Error::Type {
                name,
                index,
                expected,
                got,
            } => write!(
                f,
                "Function '{}' passed incorrect type for argument {}. Got {}, Expected {}.",
                name, index, got, expected
            ),
            Error::EmptyList { name, index } => {
                write!(f, "Function '{}' passed {{}} for argument {}.", name, index)
            }
            Error::NotCallable(got) => write!(
                f,
                "S-Expression starts with incorrect type. Got {}, Expected Function.",
                got
            ),
            Error::TooManyArguments { expected, got } => write!(
                f,
                "Function passed too many arguments. Got {}, Expected {}.",
                got, expected
            ),
            Error::NonSymbol { name, got } => write!(
                f,
                "Function '{}' cannot define non-symbol. Got {}, Expected Symbol.",
                name, got
            ),
            Error::SymbolCount {
                name,
                symbols,
                values,
            } => write!(
                f,
                "Function '{}' passed mismatched symbols and values. Got {} values, Expected {}.",
                name, values, symbols
            ),
            Error::DivisionByZero => write!(f, "Division By Zero!"),
            Error::Overflow(op) => write!(f, "Integer overflow in '{}'", op),
            Error::NegativeExponent => write!(f, "Function '^' passed a negative exponent."),
            Error::InvalidVariadic => write!(
                f,
                "Function format invalid. Symbol '&' not followed by single symbol."
            ),
            Error::InvalidNumber => write!(f, "invalid number"),
            Error::Load(detail) => write!(f, "Could not load Library {}", detail),
            Error::Io(detail) => write!(f, "Output error: {}", detail),
            Error::Prelude(detail) => write!(f, "Failed to load prelude: {}", detail),
            Error::DepthExceeded(max) => write!(
                f,
                "Stack overflow: maximum recursion depth ({}) exceeded",
                max
            ),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create an arity error for exact arity.
    pub fn arity(name: &'static str, expected: usize, got: usize) -> Self {
        Error::Arity {
            name,
            expected: AritySpec::Exact(expected),
            got,
        }
    }

    /// Create an arity error for minimum arity.
    pub fn arity_at_least(name: &'static str, expected: usize, got: usize) -> Self {
        Error::Arity {
            name,
            expected: AritySpec::AtLeast(expected),
            got,
        }
    }

    /// Create a type error for argument `index` of builtin `name`.
    pub fn type_error(
        name: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::Type {
            name,
            index,
            expected,
            got,
        }
    }
}
