// rok-core - Runtime and evaluator for the Rok programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # rok-core
//!
//! Runtime and evaluator for the Rok programming language.
//! Provides the value model, lexical environments, a tree-walking
//! evaluator and the builtin functions.

pub mod builtins;
pub mod env;
pub mod error;
pub mod eval;
pub mod read;
pub mod session;
pub mod symbol;
pub mod value;

pub use builtins::{Builtin, register_builtins};
pub use env::Env;
pub use error::{AritySpec, Error, Result};
pub use eval::{apply, eval, get_eval_depth, get_max_eval_depth, set_max_eval_depth};
pub use read::{read, read_program};
pub use session::Session;
pub use symbol::Symbol;
pub use value::{Lambda, VARIADIC_MARKER, Value};

/// Embedded standard prelude, written in Rok.
const PRELUDE: &str = include_str!("prelude.rok");

/// Evaluate the prelude into the root of `env`.
///
/// Call this after `register_builtins`. The first form that evaluates to
/// an error aborts loading.
pub fn init_prelude(env: &Env) -> Result<()> {
    let forms = rok_parser::Parser::parse_all_str(PRELUDE)
        .map_err(|e| Error::Prelude(e.to_string()))?;

    let root = env.root();
    for form in &forms {
        if let Value::Error(message) = eval::eval(&root, read(form)) {
            return Err(Error::Prelude(message));
        }
    }
    Ok(())
}
