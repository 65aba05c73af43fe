// rok-core - Parse-evaluate entry point
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The [`Session`] ties the parser to the evaluator.

use std::path::Path;

use rok_parser::Parser;

use crate::builtins::{Builtin, register_builtins};
use crate::env::Env;
use crate::error::Result;
use crate::init_prelude;
use crate::read::{read, read_program};
use crate::value::Value;

/// A root environment plus the operations that feed source text into it.
///
/// Bindings made by one call are visible to the next. A failing input
/// yields an error value and leaves earlier bindings intact.
///
/// `Session` is not thread-safe: values and environments are reference
/// counted with `Rc`.
///
/// # Example
///
/// ```rust
/// use rok_core::Session;
///
/// let session = Session::new().unwrap();
/// session.eval_str("def {x} 20");
/// assert_eq!(session.eval_str("+ x 1").to_string(), "21");
/// ```
pub struct Session {
    env: Env,
}

impl Session {
    /// Create a session with the builtins and the prelude loaded.
    pub fn new() -> Result<Self> {
        let session = Session::bare();
        init_prelude(&session.env)?;
        Ok(session)
    }

    /// Create a session with only the builtins.
    pub fn bare() -> Self {
        let env = Env::new();
        register_builtins(&env);
        Session { env }
    }

    /// The root environment.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluate one unit of input, treating the whole text as a single
    /// S-Expression. A parse failure is returned as an error value.
    pub fn eval_str(&self, source: &str) -> Value {
        let result = match Parser::parse_all_str(source) {
            Ok(nodes) => crate::eval(&self.env, read_program(&nodes)),
            Err(e) => Value::error(e.to_string()),
        };
        if let Value::Error(message) = &result {
            tracing::debug!(error = %message, "input evaluated to an error");
        }
        result
    }

    /// Evaluate every top-level form of `source` separately, returning each
    /// result in order.
    pub fn eval_forms(&self, source: &str) -> Vec<Value> {
        match Parser::parse_all_str(source) {
            Ok(nodes) => nodes
                .iter()
                .map(|node| crate::eval(&self.env, read(node)))
                .collect(),
            Err(e) => vec![Value::error(e.to_string())],
        }
    }

    /// Evaluate a file through the `load` builtin.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Value {
        let path = path.as_ref().to_string_lossy().into_owned();
        Builtin::Load.call(&self.env, vec![Value::String(path)])
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::bare()
    }
}
