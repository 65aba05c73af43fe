// rok-core - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers and utilities for Rok integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`eval_str`] - Evaluate forms in a fresh session with builtins only
//! - [`eval_str_with_prelude`] - Evaluate forms in a fresh session with the prelude
//! - [`eval_all`] - Evaluate every form in an existing session, returning the last
//! - [`render`] - Evaluate with the prelude and render the result
//!
//! # Macros
//!
//! - [`assert_eval!`] - Assert that code renders as an expected string
//! - [`assert_eval_err!`] - Assert that code produces a given error message

#[allow(unused_imports)]
pub use rok_core::{Env, Session, Symbol, Value};

/// Evaluate every top-level form in a fresh session with builtins only.
///
/// # Returns
///
/// The value of the last form, or `()` for empty input.
#[must_use]
#[allow(dead_code)]
pub fn eval_str(s: &str) -> Value {
    eval_all(s, &Session::bare())
}

/// Evaluate every top-level form in a fresh session with the prelude loaded.
///
/// # Panics
///
/// Panics if the prelude fails to load.
#[must_use]
#[allow(dead_code)]
pub fn eval_str_with_prelude(s: &str) -> Value {
    let session = Session::new().expect("prelude should load");
    eval_all(s, &session)
}

/// Evaluate every top-level form of `s` in `session`, returning the last.
#[must_use]
#[allow(dead_code)]
pub fn eval_all(s: &str, session: &Session) -> Value {
    session.eval_forms(s).pop().unwrap_or_else(Value::unit)
}

/// Evaluate with the prelude and render the result as the REPL would.
#[must_use]
#[allow(dead_code)]
pub fn render(s: &str) -> String {
    eval_str_with_prelude(s).to_string()
}

/// Assert that evaluating `input` (prelude loaded) renders as `expected`.
///
/// # Example
///
/// ```ignore
/// assert_eval!("(+ 1 2)", "3");
/// ```
#[macro_export]
macro_rules! assert_eval {
    ($input:expr, $expected:expr) => {
        assert_eq!(
            $crate::common::render($input),
            $expected,
            "Evaluation of '{}' did not match expected",
            $input
        );
    };
}

/// Assert that evaluating `input` (prelude loaded) is an error with `message`.
///
/// # Example
///
/// ```ignore
/// assert_eval_err!("(/ 1 0)", "Division By Zero!");
/// ```
#[macro_export]
macro_rules! assert_eval_err {
    ($input:expr, $message:expr) => {
        let result = $crate::common::eval_str_with_prelude($input);
        assert_eq!(
            result,
            $crate::common::Value::error($message),
            "Expected error for '{}'",
            $input
        );
    };
}
