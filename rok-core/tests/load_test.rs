// rok-core - Load integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for loading source files.

mod common;

use std::fs;
use std::path::PathBuf;

use common::*;

/// Write `source` to a uniquely named file in the temp directory.
fn temp_source(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rok-{}-{}.rok", name, std::process::id()));
    fs::write(&path, source).expect("write temp source");
    path
}

#[test]
fn test_load_defines_into_root() {
    let path = temp_source(
        "defs",
        "; library\n(def {lib-x} 41)\n(fun {lib-inc n} {+ n 1})\n",
    );
    let session = Session::new().expect("prelude should load");

    assert_eq!(session.load_file(&path), Value::unit());
    assert_eq!(session.eval_str("lib-inc lib-x"), Value::number(42));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_continues_after_failing_form() {
    let path = temp_source("partial", "(def {before} 1)\n(head {})\n(def {after} 2)\n");
    let session = Session::bare();

    assert_eq!(session.load_file(&path), Value::unit());
    assert_eq!(session.eval_str("+ before after"), Value::number(3));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_from_inside_function_targets_root() {
    let path = temp_source("nested", "(= {loaded} true)\n");
    let session = Session::bare();
    let code = format!("((\\ {{p}} {{load p}}) \"{}\")", path.display());

    assert_eq!(session.eval_str(&code), Value::unit());
    assert_eq!(session.eval_str("loaded"), Value::bool(true));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_missing_file_is_error() {
    let session = Session::bare();
    let result = session.load_file("/no/such/dir/missing.rok");
    let Value::Error(message) = result else {
        panic!("expected error, got {}", result);
    };
    assert!(
        message.starts_with("Could not load Library /no/such/dir/missing.rok"),
        "unexpected message: {}",
        message
    );
}

#[test]
fn test_load_parse_error_is_error() {
    let path = temp_source("broken", "(def {x} 1\n");
    let session = Session::bare();

    let result = session.load_file(&path);
    let Value::Error(message) = result else {
        panic!("expected error, got {}", result);
    };
    assert!(message.starts_with("Could not load Library"), "{}", message);
    assert!(!session.env().is_defined(&Symbol::new("x")));

    fs::remove_file(path).ok();
}

#[test]
fn test_load_requires_string() {
    assert_eval_err!(
        "(load 1)",
        "Function 'load' passed incorrect type for argument 0. Got Number, Expected String."
    );
}
