// rok-core - I/O built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! I/O operations: print, load

use std::fs;
use std::io::{self, Write};

use rok_parser::Parser;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::eval::eval;
use crate::read::read;
use crate::value::Value;

use super::single;

/// (print a b ...) - write the arguments separated by spaces, then a newline
pub(crate) fn builtin_print(args: Vec<Value>) -> Result<Value> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_line(&mut out, &args).map_err(|e| Error::Io(e.to_string()))?;
    Ok(Value::unit())
}

fn write_line(out: &mut impl Write, args: &[Value]) -> io::Result<()> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", arg)?;
    }
    writeln!(out)?;
    out.flush()
}

/// (load "file.rok") - evaluate every form of a file in the root environment
pub(crate) fn builtin_load(env: &Env, args: Vec<Value>) -> Result<Value> {
    let path = match single("load", args)? {
        Value::String(path) => path,
        other => return Err(Error::type_error("load", 0, "String", other.type_name())),
    };

    let source = fs::read_to_string(&path).map_err(|e| Error::Load(format!("{}: {}", path, e)))?;
    let forms = Parser::parse_all_str(&source).map_err(|e| Error::Load(e.to_string()))?;
    tracing::debug!(path = %path, forms = forms.len(), "loading file");

    let root = env.root();
    for form in &forms {
        let result = eval(&root, read(form));
        if let Value::Error(_) = result {
            tracing::debug!(path = %path, error = %result, "form in loaded file failed");
            println!("{}", result);
        }
    }
    Ok(Value::unit())
}
