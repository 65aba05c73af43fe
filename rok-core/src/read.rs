// rok-core - Conversion from syntax tree to values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Turns parsed [`Node`]s into unevaluated [`Value`]s.

use rok_parser::{Delimiter, Node};

use crate::error::Error;
use crate::value::Value;

/// Convert one syntax node into a value.
///
/// A number literal outside the integer range becomes an error value in
/// place, so the surrounding expression reports it when evaluated.
pub fn read(node: &Node) -> Value {
    match node {
        Node::Number(text) => text
            .parse::<i64>()
            .map(Value::Number)
            .unwrap_or_else(|_| Error::InvalidNumber.into()),
        Node::Symbol(name) => Value::symbol(name),
        Node::Str(text) => Value::string(text.as_str()),
        Node::Bool(b) => Value::Bool(*b),
        Node::Seq {
            delimiter: Delimiter::Paren,
            children,
        } => Value::sexpr(children.iter().map(read)),
        Node::Seq {
            delimiter: Delimiter::Brace,
            children,
        } => Value::qexpr(children.iter().map(read)),
    }
}

/// Wrap a whole unit of input as one S-Expression.
///
/// `+ 1 2` typed at the prompt therefore means `(+ 1 2)`, and a line
/// holding a single form evaluates to that form.
pub fn read_program(nodes: &[Node]) -> Value {
    Value::sexpr(nodes.iter().map(read))
}
