// rok-parser - Syntax tree for Rok
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Syntax tree produced by the parser.
//!
//! Nodes are read-only: the evaluator converts them into runtime values and
//! never mutates the tree.

use std::fmt;

/// The bracket pair that delimited a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `( ... )`, evaluated when read.
    Paren,
    /// `{ ... }`, inert data.
    Brace,
}

impl Delimiter {
    /// Opening and closing characters.
    pub fn chars(self) -> (char, char) {
        match self {
            Delimiter::Paren => ('(', ')'),
            Delimiter::Brace => ('{', '}'),
        }
    }
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Number literal, kept as source text.
    Number(String),
    Symbol(String),
    /// String literal with escapes already resolved.
    Str(String),
    Bool(bool),
    Seq {
        delimiter: Delimiter,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn number(text: impl Into<String>) -> Self {
        Node::Number(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::Str(text.into())
    }

    pub fn sexpr(children: Vec<Node>) -> Self {
        Node::Seq {
            delimiter: Delimiter::Paren,
            children,
        }
    }

    pub fn qexpr(children: Vec<Node>) -> Self {
        Node::Seq {
            delimiter: Delimiter::Brace,
            children,
        }
    }

    /// Short name of the node kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Number(_) => "number",
            Node::Symbol(_) => "symbol",
            Node::Str(_) => "string",
            Node::Bool(_) => "boolean",
            Node::Seq {
                delimiter: Delimiter::Paren,
                ..
            } => "sexpr",
            Node::Seq {
                delimiter: Delimiter::Brace,
                ..
            } => "qexpr",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(text) | Node::Symbol(text) => write!(f, "{}", text),
            Node::Str(text) => write!(f, "{:?}", text),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Seq {
                delimiter,
                children,
            } => {
                let (open, close) = delimiter.chars();
                write!(f, "{}", open)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "{}", close)
            }
        }
    }
}
