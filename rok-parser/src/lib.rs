// rok-parser - Lexer and parser for the Rok programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # rok-parser
//!
//! Lexer and parser for the Rok programming language.
//! Produces a read-only [`Node`] tree from source code strings.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Delimiter, Node};
pub use lexer::{Lexer, LexerError, Token};
pub use parser::{MAX_NESTING_DEPTH, ParseError, Parser};
