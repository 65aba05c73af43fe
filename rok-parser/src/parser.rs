// rok-parser - Parser for Rok
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent parser for Rok source code.
//!
//! Converts tokens into [`Node`] trees.

use std::fmt;

use crate::ast::{Delimiter, Node};
use crate::lexer::{Lexer, LexerError, Token};

/// Deepest nesting of `(` and `{` the parser accepts.
///
/// Readers, printers and comparisons of the resulting tree all recurse on
/// nesting, so the limit keeps them within the native stack.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The parser converts tokens into syntax tree nodes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        // Positions refer to the end of the current token.
        let line = lexer.line();
        let column = lexer.column();
        Ok(Parser {
            lexer,
            current,
            line,
            column,
            depth: 0,
        })
    }

    /// Parse a single form from the source.
    /// Returns None if at end of input.
    pub fn parse(&mut self) -> Result<Option<Node>, ParseError> {
        if matches!(self.current, Token::Eof) {
            return Ok(None);
        }
        let node = self.parse_form()?;
        Ok(Some(node))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    /// Parse a string and return the first form (convenience function).
    pub fn parse_str(source: &str) -> Result<Option<Node>, ParseError> {
        let mut parser = Parser::new(source)?;
        parser.parse()
    }

    /// Parse a string and return all forms (convenience function).
    pub fn parse_all_str(source: &str) -> Result<Vec<Node>, ParseError> {
        let mut parser = Parser::new(source)?;
        parser.parse_all()
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.lexer.next_token()?;
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column: self.column,
        }
    }

    fn parse_form(&mut self) -> Result<Node, ParseError> {
        match &self.current {
            Token::True => {
                self.advance()?;
                Ok(Node::Bool(true))
            }
            Token::False => {
                self.advance()?;
                Ok(Node::Bool(false))
            }
            Token::Number(_) | Token::String(_) | Token::Symbol(_) => {
                match self.advance()? {
                    Token::Number(text) => Ok(Node::Number(text)),
                    Token::String(text) => Ok(Node::Str(text)),
                    Token::Symbol(name) => Ok(Node::Symbol(name)),
                    other => Err(self.error(format!("Unexpected {}", other))),
                }
            }
            Token::LParen => self.parse_seq(Delimiter::Paren),
            Token::LBrace => self.parse_seq(Delimiter::Brace),
            Token::RParen => Err(self.error("Unexpected ')'".to_string())),
            Token::RBrace => Err(self.error("Unexpected '}'".to_string())),
            Token::Eof => Err(self.error("Unexpected end of input".to_string())),
        }
    }

    fn parse_seq(&mut self, delimiter: Delimiter) -> Result<Node, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "Expression too deeply nested (max depth: {})",
                MAX_NESTING_DEPTH
            )));
        }
        self.depth += 1;
        let result = self.parse_children(delimiter);
        self.depth -= 1;
        result
    }

    fn parse_children(&mut self, delimiter: Delimiter) -> Result<Node, ParseError> {
        self.advance()?; // consume opening delimiter
        let close = match delimiter {
            Delimiter::Paren => Token::RParen,
            Delimiter::Brace => Token::RBrace,
        };

        let mut children = Vec::new();
        loop {
            match &self.current {
                Token::Eof => {
                    let (_, close_char) = delimiter.chars();
                    return Err(self.error(format!("Expected '{}', found end of input", close_char)));
                }
                Token::RParen | Token::RBrace if self.current != close => {
                    return Err(self.error(format!("Mismatched '{}'", self.current)));
                }
                token if *token == close => break,
                _ => children.push(self.parse_form()?),
            }
        }

        self.advance()?; // consume closing delimiter
        Ok(Node::Seq {
            delimiter,
            children,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Node {
        Parser::parse_str(s).unwrap().unwrap()
    }

    #[test]
    fn test_atoms() {
        assert_eq!(parse("42"), Node::number("42"));
        assert_eq!(parse("-3"), Node::number("-3"));
        assert_eq!(parse("head"), Node::symbol("head"));
        assert_eq!(parse("\"hi\""), Node::string("hi"));
        assert_eq!(parse("true"), Node::Bool(true));
    }

    #[test]
    fn test_empty_sequences() {
        assert_eq!(parse("()"), Node::sexpr(vec![]));
        assert_eq!(parse("{}"), Node::qexpr(vec![]));
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            parse("(\\ {x y} {+ x y})"),
            Node::sexpr(vec![
                Node::symbol("\\"),
                Node::qexpr(vec![Node::symbol("x"), Node::symbol("y")]),
                Node::qexpr(vec![
                    Node::symbol("+"),
                    Node::symbol("x"),
                    Node::symbol("y")
                ]),
            ])
        );
    }

    #[test]
    fn test_parse_all() {
        let forms = Parser::parse_all_str("(def {x} 1) ; comment\n x").unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[1], Node::symbol("x"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Parser::parse_all_str("  ; nothing\n").unwrap(), vec![]);
        assert_eq!(Parser::parse_str("").unwrap(), None);
    }

    #[test]
    fn test_unclosed_paren() {
        let err = Parser::parse_str("(+ 1 2").unwrap_err();
        assert!(err.message.contains("Expected ')'"), "{}", err);
    }

    #[test]
    fn test_mismatched_delimiter() {
        let err = Parser::parse_str("(+ 1 2}").unwrap_err();
        assert!(err.message.contains("Mismatched"), "{}", err);
    }

    #[test]
    fn test_stray_closer() {
        assert!(Parser::parse_str(")").is_err());
        assert!(Parser::parse_all_str("1 }").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert!(Parser::parse_str(&nested(MAX_NESTING_DEPTH)).is_ok());

        let err = Parser::parse_str(&nested(MAX_NESTING_DEPTH + 1)).unwrap_err();
        assert!(err.message.contains("too deeply nested"), "{}", err);

        let err = Parser::parse_str(&nested(20_000)).unwrap_err();
        assert!(err.message.contains("too deeply nested"), "{}", err);
    }

    #[test]
    fn test_display_round_trip() {
        let source = "(def {add} (\\ {x y} {+ x y \"s\"}))";
        assert_eq!(parse(source).to_string(), source);
    }
}
