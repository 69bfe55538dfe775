use std::{iter::Peekable, slice::Iter};

use tracing::debug;

use crate::{
    ast::Declaration,
    error::ParseError,
    interpreter::{
        lexer::{Location, Token, Tokens, tokenize},
        parser::statement::parse_declaration,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A forward-only cursor over located tokens with one token of lookahead.
///
/// The parser never backtracks; every decision is taken from [`peek`]
/// alone.
///
/// [`peek`]: TokenStream::peek
pub struct TokenStream<'a> {
    iter: Peekable<Iter<'a, (Token, Location)>>,
    eof:  Location,
}

impl<'a> TokenStream<'a> {
    /// Creates a cursor positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a Tokens) -> Self {
        Self { iter: tokens.items.iter().peekable(),
               eof:  tokens.eof, }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a (Token, Location)> {
        self.iter.peek().copied()
    }

    /// Consumes and returns the next token, or fails at end of input.
    pub fn next_or_eof(&mut self, expected: &'static str) -> ParseResult<&'a (Token, Location)> {
        self.iter.next().ok_or_else(|| self.end_of_input(expected))
    }

    /// Builds the error for input that stops while `expected` is still due.
    #[must_use]
    pub const fn end_of_input(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedEndOfInput { expected,
                                           location: self.eof }
    }

    /// Consumes the next token if it equals `token`, failing otherwise.
    pub fn expect(&mut self, token: &Token, expected: &'static str) -> ParseResult<Location> {
        match self.next_or_eof(expected)? {
            (tok, location) if tok == token => Ok(*location),
            (tok, location) => Err(unexpected(tok, expected, *location)),
        }
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&mut self) -> bool {
        self.iter.peek().is_none()
    }
}

/// Builds the error for a token the grammar does not allow at this point.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: &'static str,
                                                 location: Location)
                                                 -> ParseError {
    ParseError::UnexpectedToken { found: token.to_string(),
                                  expected,
                                  location }
}

/// Builds the error for a reserved spelling used as a name or value.
pub(in crate::interpreter::parser) fn reserved(token: &Token,
                                               location: Location)
                                               -> Option<ParseError> {
    let word = match token {
        Token::Print => "print",
        Token::PrintCall => "print()",
        _ => return None,
    };

    Some(ParseError::ReservedWord { word, location })
}

/// Parses a complete program.
///
/// This is the entry point for parsing. The source is tokenized in full
/// first, then declarations are read until the tokens run out.
///
/// Grammar: `program := declaration*`
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no declarations are
/// returned for malformed input.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use octconf::{
///     ast::{Declaration, ValueNode},
///     interpreter::parser::core::parse,
/// };
///
/// let program = parse("port := 0o12;").unwrap();
///
/// assert_eq!(program,
///            vec![Declaration { name:  "port".to_string(),
///                               value: ValueNode::Number { raw:   "0o12".to_string(),
///                                                          value: BigInt::from(10), }, }]);
/// ```
pub fn parse(source: &str) -> ParseResult<Vec<Declaration>> {
    let tokens = tokenize(source)?;
    let mut stream = TokenStream::new(&tokens);

    let mut declarations = Vec::new();
    while !stream.is_empty() {
        declarations.push(parse_declaration(&mut stream)?);
    }

    debug!(tokens = tokens.items.len(),
           declarations = declarations.len(),
           "parsed program");
    Ok(declarations)
}
