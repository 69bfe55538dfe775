use num_bigint::BigInt;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Location, Token},
        parser::core::{ParseResult, TokenStream, reserved, unexpected},
    },
};

/// Parses a dot-separated list of items until a closing token.
///
/// Used by array literals. It repeatedly calls `parse_item` to parse one
/// element, expecting either:
///
/// - a `.`, optionally followed by the closing token (trailing separator), or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := [ item ("." item)* "."? ]`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_dot_separated<'a, T>(
    tokens: &mut TokenStream<'a>,
    parse_item: impl Fn(&mut TokenStream<'a>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next_or_eof("a value")?;

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next_or_eof("'.' or the end of the list")? {
            (Token::Dot, _) => {
                if let Some((tok, _)) = tokens.peek()
                   && tok == closing
                {
                    tokens.next_or_eof("the end of the list")?;
                    break;
                }
            },
            (tok, _) if tok == closing => break,
            (tok, location) => {
                return Err(unexpected(tok, "'.' or the end of the list", *location));
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The reserved `print` spellings are rejected here, so they can never be
/// declared or referenced.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is a reserved word or not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>,
                                                       expected: &'static str)
                                                       -> ParseResult<String> {
    match tokens.next_or_eof(expected)? {
        (Token::Identifier(name), _) => Ok(name.clone()),
        (tok, location) => Err(reserved(tok, *location).unwrap_or_else(|| {
                                                               unexpected(tok, expected, *location)
                                                           })),
    }
}

/// Decodes an octal literal such as `0o17` into its integer value.
///
/// Literals are unbounded; the value is exact however many digits it has.
///
/// # Errors
/// Returns a `ParseError::InvalidToken` if `raw` is not `0o` followed by
/// octal digits, which the lexer never produces.
pub(in crate::interpreter::parser) fn decode_octal(raw: &str,
                                                   location: Location)
                                                   -> ParseResult<BigInt> {
    let digits = raw.get(2..).unwrap_or_default();

    BigInt::parse_bytes(digits.as_bytes(), 8).ok_or_else(|| ParseError::InvalidToken { slice:
                                                                                           raw.to_string(),
                                                                                       location })
}
