use crate::{
    ast::Declaration,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            utils::parse_identifier,
            value::parse_value,
        },
    },
};

/// Parses a single declaration.
///
/// A declaration has the form `<identifier> := <value> ;`. The identifier
/// must not be a reserved spelling; the value may be any value form,
/// including nested arrays and expressions.
///
/// Grammar: `declaration := IDENT ":=" value ";"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the declared name.
///
/// # Returns
/// The parsed [`Declaration`].
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing or reserved,
/// - `:=` or `;` is missing,
/// - the value is malformed,
/// - input ends unexpectedly.
pub fn parse_declaration(tokens: &mut TokenStream<'_>) -> ParseResult<Declaration> {
    let name = parse_identifier(tokens, "a constant name")?;
    tokens.expect(&Token::Define, "':='")?;
    let value = parse_value(tokens)?;
    tokens.expect(&Token::Semicolon, "';'")?;

    Ok(Declaration { name, value })
}
