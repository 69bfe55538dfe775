use crate::{
    ast::{Operator, ValueNode},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream, reserved, unexpected},
            utils::{decode_octal, parse_dot_separated},
        },
    },
};

const VALUE: &str = "a value";

/// Parses one value.
///
/// The first token decides the form; no lookahead beyond it is needed.
///
/// Grammar: `value := OCTAL | STRING | array | expr | IDENT`
///
/// # Errors
/// Returns a `ParseError` if the next token cannot start a value, if the
/// value is a reserved word, or if a nested form is malformed.
pub fn parse_value(tokens: &mut TokenStream<'_>) -> ParseResult<ValueNode> {
    match tokens.next_or_eof(VALUE)? {
        (Token::Octal(raw), location) => Ok(ValueNode::Number { raw:   raw.clone(),
                                                                value: decode_octal(raw,
                                                                                    *location)?, }),
        (Token::Str(body), _) => Ok(ValueNode::Str(body.clone())),
        (Token::Identifier(name), _) => Ok(ValueNode::NameRef(name.clone())),
        (Token::LBrace, _) => parse_array(tokens),
        (Token::LBracket, _) => parse_const_expr(tokens),
        (tok, location) => {
            Err(reserved(tok, *location).unwrap_or_else(|| unexpected(tok, VALUE, *location)))
        },
    }
}

/// Parses an array literal of the form `{ v1. v2. ... vN. }`.
///
/// Members are separated by `.`; a trailing `.` is allowed and `{}` is the
/// empty array.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `{`.
fn parse_array(tokens: &mut TokenStream<'_>) -> ParseResult<ValueNode> {
    let items = parse_dot_separated(tokens, parse_value, &Token::RBrace)?;

    Ok(ValueNode::Array(items))
}

/// Parses an operator expression of the form `[op v1 v2 ...]`.
///
/// `print()` is recorded as [`Operator::Print`], the same as `print`. At
/// least one operand is required; arity beyond that is checked during
/// evaluation.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `[`.
fn parse_const_expr(tokens: &mut TokenStream<'_>) -> ParseResult<ValueNode> {
    let op = match tokens.next_or_eof("an operator")? {
        (Token::Plus, _) => Operator::Add,
        (Token::Minus, _) => Operator::Sub,
        (Token::Star, _) => Operator::Mul,
        (Token::Slash, _) => Operator::Div,
        (Token::Print | Token::PrintCall, _) => Operator::Print,
        (tok, location) => return Err(unexpected(tok, "an operator", *location)),
    };

    let mut args = vec![parse_value(tokens)?];
    loop {
        match tokens.peek() {
            Some((Token::RBracket, _)) => {
                tokens.next_or_eof("']'")?;
                break;
            },
            Some(_) => args.push(parse_value(tokens)?),
            None => return Err(tokens.end_of_input("']'")),
        }
    }

    Ok(ValueNode::ConstExpr { op, args })
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::ParseError,
        interpreter::{lexer::tokenize, parser::core::parse},
    };

    fn value(source: &str) -> ParseResult<ValueNode> {
        let tokens = tokenize(source)?;
        parse_value(&mut TokenStream::new(&tokens))
    }

    fn number(raw: &str, value: i64) -> ValueNode {
        ValueNode::Number { raw:   raw.to_string(),
                            value: BigInt::from(value), }
    }

    #[test]
    fn octal_literals_keep_raw_text() {
        assert_eq!(value("0o12"), Ok(number("0o12", 10)));
        assert_eq!(value("0O10"), Ok(number("0O10", 8)));
        assert_eq!(value("0o0007"), Ok(number("0o0007", 7)));
    }

    #[test]
    fn arrays_accept_optional_trailing_dot() {
        let expected = ValueNode::Array(vec![number("0o1", 1), number("0o2", 2)]);
        assert_eq!(value("{ 0o1. 0o2. }"), Ok(expected.clone()));
        assert_eq!(value("{ 0o1. 0o2 }"), Ok(expected));
        assert_eq!(value("{}"), Ok(ValueNode::Array(vec![])));
    }

    #[test]
    fn arrays_reject_bare_separator() {
        assert!(matches!(value("{ . }"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(value("{ 0o1 0o2 }"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(value("{ 0o1.. }"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn print_call_spelling_is_normalized() {
        let expected = ValueNode::ConstExpr { op:   Operator::Print,
                                              args: vec![ValueNode::NameRef("x".to_string())], };
        assert_eq!(value("[print() x]"), Ok(expected.clone()));
        assert_eq!(value("[print x]"), Ok(expected));
    }

    #[test]
    fn expressions_need_an_operator_and_an_operand() {
        assert!(matches!(value("[+]"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(value("[0o1 0o2]"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(value("[+ 0o1"), Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn reserved_words_are_not_values() {
        assert!(matches!(value("print"),
                         Err(ParseError::ReservedWord { word: "print", .. })));
        assert!(matches!(parse("print := 0o1;"),
                         Err(ParseError::ReservedWord { word: "print", .. })));
    }

    #[test]
    fn long_literals_decode_exactly() {
        let Ok(ValueNode::Number { value: n, .. }) = value("0o1000000000000000000000") else {
            panic!("expected a number");
        };
        assert_eq!(n, BigInt::from(1_u64 << 63));

        let Ok(ValueNode::Number { value: n, .. }) = value("0o7777777777777777777777777") else {
            panic!("expected a number");
        };
        assert_eq!(n.to_str_radix(8), "7777777777777777777777777");
    }
}
