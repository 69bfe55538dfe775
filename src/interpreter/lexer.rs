use logos::{FilterResult, Lexer, Logos};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexError)]
pub enum Token {
    /// Octal literal tokens such as `0o17` or `0O7`, kept as written.
    #[regex(r"0[oO][0-7]+", |lex| lex.slice().to_string())]
    Octal(String),
    /// String literal `q(...)`. Holds the body between the parentheses.
    #[token("q(", lex_string)]
    Str(String),
    /// Identifier tokens; constant names such as `port` or `max_conn`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", lex_identifier)]
    Identifier(String),
    /// `print()`
    #[token("print()")]
    PrintCall,
    /// `print`
    #[token("print")]
    Print,
    /// ```text
    /// =begin
    /// Block comments.
    /// =cut
    /// ```
    #[token("=begin", skip_block_comment)]
    BlockComment,
    /// `:=`
    #[token(":=")]
    Define,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `.`
    #[token(".")]
    Dot,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Octal(raw) => write!(f, "number '{raw}'"),
            Self::Str(body) => write!(f, "string 'q({body})'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::PrintCall => write!(f, "'print()'"),
            Self::Print => write!(f, "'print'"),
            Self::BlockComment => write!(f, "comment"),
            Self::Define => write!(f, "':='"),
            Self::Semicolon => write!(f, "';'"),
            Self::Dot => write!(f, "'.'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::LBracket => write!(f, "'['"),
            Self::RBracket => write!(f, "']'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
        }
    }
}

/// Failures raised while cutting the source into tokens.
///
/// These carry no position; [`tokenize`] attaches one when converting them
/// into a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// Input that starts no token.
    #[default]
    InvalidToken,
    /// `q(` without a closing `)`.
    UnterminatedString,
    /// `=begin` without a following `=cut`.
    UnterminatedComment,
    /// An identifier written directly before `(`.
    CallSyntax(String),
}

/// A 1-based position in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column in characters, starting at 1.
    pub column: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The token sequence of one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    /// Every token paired with the position of its first character.
    pub items: Vec<(Token, Location)>,
    /// Position just past the last character of the source.
    pub eof:   Location,
}

/// Maps byte offsets to line/column positions.
struct LineIndex<'src> {
    source:      &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0).chain(source.match_indices('\n')
                                                         .map(|(i, _)| i + 1))
                                            .collect();
        Self { source, line_starts }
    }

    fn locate(&self, offset: usize) -> Location {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        let column = self.source[start..offset].chars().count() + 1;

        Location { line, column }
    }
}

/// Splits the source into tokens, attaching a location to each.
///
/// Whitespace and block comments are dropped here, so the parser never
/// sees them.
///
/// # Errors
/// Returns a [`ParseError`] at the offending position for unrecognized
/// input, unterminated strings or comments, and identifiers followed by `(`.
///
/// # Example
/// ```
/// use octconf::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("port := 0o12;").unwrap();
/// let kinds: Vec<_> = tokens.items.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("port".to_string()),
///                 Token::Define,
///                 Token::Octal("0o12".to_string()),
///                 Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Tokens, ParseError> {
    let index = LineIndex::new(source);
    let mut items = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let location = index.locate(lexer.span().start);
        match token {
            Ok(tok) => items.push((tok, location)),
            Err(e) => return Err(lex_error(e, lexer.slice(), location)),
        }
    }

    Ok(Tokens { items,
                eof: index.locate(source.len()) })
}

fn lex_error(error: LexError, slice: &str, location: Location) -> ParseError {
    match error {
        LexError::InvalidToken => ParseError::InvalidToken { slice: slice.to_string(),
                                                             location },
        LexError::UnterminatedString => ParseError::UnterminatedString { location },
        LexError::UnterminatedComment => ParseError::UnterminatedComment { location },
        LexError::CallSyntax(name) => ParseError::CallSyntax { name, location },
    }
}

/// Consumes a string body up to the first `)`.
///
/// The body is taken verbatim; there are no escape sequences.
fn lex_string(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let Some(end) = lex.remainder().find(')') else {
        return Err(LexError::UnterminatedString);
    };
    let body = lex.remainder()[..end].to_string();
    lex.bump(end + 1);

    Ok(body)
}

/// Accepts an identifier unless it is written like a call.
fn lex_identifier(lex: &mut Lexer<Token>) -> Result<String, LexError> {
    let name = lex.slice().to_string();
    if lex.remainder().starts_with('(') {
        return Err(LexError::CallSyntax(name));
    }

    Ok(name)
}

/// Skips everything up to and including the first `=cut`.
fn skip_block_comment(lex: &mut Lexer<Token>) -> FilterResult<(), LexError> {
    const CLOSE: &str = "=cut";

    match lex.remainder().find(CLOSE) {
        Some(end) => {
            lex.bump(end + CLOSE.len());
            FilterResult::Skip
        },
        None => FilterResult::Error(LexError::UnterminatedComment),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .items
                        .into_iter()
                        .map(|(tok, _)| tok)
                        .collect()
    }

    #[test]
    fn strings_keep_their_body_verbatim() {
        assert_eq!(kinds("q( two  words )"),
                   vec![Token::Str(" two  words ".to_string())]);
        assert_eq!(kinds("q()"), vec![Token::Str(String::new())]);
        assert_eq!(kinds("q(a\nb)"), vec![Token::Str("a\nb".to_string())]);
    }

    #[test]
    fn print_spellings_are_reserved() {
        assert_eq!(kinds("print print() printer"),
                   vec![Token::Print,
                        Token::PrintCall,
                        Token::Identifier("printer".to_string())]);
    }

    #[test]
    fn block_comments_are_skipped_non_greedily() {
        let source = "=begin\n a := 0o1;\n=cut x =begin y =cut";
        assert_eq!(kinds(source), vec![Token::Identifier("x".to_string())]);
    }

    #[test]
    fn locations_are_one_based() {
        let tokens = tokenize("a := 0o1;\n  b := a;").unwrap();
        let (tok, location) = &tokens.items[4];

        assert_eq!(tok, &Token::Identifier("b".to_string()));
        assert_eq!(*location, Location { line: 2, column: 3 });
        assert_eq!(tokens.eof, Location { line: 2, column: 10 });
    }

    #[test]
    fn locations_after_multiline_comment() {
        let tokens = tokenize("=begin\n\n=cut  z").unwrap();
        assert_eq!(tokens.items[0].1, Location { line: 3, column: 7 });
    }

    #[test]
    fn lexical_errors_carry_positions() {
        assert!(matches!(tokenize("a := q(open"),
                         Err(ParseError::UnterminatedString { location: Location { line: 1, column: 6 } })));
        assert!(matches!(tokenize("=begin never closed"),
                         Err(ParseError::UnterminatedComment { .. })));
        assert!(matches!(tokenize("a := f(0o1);"),
                         Err(ParseError::CallSyntax { ref name, .. }) if name == "f"));
        assert!(matches!(tokenize("a := 0o9;"),
                         Err(ParseError::InvalidToken { .. })));
    }
}
