use thiserror::Error;

use crate::interpreter::lexer::Location;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records where the problem was found, so callers can point
/// at the offending line and column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input that does not start any token.
    #[error("Syntax error at {location}: unrecognized input '{slice}'.")]
    InvalidToken {
        /// The text the lexer could not match.
        slice:    String,
        /// Where the input starts.
        location: Location,
    },
    /// A `q(` string without its closing `)`.
    #[error("Syntax error at {location}: string literal is missing its closing ')'.")]
    UnterminatedString {
        /// Where the string starts.
        location: Location,
    },
    /// A `=begin` comment without a following `=cut`.
    #[error("Syntax error at {location}: comment opened with '=begin' is never closed with '=cut'.")]
    UnterminatedComment {
        /// Where the comment starts.
        location: Location,
    },
    /// An identifier written directly before `(`.
    #[error("Syntax error at {location}: identifier '{name}' cannot be followed by '('.")]
    CallSyntax {
        /// The identifier.
        name:     String,
        /// Where the identifier starts.
        location: Location,
    },
    /// Found a token that the grammar does not allow here.
    #[error("Syntax error at {location}: unexpected {found}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: &'static str,
        /// Where the token starts.
        location: Location,
    },
    /// Reached the end of input unexpectedly.
    #[error("Syntax error at {location}: unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// The end-of-input position.
        location: Location,
    },
    /// Used `print` where a name or a value is required.
    #[error("Syntax error at {location}: '{word}' is reserved and cannot be used as a name.")]
    ReservedWord {
        /// The reserved spelling.
        word:     &'static str,
        /// Where the word starts.
        location: Location,
    },
}

impl ParseError {
    /// Returns where the error was detected.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::InvalidToken { location, .. }
            | Self::UnterminatedString { location }
            | Self::UnterminatedComment { location }
            | Self::CallSyntax { location, .. }
            | Self::UnexpectedToken { location, .. }
            | Self::UnexpectedEndOfInput { location, .. }
            | Self::ReservedWord { location, .. } => *location,
        }
    }

    /// The 1-based line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.location().line
    }

    /// The 1-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.location().column
    }
}
