/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating declarations:
/// undeclared names, wrong argument counts, non-numeric operands, division by
/// zero.
pub mod evaluation_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, unterminated literals and
/// comments, misuse of reserved words and oversized literals.
pub mod parse_error;

pub use evaluation_error::EvaluationError;
pub use parse_error::ParseError;
use thiserror::Error;

/// Any failure of a translation.
///
/// Wraps the stage errors unchanged; the display is the stage error's own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source did not conform to the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program parsed but could not be evaluated.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
