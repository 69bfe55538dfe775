use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur during evaluation.
///
/// Evaluation stops at the first error; no partial result survives it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// Referenced a name that has not been declared yet.
    #[error("Evaluation error: identifier '{name}' is not declared.")]
    UndeclaredIdentifier {
        /// The name of the constant.
        name: String,
    },
    /// An arithmetic operator received fewer than two operands.
    #[error("Evaluation error: operator '{op}' requires at least two arguments, found {found}.")]
    TooFewOperands {
        /// The operator.
        op:    Operator,
        /// How many operands were supplied.
        found: usize,
    },
    /// `print` received anything but exactly one argument.
    #[error("Evaluation error: print expects exactly one argument, found {found}.")]
    PrintArity {
        /// How many arguments were supplied.
        found: usize,
    },
    /// An arithmetic operand was not a number.
    #[error("Evaluation error: operator '{op}' only accepts numeric arguments, found {found}.")]
    NonNumericOperand {
        /// The operator.
        op:    Operator,
        /// The type name of the offending operand.
        found: &'static str,
    },
    /// Attempted division by zero.
    #[error("Evaluation error: division by zero.")]
    DivisionByZero,
    /// An operator that does not fold over numbers reached arithmetic.
    #[error("Evaluation error: unknown arithmetic operator '{op}'.")]
    UnsupportedOperator {
        /// The operator.
        op: Operator,
    },
}
