use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Resolves a name against the constants evaluated so far.
    ///
    /// # Errors
    /// Returns `EvaluationError::UndeclaredIdentifier` if no earlier
    /// declaration bound the name.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| EvaluationError::UndeclaredIdentifier { name: name.to_string() })
    }
}

/// Checks that `print` got exactly one argument and hands it back.
///
/// # Errors
/// Returns `EvaluationError::PrintArity` for any other count.
///
/// ## Example
/// ```
/// use octconf::interpreter::{evaluator::utils::single_argument, value::core::Value};
///
/// assert_eq!(single_argument(vec![Value::from(1)]).unwrap(), Value::from(1));
/// assert!(single_argument(vec![]).is_err());
/// ```
pub fn single_argument(args: Vec<Value>) -> EvalResult<Value> {
    let found = args.len();
    let mut args = args.into_iter();

    match (args.next(), args.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(EvaluationError::PrintArity { found }),
    }
}
