use crate::{
    ast::Operator,
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::bigint_to_f64,
};

impl Context {
    /// Left-folds an arithmetic operator over its evaluated arguments.
    ///
    /// `[- a b c]` computes `(a - b) - c`. All arguments are checked to be
    /// numeric before any step runs. Division by zero is checked at every
    /// step, before dividing.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul` or `Div`; `Print` is rejected.
    /// - `args`: The evaluated arguments, in source order.
    ///
    /// # Returns
    /// The folded value.
    ///
    /// # Example
    /// ```
    /// use octconf::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let args = [Value::from(8), Value::from(2), Value::from(1)];
    /// let result = Context::eval_arithmetic(Operator::Sub, &args).unwrap();
    ///
    /// assert_eq!(result, Value::from(5));
    /// ```
    pub fn eval_arithmetic(op: Operator, args: &[Value]) -> EvalResult<Value> {
        if op == Operator::Print {
            return Err(EvaluationError::UnsupportedOperator { op });
        }
        let [first, rest @ ..] = args else {
            return Err(EvaluationError::TooFewOperands { op, found: 0 });
        };
        if rest.is_empty() {
            return Err(EvaluationError::TooFewOperands { op, found: 1 });
        }
        if let Some(value) = args.iter().find(|value| !value.is_numeric()) {
            return Err(EvaluationError::NonNumericOperand { op,
                                                            found: value.type_name() });
        }

        rest.iter()
            .try_fold(first.clone(), |acc, rhs| Self::eval_scalar_op(op, &acc, rhs))
    }

    /// Applies one arithmetic step to two numeric values.
    ///
    /// Integer operands stay integers for `+ - *`, with no size limit. A
    /// float on either side promotes the other. Division always produces a
    /// float.
    ///
    /// # Example
    /// ```
    /// use octconf::{
    ///     ast::Operator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(Operator::Div, &Value::from(6), &Value::from(4));
    /// assert_eq!(result.unwrap(), Value::Float(1.5));
    /// ```
    pub fn eval_scalar_op(op: Operator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Operator::{Add, Div, Mul, Print, Sub};
        use Value::{Float, Integer};

        if op == Print {
            return Err(EvaluationError::UnsupportedOperator { op });
        }
        if op == Div && right.is_zero() {
            return Err(EvaluationError::DivisionByZero);
        }

        match (left, right) {
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a + b)),
                Sub => Ok(Integer(a - b)),
                Mul => Ok(Integer(a * b)),
                _ => Ok(Float(bigint_to_f64(a) / bigint_to_f64(b))),
            },
            _ => {
                let (a, b) = (as_float(op, left)?, as_float(op, right)?);
                Ok(Float(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             _ => a / b,
                         }))
            },
        }
    }
}

/// Promotes a numeric operand to `f64`.
fn as_float(op: Operator, value: &Value) -> EvalResult<f64> {
    match value {
        Value::Integer(n) => Ok(bigint_to_f64(n)),
        Value::Float(x) => Ok(*x),
        other => Err(EvaluationError::NonNumericOperand { op,
                                                          found: other.type_name() }),
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integer_results_are_not_bounded() {
        let a = Value::from(0o77_777_777_777_i64);
        let result = Context::eval_arithmetic(Operator::Mul, &[a.clone(), a]);
        assert_eq!(result, Ok(Value::from(BigInt::from(73_786_976_277_658_337_281_u128))));

        let max = Value::from(i64::MAX);
        let result = Context::eval_arithmetic(Operator::Add, &[max, Value::from(1)]);
        assert_eq!(result, Ok(Value::from(BigInt::from(1_u64 << 63))));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        let result = Context::eval_arithmetic(Operator::Add, &[Value::from(1), Value::Float(0.5)]);
        assert_eq!(result, Ok(Value::Float(1.5)));
    }

    #[test]
    fn print_is_not_an_arithmetic_operator() {
        let args = [Value::from(1), Value::from(2)];
        assert_eq!(Context::eval_arithmetic(Operator::Print, &args),
                   Err(EvaluationError::UnsupportedOperator { op: Operator::Print }));
        assert_eq!(Context::eval_scalar_op(Operator::Print, &args[0], &args[1]),
                   Err(EvaluationError::UnsupportedOperator { op: Operator::Print }));
    }
}
