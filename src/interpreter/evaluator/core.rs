use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Declaration, Operator, ValueNode},
    error::EvaluationError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// A declared name together with its evaluated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// The declared name.
    pub name:  String,
    /// The value it evaluated to.
    pub value: Value,
}

/// Everything one evaluation pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// One entry per declaration, in source order, shadowed ones included.
    pub constants: Vec<Constant>,
    /// Text logged by `print`, in call order.
    pub print_log: Vec<String>,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the state of one evaluation pass: the constants bound
/// so far and the output of every `print` executed.
///
/// ## Usage
///
/// A `Context` is created empty for each program and dropped afterwards;
/// nothing carries over between programs. [`evaluate`] does exactly that.
#[derive(Debug, Default)]
pub struct Context {
    /// Latest value bound to each declared name.
    pub environment: HashMap<String, Value>,
    /// Text logged by `print`, in call order.
    pub print_log:   Vec<String>,
}

impl Context {
    /// Creates a new evaluation context with an empty environment and print
    /// log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a value node and returns the resulting value.
    ///
    /// This is the main entry point for value evaluation. Operator
    /// expressions evaluate every argument, left to right, before the
    /// operator is applied.
    ///
    /// # Parameters
    /// - `node`: Value node to evaluate.
    ///
    /// # Returns
    /// The evaluated `Value`.
    ///
    /// # Example
    /// ```
    /// use octconf::{
    ///     ast::{Operator, ValueNode},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let node = ValueNode::ConstExpr { op:   Operator::Print,
    ///                                   args: vec![ValueNode::Str("hi".to_string())], };
    ///
    /// assert_eq!(ctx.eval(&node).unwrap(), Value::from("hi"));
    /// assert_eq!(ctx.print_log, vec!["hi".to_string()]);
    /// ```
    pub fn eval(&mut self, node: &ValueNode) -> EvalResult<Value> {
        match node {
            ValueNode::Number { value, .. } => Ok(Value::Integer(value.clone())),
            ValueNode::Str(s) => Ok(Value::Str(s.clone())),
            ValueNode::Array(items) => {
                let values = self.eval_all(items)?;
                Ok(Value::List(values))
            },
            ValueNode::NameRef(name) => self.lookup(name),
            ValueNode::ConstExpr { op, args } => {
                let args = self.eval_all(args)?;
                match op {
                    Operator::Print => self.eval_print(args),
                    op => Self::eval_arithmetic(*op, &args),
                }
            },
        }
    }

    /// Evaluates a single declaration and records it.
    ///
    /// The name is bound only after its value has been computed, so a
    /// declaration can never see itself. A repeated name replaces the
    /// earlier binding for later lookups.
    ///
    /// # Returns
    /// The constant to append to the output.
    pub fn eval_declaration(&mut self, declaration: &Declaration) -> EvalResult<Constant> {
        let value = self.eval(&declaration.value)?;
        trace!(name = %declaration.name, value = %value, "constant evaluated");

        self.environment.insert(declaration.name.clone(), value.clone());
        Ok(Constant { name: declaration.name.clone(),
                      value })
    }

    /// Evaluates nodes in order, stopping at the first error.
    fn eval_all(&mut self, nodes: &[ValueNode]) -> EvalResult<Vec<Value>> {
        nodes.iter().map(|node| self.eval(node)).collect()
    }
}

/// Evaluates a whole program in a fresh context.
///
/// # Errors
/// Returns the first [`EvaluationError`]; no constants are returned in that
/// case.
///
/// # Example
/// ```
/// use octconf::interpreter::{
///     evaluator::core::evaluate, parser::core::parse, value::core::Value,
/// };
///
/// let program = parse("a := 0o1; a := 0o2; b := a;").unwrap();
/// let evaluation = evaluate(&program).unwrap();
///
/// let values: Vec<_> = evaluation.constants.iter().map(|c| c.value.clone()).collect();
/// assert_eq!(values, vec![Value::from(1), Value::from(2), Value::from(2)]);
/// ```
pub fn evaluate(declarations: &[Declaration]) -> EvalResult<Evaluation> {
    let mut context = Context::new();
    let constants = declarations.iter()
                                .map(|declaration| context.eval_declaration(declaration))
                                .collect::<EvalResult<Vec<_>>>()?;

    Ok(Evaluation { constants,
                    print_log: context.print_log })
}
