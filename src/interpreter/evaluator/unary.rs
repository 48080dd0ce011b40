use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Not`: negated truthiness; works on every value.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use cosmo::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Nil, 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { operator: op.to_string(),
                                                             line }),
            },
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn negate_requires_number() {
        assert_eq!(Interpreter::eval_unary(UnaryOperator::Negate, &Value::from("x"), 6),
                   Err(RuntimeError::OperandMustBeNumber { operator: "-".to_string(),
                                                           line:     6, }));
        assert_eq!(RuntimeError::OperandMustBeNumber { operator: "-".to_string(),
                                                       line:     6, }.to_string(),
                   "Error on line 6: Operand must be a number. Operator: '-'");
    }

    #[test]
    fn not_uses_truthiness() {
        assert_eq!(Interpreter::eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1),
                   Ok(Value::Bool(false)));
        assert_eq!(Interpreter::eval_unary(UnaryOperator::Not, &Value::Bool(false), 1),
                   Ok(Value::Bool(true)));
    }
}
