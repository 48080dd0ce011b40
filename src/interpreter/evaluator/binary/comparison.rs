use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any operands and never fail; see
    /// [`Value`]'s `PartialEq` for the rules. The ordering operators need two
    /// numbers.
    ///
    /// # Errors
    /// [`RuntimeError::OperandsMustBeNumbers`](crate::error::RuntimeError::OperandsMustBeNumbers)
    /// for an ordering operator with a non-number operand.
    ///
    /// # Example
    /// ```
    /// use cosmo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less,
    ///                                           &Value::Number(3.0),
    ///                                           &Value::Number(5.0),
    ///                                           1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            return Ok(Value::Bool((left == right) == (op == Equal)));
        }

        let (left, right) = Self::number_operands(op, left, right, line)?;
        Ok(Value::Bool(match op {
                           Less => left < right,
                           Greater => left > right,
                           LessEqual => left <= right,
                           GreaterEqual => left >= right,
                           _ => false,
                       }))
    }
}
