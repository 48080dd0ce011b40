use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `+`.
    ///
    /// Two numbers add. Otherwise, if either operand is a string, the display
    /// forms of both are concatenated, so `"n = " + 1` is `"n = 1"`.
    ///
    /// # Errors
    /// [`RuntimeError::InvalidAddOperands`] when neither rule applies.
    ///
    /// # Example
    /// ```
    /// use cosmo::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let joined = Interpreter::eval_add(&Value::from("big"), &Value::Bool(true), 1);
    /// assert_eq!(joined.unwrap(), Value::from("bigtrue"));
    /// ```
    pub fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::from(format!("{left}{right}"))),
            _ => Err(RuntimeError::InvalidAddOperands { line }),
        }
    }

    /// Evaluates `-`, `*` and `/` on two numbers.
    ///
    /// Division by exactly zero is an error rather than an infinity.
    ///
    /// # Errors
    /// - [`RuntimeError::OperandsMustBeNumbers`] if either operand is not a
    ///   number.
    /// - [`RuntimeError::DivisionByZero`] for `x / 0`.
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Div, Mul, Sub};

        let (left, right) = Self::number_operands(op, left, right, line)?;

        Ok(Value::Number(match op {
                             Sub => left - right,
                             Mul => left * right,
                             Div => {
                                 if right == 0.0 {
                                     return Err(RuntimeError::DivisionByZero { line });
                                 }
                                 left / right
                             },
                             _ => {
                                 return Err(RuntimeError::TypeError { details: format!("Operator '{op}' is not arithmetic."),
                                                                      line });
                             },
                         }))
    }

    /// Extracts both operands as numbers.
    ///
    /// # Errors
    /// [`RuntimeError::OperandsMustBeNumbers`] naming `op`.
    pub(crate) fn number_operands(op: BinaryOperator,
                                  left: &Value,
                                  right: &Value,
                                  line: usize)
                                  -> EvalResult<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                           line }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn add_numbers_and_strings() {
        assert_eq!(Interpreter::eval_add(&Value::Number(1.0), &Value::Number(2.0), 1),
                   Ok(Value::Number(3.0)));
        assert_eq!(Interpreter::eval_add(&Value::from("a"), &Value::from("b"), 1),
                   Ok(Value::from("ab")));
        assert_eq!(Interpreter::eval_add(&Value::Number(2.0), &Value::from("x"), 1),
                   Ok(Value::from("2x")));
        assert_eq!(Interpreter::eval_add(&Value::from("is "), &Value::Nil, 1),
                   Ok(Value::from("is nil")));
    }

    #[test]
    fn add_rejects_other_mixes() {
        assert_eq!(Interpreter::eval_add(&Value::Number(1.0), &Value::Bool(true), 4),
                   Err(RuntimeError::InvalidAddOperands { line: 4 }));
        assert_eq!(Interpreter::eval_add(&Value::Nil, &Value::Nil, 2),
                   Err(RuntimeError::InvalidAddOperands { line: 2 }));
    }

    #[test]
    fn arithmetic_requires_numbers() {
        assert_eq!(Interpreter::eval_scalar_op(BinaryOperator::Sub,
                                               &Value::from("a"),
                                               &Value::Number(1.0),
                                               3),
                   Err(RuntimeError::OperandsMustBeNumbers { operator: "-".to_string(),
                                                             line:     3, }));
    }

    #[test]
    fn division() {
        assert_eq!(Interpreter::eval_scalar_op(BinaryOperator::Div,
                                               &Value::Number(7.0),
                                               &Value::Number(2.0),
                                               1),
                   Ok(Value::Number(3.5)));
        assert_eq!(Interpreter::eval_scalar_op(BinaryOperator::Div,
                                               &Value::Number(1.0),
                                               &Value::Number(0.0),
                                               9),
                   Err(RuntimeError::DivisionByZero { line: 9 }));
        assert_eq!(Interpreter::eval_scalar_op(BinaryOperator::Div,
                                               &Value::Number(1.0),
                                               &Value::Number(-0.0),
                                               9),
                   Err(RuntimeError::DivisionByZero { line: 9 }));
    }
}
