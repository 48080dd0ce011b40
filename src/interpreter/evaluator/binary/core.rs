use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already-evaluated values.
    ///
    /// `+` goes to `eval_add`, the other arithmetic operators to
    /// `eval_scalar_op`, and the comparison and equality operators to
    /// `eval_comparison`. The logical operators never reach this point: they
    /// short-circuit and are handled by `eval_logical`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use cosmo::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Mul,
    ///                                       &Value::Number(3.0),
    ///                                       &Value::Number(4.0),
    ///                                       1);
    /// assert_eq!(result.unwrap(), Value::Number(12.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_add(left, right, line),
            Sub | Mul | Div => Self::eval_scalar_op(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
        }
    }
}
