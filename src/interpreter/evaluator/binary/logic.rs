use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `and` / `or` with short-circuiting.
    ///
    /// The result is one of the operand values, not a boolean: `or` yields
    /// the left value if it is truthy, `and` yields it if it is falsy, and
    /// otherwise the right operand is evaluated and yielded. The right operand
    /// is not evaluated at all when the left decides the result.
    pub fn eval_logical(&mut self,
                        left: &Expr,
                        op: LogicalOperator,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.evaluate(left)?;

        let decided = match op {
            LogicalOperator::Or => left.is_truthy(),
            LogicalOperator::And => !left.is_truthy(),
        };

        if decided { Ok(left) } else { self.evaluate(right) }
    }
}
