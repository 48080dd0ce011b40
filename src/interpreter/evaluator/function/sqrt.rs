use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Computes the square root of a number.
///
/// Negative inputs give `NaN`; there are no complex results.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// [`RuntimeError::TypeError`] if the argument is not a number.
///
/// # Example
/// ```
/// use cosmo::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// let r = sqrt(&[Value::Number(9.0)], 1).unwrap();
/// assert_eq!(r, Value::Number(3.0));
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [Value::Number(x)] => Ok(Value::Number(x.sqrt())),
        _ => Err(RuntimeError::TypeError { details: "Argument to 'sqrt' must be a number.".to_string(),
                                           line }),
    }
}
