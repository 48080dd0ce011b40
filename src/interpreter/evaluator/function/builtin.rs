use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Adds two numbers.
///
/// # Parameters
/// - `args`: Slice containing two arguments.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// [`RuntimeError::TypeError`] unless both arguments are numbers.
///
/// # Example
/// ```
/// use cosmo::interpreter::{evaluator::function::builtin::add, value::core::Value};
///
/// let sum = add(&[Value::Number(2.0), Value::Number(3.0)], 1).unwrap();
/// assert_eq!(sum, Value::Number(5.0));
/// ```
pub fn add(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [Value::Number(a), Value::Number(b)] => Ok(Value::Number(a + b)),
        _ => Err(RuntimeError::TypeError { details: "Arguments to 'add' must be numbers.".to_string(),
                                           line }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejects_non_numbers() {
        let error = add(&[Value::from("1"), Value::Number(2.0)], 3).unwrap_err();
        assert_eq!(error.to_string(), "Error on line 3: Arguments to 'add' must be numbers.");
    }
}
