use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            function::{builtin, sqrt},
        },
        value::{
            callable::{Callable, NativeFunction},
            core::Value,
        },
    },
};

/// Defines the native functions as a static table.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the native.
///
/// The macro produces `NATIVE_TABLE`, used to seed the globals.
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static NATIVE_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction::new($name, $arity, $func),
            )*
        ];
    };
}

native_functions! {
    "add"  => { arity: 2, func: builtin::add },
    "sqrt" => { arity: 1, func: sqrt::sqrt },
}

/// Binds every native function in `globals` under its name.
pub fn define_natives(globals: &mut Environment) {
    for native in NATIVE_TABLE {
        globals.define(native.name(), Value::Callable(Rc::new(*native)));
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// The argument count is checked against the callee's arity before
    /// anything is bound.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line of the call's closing parenthesis.
    ///
    /// # Errors
    /// - [`RuntimeError::NotCallable`] if the callee is not a function.
    /// - [`RuntimeError::ArityMismatch`] on a wrong argument count.
    /// - Any error raised while evaluating the operands or running the body.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize)
                            -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Value::Callable(function) = callee else {
            return Err(RuntimeError::NotCallable { line });
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArityMismatch { expected: function.arity(),
                                                     found: arguments.len(),
                                                     line });
        }

        trace!(callee = function.name(), arguments = arguments.len(), line, "call");
        function.call(self, arguments, line)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn natives_are_seeded_in_globals() {
        let mut globals = Environment::new();
        define_natives(&mut globals);

        for name in ["add", "sqrt"] {
            let value = globals.get(name, 1).unwrap();
            assert_eq!(value.to_string(), format!("<native fn {name}>"));
        }
    }
}
