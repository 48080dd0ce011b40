use std::{cell::RefCell, fmt, rc::Rc};

use tracing::trace;

use crate::{
    ast::FunctionDecl,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter, Signal},
        value::core::Value,
    },
};

/// Anything that can be invoked by a call expression.
///
/// The evaluator checks the argument count against [`Callable::arity`]
/// before calling, so implementations can rely on receiving exactly that many
/// arguments.
pub trait Callable: fmt::Debug + fmt::Display {
    /// The name the callable was declared under.
    fn name(&self) -> &str;

    /// The exact number of arguments the callable accepts.
    fn arity(&self) -> usize;

    /// Invokes the callable with already-evaluated arguments.
    ///
    /// # Parameters
    /// - `interpreter`: The running interpreter, for executing user code.
    /// - `arguments`: Exactly [`Callable::arity`] values, in order.
    /// - `line`: Line of the call, for error reporting.
    fn call(&self,
            interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            line: usize)
            -> EvalResult<Value>;
}

/// A user-defined function together with the environment it closes over.
pub struct Function {
    declaration: Rc<FunctionDecl>,
    closure:     Rc<RefCell<Environment>>,
}

impl Function {
    /// Creates a function value capturing `closure`.
    #[must_use]
    pub const fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Self { declaration,
               closure }
    }
}

impl Callable for Function {
    fn name(&self) -> &str {
        &self.declaration.name
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// Runs the body in a fresh frame whose parent is the captured closure.
    ///
    /// Each invocation gets its own frame, so recursive and re-entrant calls
    /// never share parameters. Falling off the end of the body yields `nil`.
    fn call(&self,
            interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            _line: usize)
            -> EvalResult<Value> {
        trace!(function = %self.declaration.name, "calling user function");

        let mut frame = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            frame.define(param.as_str(), argument);
        }

        match interpreter.execute_block(&self.declaration.body, Rc::new(RefCell::new(frame)))? {
            Signal::Return(value) => Ok(value),
            Signal::Normal => Ok(Value::Nil),
        }
    }
}

/// Only the name is shown: the closure may reach back to this function.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.declaration.name)
         .field("arity", &self.arity())
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name)
    }
}

/// Signature shared by every native function body.
pub type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A function implemented in Rust.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    name:  &'static str,
    arity: usize,
    func:  NativeFn,
}

impl NativeFunction {
    /// Wraps `func` as a callable with the given name and arity.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Self { name,
               arity,
               func }
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self,
            _interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            line: usize)
            -> EvalResult<Value> {
        (self.func)(&arguments, line)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}
