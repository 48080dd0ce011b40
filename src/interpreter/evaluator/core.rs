use std::{cell::RefCell, mem, rc::Rc};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::core::define_natives,
        output::{SharedPrintHandler, stdout_handler},
        value::{callable::Function, core::Value},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Return` carries the value of a `return` statement outward through
/// enclosing blocks, loops and conditionals until the function call that
/// started them turns it back into a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Execution continues with the next statement.
    Normal,
    /// A `return` statement ran with this value.
    Return(Value),
}

/// Stores the runtime state of a program.
///
/// Holds the global frame (seeded with the native functions), the frame
/// currently in scope, and the destination of `output` statements.
///
/// ## Usage
///
/// An `Interpreter` can run several programs in turn; declarations made by
/// one remain visible to the next.
///
/// ```
/// use cosmo::interpreter::{
///     evaluator::core::Interpreter,
///     lexer::scan,
///     output::buffer_handler,
///     parser::parse,
/// };
///
/// let output = buffer_handler();
/// let mut interpreter = Interpreter::with_output(output.clone());
///
/// let program = parse(&scan("output add(2, 3);").tokens);
/// interpreter.interpret(&program.statements).unwrap();
///
/// assert_eq!(output.get_output(), "5\n");
/// ```
pub struct Interpreter {
    /// The innermost frame. Between statements this is the global frame.
    environment: Rc<RefCell<Environment>>,
    printer:     SharedPrintHandler,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter that writes `output` lines to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(stdout_handler())
    }

    /// Creates an interpreter that writes `output` lines to `printer`.
    #[must_use]
    pub fn with_output(printer: SharedPrintHandler) -> Self {
        let mut globals = Environment::new();
        define_natives(&mut globals);

        Self { environment: Rc::new(RefCell::new(globals)),
               printer }
    }

    /// Executes `statements` in order.
    ///
    /// # Errors
    /// Stops at the first runtime error and returns it. Output already written
    /// and global bindings already made are kept.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        debug!(statements = statements.len(), "interpreting program");

        for statement in statements {
            if let Err(error) = self.execute(statement) {
                debug!(%error, "runtime error");
                return Err(error);
            }
        }

        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// [`Signal::Return`] if a `return` statement ran, otherwise
    /// [`Signal::Normal`].
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<Signal> {
        ensure_sufficient_stack(|| match statement {
            Stmt::Expression { expr } => {
                self.evaluate(expr)?;
                Ok(Signal::Normal)
            },
            Stmt::Output { expr } => {
                let value = self.evaluate(expr)?;
                self.printer.println(&value.to_string());
                Ok(Signal::Normal)
            },
            Stmt::Create { name, initializer, .. } => {
                let value = match initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name.as_str(), value);
                Ok(Signal::Normal)
            },
            Stmt::Block { statements } => {
                let scope = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, Rc::new(RefCell::new(scope)))
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            },
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Signal::Return(value) = self.execute(body)? {
                        return Ok(Signal::Return(value));
                    }
                }
                Ok(Signal::Normal)
            },
            Stmt::Function(declaration) => {
                trace!(name = %declaration.name, "declaring function");
                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment));
                self.environment
                    .borrow_mut()
                    .define(declaration.name.as_str(), Value::Callable(Rc::new(function)));
                Ok(Signal::Normal)
            },
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.evaluate(value)?,
                    None => Value::Nil,
                };
                Ok(Signal::Return(value))
            },
        })
    }

    /// Executes `statements` with `environment` as the current frame.
    ///
    /// The previous frame is restored afterwards whether the block finished
    /// normally, returned, or failed.
    pub fn execute_block(&mut self,
                         statements: &[Stmt],
                         environment: Rc<RefCell<Environment>>)
                         -> EvalResult<Signal> {
        let previous = mem::replace(&mut self.environment, environment);
        let result = self.execute_statements(statements);
        self.environment = previous;
        result
    }

    /// Executes statements until one of them returns.
    fn execute_statements(&mut self, statements: &[Stmt]) -> EvalResult<Signal> {
        for statement in statements {
            if let Signal::Return(value) = self.execute(statement)? {
                return Ok(Signal::Return(value));
            }
        }
        Ok(Signal::Normal)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, right, line } => {
                let right = self.evaluate(right)?;
                Self::eval_unary(*op, &right, *line)
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(left, *op, right),
            Expr::Variable { name, line } => self.environment.borrow().get(name, *line),
            Expr::Assign { name, value, line } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone(), *line)?;
                Ok(value)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
        })
    }
}
