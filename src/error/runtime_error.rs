#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read or assign a variable no scope declares.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator needed a number.
    #[error("Error on line {line}: Operand must be a number. Operator: '{operator}'")]
    OperandMustBeNumber {
        /// The operator's source text.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A binary operator needed two numbers.
    #[error("Error on line {line}: Operands must be numbers. Operator: '{operator}'")]
    OperandsMustBeNumbers {
        /// The operator's source text.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` applied to operands that are neither numbers nor involve a string.
    #[error("Error on line {line}: Operands must be two numbers or strings.")]
    InvalidAddOperands {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not a function.
    #[error("Error on line {line}: Can only call functions.")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Expected {expected} arguments but got {found}.")]
    ArityMismatch {
        /// The callee's arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A native function received a value of the wrong type.
    #[error("Error on line {line}: {details}")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
