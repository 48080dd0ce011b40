#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
///
/// `found` fields hold a printable description of the offending token: the
/// quoted lexeme, or `end` for the end of input.
pub enum ParseError {
    /// A specific token was required but something else was found.
    #[error("Error on line {line} at {found}: {message}")]
    ExpectedToken {
        /// What the parser was looking for, e.g. `Expect ';' after value.`
        message: &'static str,
        /// The token encountered instead.
        found:   String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An expression was required but the token cannot start one.
    #[error("Error on line {line} at {found}: Expect expression.")]
    ExpectedExpression {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The left-hand side of `=` is not a variable.
    #[error("Error on line {line} at '=': Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line of the `=` token.
        line: usize,
    },
    /// A function declares more parameters than allowed.
    #[error("Error on line {line}: Can't have more than {max} parameters.")]
    TooManyParameters {
        /// The maximum number of parameters.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call passes more arguments than allowed.
    #[error("Error on line {line}: Can't have more than {max} arguments.")]
    TooManyArguments {
        /// The maximum number of arguments.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `return` used outside of any function body.
    #[error("Error on line {line} at 'return': Can't return from top-level code.")]
    ReturnOutsideFunction {
        /// The source line of the `return` keyword.
        line: usize,
    },
}

impl ParseError {
    /// The source line this error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::TooManyParameters { line, .. }
            | Self::TooManyArguments { line, .. }
            | Self::ReturnOutsideFunction { line } => *line,
        }
    }
}
