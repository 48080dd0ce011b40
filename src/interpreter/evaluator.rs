/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`], the statement executor with its
/// [`core::Signal`] for `return`, scope handling for blocks, and the
/// expression dispatcher.
pub mod core;

/// Binary operator evaluation logic.
///
/// Arithmetic, string concatenation, comparisons, equality and the
/// short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Numeric negation and logical NOT.
pub mod unary;

/// Function evaluation.
///
/// Call expressions, arity checking and the native function table.
pub mod function;
