/// Number display helpers.
///
/// Every number in the language is an `f64`. This module renders them the way
/// programs expect to see them: integral values without a fractional part,
/// and the non-finite values by name.
pub mod num;
/// Stack growth for deep recursion.
///
/// The evaluator recurses once per nested expression and once per user
/// function call. Wrapping those recursive entry points in
/// [`stack::ensure_sufficient_stack`] lets deep programs grow the native stack
/// instead of overflowing it.
pub mod stack;
