/// Operator dispatch.
///
/// Routes each binary operator to the handler for its family.
pub mod core;
/// Arithmetic on numbers, and `+` on strings.
pub mod scalar;
/// Ordering comparisons and equality.
pub mod comparison;
/// Short-circuiting `and` / `or`.
pub mod logic;
