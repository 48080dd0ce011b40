/// Call evaluation and the native function table.
///
/// Evaluates the callee and arguments, enforces arity, and seeds the global
/// frame with every native.
pub mod core;
/// The `add` native.
///
/// Adds two numbers.
pub mod builtin;
/// The `sqrt` (square root) native.
pub mod sqrt;
