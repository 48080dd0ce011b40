/// The runtime value type.
///
/// Defines [`core::Value`] with truthiness, equality and the display form
/// used by `output` and string concatenation.
pub mod core;
/// Callable values.
///
/// Defines the [`callable::Callable`] trait shared by user functions (closures
/// over their declaring environment) and native functions.
pub mod callable;
