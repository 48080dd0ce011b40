/// Parser state, token-cursor primitives and error recovery.
///
/// Holds the [`core::Parser`] struct, the `peek` / `previous` / `advance` /
/// `check` / `match` primitives, the top-level declaration loop and
/// synchronization after syntax errors.
pub mod core;

/// Declaration and statement parsing.
///
/// Handles `create`, `func`, `if`, `while`, `for` (lowered to `while`),
/// `output`, `return` and expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences, recovering from errors inside
/// the block so that later statements still parse.
pub mod block;

/// Binary-level expression parsing.
///
/// Implements assignment and every left-associative precedence level from
/// `or` down to multiplication.
pub mod binary;

/// Unary, call and primary expression parsing.
pub mod unary;

/// Shared helpers for comma-separated lists and identifiers.
pub mod utils;

pub use self::core::{Parsed, Parser, parse};
