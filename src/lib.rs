//! # cosmo
//!
//! cosmo is an interpreter for a small dynamically typed scripting language
//! written in Rust. It scans, parses and evaluates programs with variables,
//! blocks, conditionals, loops, first-class functions and closures.
//!
//! ```
//! use cosmo::{interpreter::output::buffer_handler, run_with_output};
//!
//! let output = buffer_handler();
//! run_with_output("func twice(x) { return x * 2; } output twice(21);", output.clone()).unwrap();
//! assert_eq!(output.get_output(), "42\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::CosmoError,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Scanned, scan},
        output::{SharedPrintHandler, stdout_handler},
        parser::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums and the operator types
/// that represent source code as a tree. The AST is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// Every error carries the line it points at and renders as
/// `Error on line N: ...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Aggregates them into [`error::CosmoError`] for the whole pipeline.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation
/// to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase.
pub mod interpreter;
/// General utilities: number formatting and stack growth.
pub mod util;

pub use crate::{
    error::{LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Signal,
        lexer::{Token, TokenKind},
        parser::Parsed,
        value::core::Value,
    },
};

/// Runs a program, writing `output` lines to stdout.
///
/// # Errors
/// See [`run_with_output`].
///
/// # Examples
/// ```
/// use cosmo::{error::CosmoError, run};
///
/// assert!(run("create x = 1;").is_ok());
///
/// // 'y' is never declared.
/// assert!(matches!(run("y = 1;"), Err(CosmoError::Runtime(_))));
///
/// // Missing semicolon.
/// assert!(matches!(run("create x = 1"), Err(CosmoError::Syntax { .. })));
/// ```
pub fn run(source: &str) -> Result<(), CosmoError> {
    run_with_output(source, stdout_handler())
}

/// Scans, parses and executes `source`, writing `output` lines to `printer`.
///
/// Lexical errors are logged but do not stop the program on their own: the
/// offending characters are skipped. If the parser reports any syntax error,
/// nothing is executed, not even the statements that did parse. This is a
/// deliberate departure from running whatever parsed.
///
/// # Errors
/// - [`CosmoError::Syntax`] with every lexical and syntax diagnostic, if the
///   program does not parse.
/// - [`CosmoError::Runtime`] with the first runtime error. Output written
///   before the error is kept.
pub fn run_with_output(source: &str, printer: SharedPrintHandler) -> Result<(), CosmoError> {
    let Scanned { tokens,
                  errors: lex_errors, } = scan(source);
    let parsed = parse(&tokens);

    if !parsed.is_ok() {
        debug!(lexical = lex_errors.len(),
               syntax = parsed.errors.len(),
               "program did not parse");
        return Err(CosmoError::Syntax { lex_errors,
                                        parse_errors: parsed.errors });
    }

    Interpreter::with_output(printer).interpret(&parsed.statements)?;
    Ok(())
}
