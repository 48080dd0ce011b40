/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each carrying its kind, source text, literal value and line. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens ending in `Eof`.
/// - Handles number and string literals, identifiers, keywords, operators
///   and `//` comments.
/// - Reports lexical errors for invalid input without stopping the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level. It
/// collects syntax errors instead of stopping at the first one, resuming at
/// the next statement boundary.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Lowers `for` loops to `while` loops.
/// - Validates grammar, reporting errors with line information.
pub mod parser;
/// Lexically scoped variable storage.
///
/// Scope frames chained from the innermost block out to the globals.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, strings, booleans, nil and callables.
/// - Implements truthiness, equality and display.
/// - Defines user and native functions behind the `Callable` trait.
pub mod value;
/// The evaluator module executes statements and computes values.
///
/// A tree-walking interpreter over the AST. It manages scopes and closures,
/// applies operators, performs calls, and reports runtime errors such as
/// division by zero or calling a non-function.
pub mod evaluator;
/// Where `output` statements write.
pub mod output;
