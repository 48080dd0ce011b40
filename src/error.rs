/// Lexical errors.
///
/// Problems the scanner finds in raw source text. These are diagnostics only:
/// scanning always runs to the end of the input.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as missing punctuation, unexpected tokens, or invalid
/// assignment targets.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, type mismatches, division by
/// zero, and calls with the wrong number of arguments.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program through the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CosmoError {
    /// The program did not parse. Carries every diagnostic from the pass,
    /// lexical ones first.
    #[error("{}", render_syntax(.lex_errors, .parse_errors))]
    Syntax {
        /// Lexical diagnostics reported while scanning.
        lex_errors:   Vec<LexError>,
        /// Syntax errors collected by the parser.
        parse_errors: Vec<ParseError>,
    },
    /// Execution stopped on a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn render_syntax(lex_errors: &[LexError], parse_errors: &[ParseError]) -> String {
    lex_errors.iter()
              .map(ToString::to_string)
              .chain(parse_errors.iter().map(ToString::to_string))
              .collect::<Vec<_>>()
              .join("\n")
}
