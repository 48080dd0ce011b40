/// Represents all diagnostics the scanner can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal whose closing quote was never found.
    #[error("Error on line {line}: Unterminated string.")]
    UnterminatedString {
        /// The source line where the input ended.
        line: usize,
    },
}
