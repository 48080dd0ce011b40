use crate::{
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a comma-separated list of items up to, not including, a `)`.
    ///
    /// This utility is shared by parameter lists and call arguments. An
    /// immediately encountered `)` produces an empty list; the caller consumes
    /// the closing parenthesis.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// Reaching [`MAX_ARGUMENTS`] items reports `too_many` once, without
    /// failing, and parsing continues.
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `too_many`: Builds the diagnostic from the limit and the line.
    ///
    /// # Errors
    /// Propagates the first error from `parse_item`.
    pub(in crate::interpreter::parser) fn comma_separated<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        too_many: impl Fn(usize, usize) -> ParseError)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(items);
        }

        loop {
            if items.len() == MAX_ARGUMENTS {
                let line = self.peek().line;
                self.report(too_many(MAX_ARGUMENTS, line));
            }

            items.push(parse_item(self)?);

            if !self.match_kinds(&[TokenKind::Comma]) {
                break;
            }
        }

        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedToken`] with `message` if the current
    /// token is not an identifier.
    pub(in crate::interpreter::parser) fn identifier(&mut self,
                                                     message: &'static str)
                                                     -> ParseResult<String> {
        Ok(self.consume(TokenKind::Identifier, message)?.lexeme.clone())
    }
}
