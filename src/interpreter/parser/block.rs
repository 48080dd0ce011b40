use crate::{
    ast::Stmt,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block body delimited by braces.
    ///
    /// The opening `{` has already been consumed. Declarations are parsed
    /// until the closing `}`; a malformed declaration inside the block is
    /// reported and skipped like at the top level, so the rest of the block
    /// still parses.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// # Returns
    /// The statements of the block, in source order.
    pub(in crate::interpreter::parser) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration_or_recover() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
