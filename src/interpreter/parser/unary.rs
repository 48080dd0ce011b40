use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so `!-x` is parsed as `!(-x)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | call
    /// ```
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
                let operator = self.previous();
                let op = if operator.kind == TokenKind::Bang {
                    UnaryOperator::Not
                } else {
                    UnaryOperator::Negate
                };
                let right = self.unary()?;
                return Ok(Expr::Unary { op,
                                        right: Box::new(right),
                                        line: operator.line });
            }

            self.call()
        })
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// Calls chain left to right: `f(1)(2)` calls the result of `f(1)`.
    ///
    /// Grammar: `call := primary ( "(" arguments? ")" )*`
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.match_kinds(&[TokenKind::LeftParen]) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    /// Parses the argument list of a call whose `(` was just consumed.
    ///
    /// The call records the line of its closing parenthesis.
    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.comma_separated(Self::expression,
                                             |max, line| ParseError::TooManyArguments { max,
                                                                                       line })?;
        let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments,
                        line: paren.line })
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | IDENTIFIER
    ///              | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedExpression`] when the current token
    /// cannot start an expression. The token is not consumed.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        match token.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil => {
                self.advance();
                let value = token.literal.clone().unwrap_or(LiteralValue::Nil);
                Ok(Expr::Literal { value })
            },
            TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Variable { name: token.lexeme.clone(),
                                    line: token.line })
            },
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                Ok(Expr::Grouping { expr: Box::new(expr) })
            },
            _ => Err(ParseError::ExpectedExpression { found: token.describe(),
                                                      line:  token.line, }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::{Expr, LiteralValue, Stmt, UnaryOperator},
        error::ParseError,
        interpreter::{lexer::scan, parser::parse},
    };

    fn expression(source: &str) -> Expr {
        let parsed = parse(&scan(source).tokens);
        match parsed.statements.as_slice() {
            [Stmt::Expression { expr }] => expr.clone(),
            other => panic!("expected one expression statement, got {other:?}"),
        }
    }

    #[test]
    fn nested_unary_is_right_associative() {
        let expected =
            Expr::Unary { op:    UnaryOperator::Not,
                          right: Box::new(Expr::Unary { op:    UnaryOperator::Negate,
                                                        right:
                                                            Box::new(Expr::Variable { name:
                                                                                          "x".to_string(),
                                                                                      line: 1, }),
                                                        line:  1, }),
                          line:  1, };
        assert_eq!(expression("!-x;"), expected);
    }

    #[test]
    fn literals_carry_their_values() {
        assert_eq!(expression("\"hi\";"), Expr::Literal { value: LiteralValue::Str("hi".to_string()) });
        assert_eq!(expression("nil;"), Expr::Literal { value: LiteralValue::Nil });
        assert_eq!(expression("false;"), Expr::Literal { value: LiteralValue::Bool(false) });
        assert_eq!(expression("2.5;"), Expr::Literal { value: LiteralValue::Number(2.5) });
    }

    #[test]
    fn call_records_closing_paren_line() {
        let call = expression("f(1,\n2\n);");
        let Expr::Call { line, .. } = &call else {
            panic!("expected call");
        };
        assert_eq!(*line, 3);
    }

    #[test]
    fn missing_operand_is_expected_expression() {
        let parsed = parse(&scan("output 1 +;").tokens);
        assert_eq!(parsed.errors,
                   vec![ParseError::ExpectedExpression { found: "';'".to_string(),
                                                         line:  1, }]);
    }
}
