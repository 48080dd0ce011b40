use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// Grammar: `expression := assignment`
    ///
    /// Every nesting level of parentheses and call arguments passes through
    /// here, so the stack is grown on demand.
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Parses an assignment, which is right-associative.
    ///
    /// The left-hand side is parsed as an ordinary expression first; only a
    /// bare variable is a valid target, so `a + b = c` fails.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidAssignmentTarget`] with the line of the
    /// `=` when the target is not a variable.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let target = self.logic_or()?;

        if self.match_kinds(&[TokenKind::Equal]) {
            let equals_line = self.previous().line;
            let value = self.assignment()?;

            return match &target {
                Expr::Variable { name, line } => Ok(Expr::Assign { name:  name.clone(),
                                                                   value: Box::new(value),
                                                                   line:  *line, }),
                _ => Err(ParseError::InvalidAssignmentTarget { line: equals_line }),
            };
        }

        Ok(target)
    }

    /// Grammar: `logic_or := logic_and ( "or" logic_and )*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logic_and()?;
        while self.match_kinds(&[TokenKind::Or]) {
            let line = self.previous().line;
            let right = self.logic_and()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::Or,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Grammar: `logic_and := equality ( "and" equality )*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;
        while self.match_kinds(&[TokenKind::And]) {
            let line = self.previous().line;
            let right = self.equality()?;
            left = Expr::Logical { left: Box::new(left),
                                   op: LogicalOperator::And,
                                   right: Box::new(right),
                                   line };
        }
        Ok(left)
    }

    /// Parses `==` and `!=`.
    ///
    /// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::BangEqual, TokenKind::EqualEqual], Self::comparison)
    }

    /// Parses the ordering operators `<`, `<=`, `>` and `>=`.
    ///
    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::term)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Folds one precedence level into a left-leaning [`Expr::Binary`] tree.
    ///
    /// # Parameters
    /// - `operators`: Token kinds accepted at this level.
    /// - `operand`: Parser for the next-tighter level.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while self.match_kinds(operators) {
            let token = self.previous();
            let Some(op) = token_to_binary_operator(token.kind) else {
                break;
            };
            let right = operand(self)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
        }

        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including the
/// logical keywords, which build [`Expr::Logical`] nodes instead.
///
/// # Example
/// ```
/// use cosmo::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
