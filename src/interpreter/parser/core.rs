use tracing::{debug, trace};

use crate::{
    ast::Stmt,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Upper bound on parameters and arguments. Exceeding it is reported but
/// parsing carries on.
pub const MAX_ARGUMENTS: usize = 255;

/// Stand-in returned by the cursor when the token slice is exhausted or does
/// not end in an end-of-input token.
static END_OF_INPUT: Token = Token::eof(0);

/// The output of a parse: every statement that parsed, and every syntax error.
///
/// A declaration containing a syntax error is left out of `statements`; the
/// declarations before and after it are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// Successfully parsed top-level statements, in source order.
    pub statements: Vec<Stmt>,
    /// Syntax errors, in the order they were found.
    pub errors:     Vec<ParseError>,
}

impl Parsed {
    /// Returns `true` if the parse produced no syntax errors.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses a token stream into a program.
///
/// This is the entry point for parsing. It never fails outright: syntax
/// errors are collected in [`Parsed::errors`] and parsing resumes at the next
/// statement boundary.
///
/// # Example
/// ```
/// use cosmo::interpreter::{lexer::scan, parser::parse};
///
/// let parsed = parse(&scan("create a = 1; output a;").tokens);
/// assert!(parsed.is_ok());
/// assert_eq!(parsed.statements.len(), 2);
/// ```
#[must_use]
pub fn parse(tokens: &[Token]) -> Parsed {
    Parser::new(tokens).parse()
}

/// Recursive-descent parser over a scanned token slice.
pub struct Parser<'a> {
    tokens:         &'a [Token],
    current:        usize,
    /// How many function bodies enclose the cursor; `return` needs at least one.
    function_depth: usize,
    errors:         Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               function_depth: 0,
               errors: Vec::new() }
    }

    /// Parses declarations until the end of input.
    ///
    /// Grammar: `program := declaration* EOF`
    #[must_use]
    pub fn parse(mut self) -> Parsed {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.declaration_or_recover() {
                statements.push(statement);
            }
        }

        trace!(statements = statements.len(), errors = self.errors.len(), "parsed program");
        Parsed { statements,
                 errors: self.errors }
    }

    /// Parses one declaration, turning a syntax error into a recorded
    /// diagnostic followed by synchronization.
    ///
    /// Returns `None` when the declaration was malformed and skipped.
    pub(in crate::interpreter::parser) fn declaration_or_recover(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(statement) => Some(statement),
            Err(error) => {
                debug!(%error, "recovering from syntax error");
                self.errors.push(error);
                self.synchronize();
                None
            },
        }
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops right after a `;`, or right before a keyword that starts a
    /// declaration or statement.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            if matches!(self.peek().kind,
                        TokenKind::Func
                        | TokenKind::Create
                        | TokenKind::For
                        | TokenKind::If
                        | TokenKind::While
                        | TokenKind::Output
                        | TokenKind::Return)
            {
                return;
            }

            self.advance();
        }
    }

    /// Records a diagnostic that does not abort the current declaration.
    pub(in crate::interpreter::parser) fn report(&mut self, error: ParseError) {
        debug!(%error, "syntax diagnostic");
        self.errors.push(error);
    }

    /// Runs `parse_body` with the cursor marked as inside a function body.
    pub(in crate::interpreter::parser) fn in_function<T>(&mut self,
                                                         parse_body: impl FnOnce(&mut Self) -> T)
                                                         -> T {
        self.function_depth += 1;
        let result = parse_body(self);
        self.function_depth -= 1;
        result
    }

    /// Returns `true` while parsing inside at least one function body.
    pub(in crate::interpreter::parser) const fn inside_function(&self) -> bool {
        self.function_depth > 0
    }

    /// The token under the cursor.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'a Token {
        self.tokens.get(self.current).unwrap_or(&END_OF_INPUT)
    }

    /// The most recently consumed token.
    pub(in crate::interpreter::parser) fn previous(&self) -> &'a Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&END_OF_INPUT)
    }

    /// Consumes the current token, unless at the end, and returns it.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Returns `true` if the current token has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if it has any of the given kinds.
    pub(in crate::interpreter::parser) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|kind| self.check(*kind)) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &'static str)
                                                  -> ParseResult<&'a Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        let found = self.peek();
        Err(ParseError::ExpectedToken { message,
                                        found: found.describe(),
                                        line: found.line })
    }

    /// Returns `true` once the cursor reaches the end-of-input token.
    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, Expr, LiteralValue, LogicalOperator},
        interpreter::lexer::scan,
    };

    fn parse_source(source: &str) -> Parsed {
        parse(&scan(source).tokens)
    }

    fn single_expression(source: &str) -> Expr {
        let parsed = parse_source(source);
        assert!(parsed.is_ok(), "unexpected errors: {:?}", parsed.errors);
        match parsed.statements.as_slice() {
            [Stmt::Expression { expr }] => expr.clone(),
            other => panic!("expected one expression statement, got {other:?}"),
        }
    }

    fn number(value: f64) -> Box<Expr> {
        Box::new(Expr::Literal { value: LiteralValue::Number(value) })
    }

    #[test]
    fn empty_and_eof_less_input() {
        assert!(parse(&[]).statements.is_empty());
        assert!(parse_source("").statements.is_empty());
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expected = Expr::Binary { left:  number(1.0),
                                      op:    BinaryOperator::Add,
                                      right: Box::new(Expr::Binary { left:  number(2.0),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: number(3.0),
                                                                     line:  1, }),
                                      line:  1, };
        assert_eq!(single_expression("1 + 2 * 3;"), expected);
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expected = Expr::Binary { left:  Box::new(Expr::Binary { left:  number(1.0),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: number(2.0),
                                                                     line:  1, }),
                                      op:    BinaryOperator::Sub,
                                      right: number(3.0),
                                      line:  1, };
        assert_eq!(single_expression("1 - 2 - 3;"), expected);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let expr = single_expression("a or b and c;");
        let Expr::Logical { op, right, .. } = &expr else {
            panic!("expected logical expression");
        };
        assert_eq!(*op, LogicalOperator::Or);
        assert!(matches!(**right,
                         Expr::Logical { op: LogicalOperator::And,
                                         .. }));
    }

    #[test]
    fn assignment_is_right_associative() {
        let expr = single_expression("a = b = 1;");
        let Expr::Assign { name, value, .. } = &expr else {
            panic!("expected assignment");
        };
        assert_eq!(name, "a");
        assert!(matches!(**value, Expr::Assign { ref name, .. } if name == "b"));
    }

    #[test]
    fn invalid_assignment_target_is_an_error() {
        let parsed = parse_source("1 + 2 = 3; output 1;");
        assert_eq!(parsed.errors, vec![ParseError::InvalidAssignmentTarget { line: 1 }]);
        assert_eq!(parsed.statements.len(), 1);
    }

    #[test]
    fn chained_calls() {
        let expr = single_expression("f(1)(2, 3)();");
        let Expr::Call { callee, arguments, .. } = &expr else {
            panic!("expected call");
        };
        assert!(arguments.is_empty());
        let Expr::Call { callee, arguments, .. } = callee.as_ref() else {
            panic!("expected inner call");
        };
        assert_eq!(arguments.len(), 2);
        assert!(matches!(**callee, Expr::Call { .. }));
    }

    #[test]
    fn for_loop_is_lowered_to_while() {
        let parsed = parse_source("for (create i = 0; i < 3; i = i + 1) output i;");
        assert!(parsed.is_ok());
        let [Stmt::Block { statements }] = parsed.statements.as_slice() else {
            panic!("expected outer block, got {:?}", parsed.statements);
        };
        assert!(matches!(statements[0], Stmt::Create { ref name, .. } if name == "i"));
        let Stmt::While { body, .. } = &statements[1] else {
            panic!("expected while loop");
        };
        let Stmt::Block { statements: body } = body.as_ref() else {
            panic!("expected loop body block");
        };
        assert!(matches!(body[0], Stmt::Output { .. }));
        assert!(matches!(body[1], Stmt::Expression { expr: Expr::Assign { .. } }));
    }

    #[test]
    fn bare_for_loop_defaults_condition_to_true() {
        let parsed = parse_source("for (;;) output 1;");
        assert!(parsed.is_ok());
        let [Stmt::While { condition, body }] = parsed.statements.as_slice() else {
            panic!("expected a bare while loop, got {:?}", parsed.statements);
        };
        assert_eq!(*condition, Expr::Literal { value: LiteralValue::Bool(true) });
        assert!(matches!(body.as_ref(), Stmt::Output { .. }));
    }

    #[test]
    fn recovery_collects_several_errors() {
        let parsed = parse_source("create = 1;\noutput 1;\noutput (2;\noutput 3;");
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.errors[0].line(), 1);
        assert_eq!(parsed.errors[1].line(), 3);
        assert_eq!(parsed.statements.len(), 2);
    }

    #[test]
    fn missing_semicolon_reports_found_token() {
        let parsed = parse_source("output 1");
        assert_eq!(parsed.errors,
                   vec![ParseError::ExpectedToken { message: "Expect ';' after value.",
                                                    found:   "end".to_string(),
                                                    line:    1, }]);
    }

    #[test]
    fn errors_inside_blocks_keep_the_rest_of_the_block() {
        let parsed = parse_source("{ output ; output 2; }");
        assert_eq!(parsed.errors.len(), 1);
        let [Stmt::Block { statements }] = parsed.statements.as_slice() else {
            panic!("expected block, got {:?}", parsed.statements);
        };
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn return_outside_function_is_rejected() {
        let parsed = parse_source("return 1;");
        assert_eq!(parsed.errors, vec![ParseError::ReturnOutsideFunction { line: 1 }]);
        assert!(parse_source("func f() { return 1; }").is_ok());
        assert!(parse_source("func f() { if (true) { return; } }").is_ok());
    }

    #[test]
    fn too_many_arguments_is_reported_but_parsed() {
        let arguments = vec!["1"; MAX_ARGUMENTS + 1].join(", ");
        let parsed = parse_source(&format!("f({arguments});"));
        assert_eq!(parsed.errors,
                   vec![ParseError::TooManyArguments { max:  MAX_ARGUMENTS,
                                                       line: 1, }]);
        assert_eq!(parsed.statements.len(), 1);
    }

    #[test]
    fn function_declaration_shape() {
        let parsed = parse_source("func add(x, y) { return x + y; }");
        let [Stmt::Function(decl)] = parsed.statements.as_slice() else {
            panic!("expected function, got {:?}", parsed.statements);
        };
        assert_eq!(decl.name, "add");
        assert_eq!(decl.params, vec!["x".to_string(), "y".to_string()]);
        assert!(matches!(decl.body.as_slice(), [Stmt::Return { value: Some(_), .. }]));
    }
}
