use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a single declaration.
    ///
    /// A declaration is a variable declaration (`create`), a function
    /// declaration (`func`), or any other statement.
    ///
    /// Grammar: `declaration := varDecl | funcDecl | statement`
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            if self.match_kinds(&[TokenKind::Create]) {
                return self.var_declaration();
            }
            if self.match_kinds(&[TokenKind::Func]) {
                return self.function_declaration();
            }

            self.statement()
        })
    }

    /// Parses a variable declaration after the `create` keyword.
    ///
    /// Grammar: `varDecl := "create" IDENTIFIER ( "=" expression )? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kinds(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Create { name: name.lexeme.clone(),
                          initializer,
                          line: name.line })
    }

    /// Parses a function declaration after the `func` keyword.
    ///
    /// Grammar: `funcDecl := "func" IDENTIFIER "(" parameters? ")" block`
    ///
    /// More than [`MAX_ARGUMENTS`](super::core::MAX_ARGUMENTS) parameters is
    /// reported but does not abort the declaration.
    fn function_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let params = self.comma_separated(|parser| parser.identifier("Expect parameter name."),
                                          |max, line| ParseError::TooManyParameters { max,
                                                                                      line })?;

        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.in_function(Self::block)?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name: name.lexeme.clone(),
                                                 params,
                                                 body,
                                                 line: name.line })))
    }

    /// Parses a statement that is not a declaration.
    ///
    /// Grammar:
    /// ```text
    ///     statement := forStmt | ifStmt | whileStmt | outputStmt
    ///                | returnStmt | block | exprStmt
    /// ```
    pub(in crate::interpreter::parser) fn statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            if self.match_kinds(&[TokenKind::For]) {
                return self.for_statement();
            }
            if self.match_kinds(&[TokenKind::If]) {
                return self.if_statement();
            }
            if self.match_kinds(&[TokenKind::While]) {
                return self.while_statement();
            }
            if self.match_kinds(&[TokenKind::Output]) {
                return self.output_statement();
            }
            if self.match_kinds(&[TokenKind::Return]) {
                return self.return_statement();
            }
            if self.match_kinds(&[TokenKind::LeftBrace]) {
                return Ok(Stmt::Block { statements: self.block()? });
            }

            self.expression_statement()
        })
    }

    /// Parses a `for` loop and lowers it to a `while` loop.
    ///
    /// `for (init; cond; incr) body` becomes
    /// `{ init; while (cond) { body; incr } }`. A missing condition is the
    /// literal `true`; the outer block only exists when there is an
    /// initializer, and the inner block only when there is an increment.
    ///
    /// Grammar:
    /// `forStmt := "for" "(" ( varDecl | exprStmt | ";" ) expression? ";"
    /// expression? ")" statement`
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kinds(&[TokenKind::Semicolon]) {
            None
        } else if self.match_kinds(&[TokenKind::Create]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block { statements: vec![body, Stmt::Expression { expr: increment }] };
        }

        let condition =
            condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true) });
        body = Stmt::While { condition,
                             body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block { statements: vec![initializer, body] };
        }

        Ok(body)
    }

    /// Parses an `if` statement with an optional `else` branch.
    ///
    /// An `else` binds to the nearest preceding `if`.
    ///
    /// Grammar: `ifStmt := "if" "(" expression ")" statement ( "else" statement )?`
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kinds(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition,
                      then_branch,
                      else_branch })
    }

    /// Grammar: `whileStmt := "while" "(" expression ")" statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Grammar: `outputStmt := "output" expression ";"`
    fn output_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Output { expr })
    }

    /// Parses a `return` statement.
    ///
    /// Only allowed inside a function body.
    ///
    /// Grammar: `returnStmt := "return" expression? ";"`
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.previous().line;
        if !self.inside_function() {
            return Err(ParseError::ReturnOutsideFunction { line });
        }

        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { value, line })
    }

    /// Grammar: `exprStmt := expression ";"`
    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression { expr })
    }
}
