use std::rc::Rc;

use crate::{
    ast::{FunctionDecl, Return, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Returns `true` if `token` can begin a statement.
///
/// Statement lists keep parsing while this holds; anything else ends the list
/// and is left for the enclosing rule (`return` or `}`).
#[must_use]
pub const fn starts_statement(token: &Token) -> bool {
    matches!(token,
             Token::Identifier(_)
             | Token::LBrace
             | Token::If
             | Token::While
             | Token::Fn
             | Token::Semicolon)
}

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an assignment `x = expression;`
    /// - a call statement `f(arguments);`
    /// - a block `{ ... }`
    /// - an `if` or `while` statement
    /// - a function declaration
    /// - an empty statement `;`
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current {
            Token::Identifier(_) => self.parse_assignment_or_call(),
            Token::LBrace => Ok(Statement::Block(self.parse_block()?)),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::Fn => self.parse_function_declaration(),
            Token::Semicolon => {
                self.advance()?;
                Ok(Statement::Empty)
            },
            _ => Err(self.unexpected("statement")),
        }
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// The token after the identifier decides: `(` makes it a call statement,
    /// anything else must be the `=` of an assignment.
    ///
    /// Grammar:
    /// ```text
    ///     assignment     := IDENT "=" expression ";"
    ///     call_statement := IDENT "(" arguments ")" ";"
    /// ```
    fn parse_assignment_or_call(&mut self) -> ParseResult<Statement> {
        let (name, position) = self.expect_identifier()?;

        if self.current == Token::LParen {
            let call = self.parse_call_suffix(name, position)?;
            self.expect(&Token::Semicolon)?;
            return Ok(Statement::Expression(call));
        }

        self.expect(&Token::Equals)?;
        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;

        Ok(Statement::Assign { name,
                               value,
                               position })
    }

    /// Parses `if (condition) statement [else statement]`.
    ///
    /// An `else` binds to the nearest `if`.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let position = self.expect(&Token::If)?;
        self.expect(&Token::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RParen)?;

        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.current == Token::Else {
            self.advance()?;
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           position })
    }

    /// Parses `while (condition) statement`.
    fn parse_while(&mut self) -> ParseResult<Statement> {
        let position = self.expect(&Token::While)?;
        self.expect(&Token::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&Token::RParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(Statement::While { condition,
                              body,
                              position })
    }

    /// Parses a function declaration.
    ///
    /// Grammar: `fn IDENT "(" [IDENT ("," IDENT)*] ")" "{" program "}"`
    ///
    /// The body is a full program, so it must end in `return`.
    fn parse_function_declaration(&mut self) -> ParseResult<Statement> {
        let position = self.expect(&Token::Fn)?;
        let (name, _) = self.expect_identifier()?;

        self.expect(&Token::LParen)?;
        let params = self.parse_comma_separated(&Token::RParen, |parser| {
                             parser.expect_identifier().map(|(param, _)| param)
                         })?;

        self.expect(&Token::LBrace)?;
        let body = self.parse_program()?;
        self.expect(&Token::RBrace)?;

        Ok(Statement::FunctionDecl(Rc::new(FunctionDecl { name,
                                                          params,
                                                          body,
                                                          position })))
    }

    /// Parses `return expression;`.
    pub(super) fn parse_return(&mut self) -> ParseResult<Return> {
        let position = self.expect(&Token::Return)?;
        let value = self.parse_expression()?;
        self.expect(&Token::Semicolon)?;

        Ok(Return { value, position })
    }
}
