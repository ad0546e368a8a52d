use crate::{
    ast::{Expr, Position, Program},
    config::ScanPolicy,
    error::ParseError,
    interpreter::lexer::{Scanner, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed script together with the scan warnings collected on the way.
#[derive(Debug)]
pub struct Parsed {
    /// The program tree.
    pub program:  Program,
    /// Stray characters that were skipped under [`ScanPolicy::Recover`].
    pub warnings: Vec<ParseError>,
}

/// Parses a whole script.
///
/// The script must be a complete program (statements followed by `return`)
/// and nothing may follow it. Tokens after the final `return` are a syntax
/// error rather than being silently ignored.
///
/// # Errors
/// Returns the first scan or syntax error encountered.
///
/// # Example
/// ```
/// use calc::{parse, ScanPolicy};
///
/// let parsed = parse("x = 1; return x;", ScanPolicy::Recover).unwrap();
/// assert_eq!(parsed.program.body.statements.len(), 1);
///
/// assert!(parse("x = 1;", ScanPolicy::Recover).is_err());
/// ```
pub fn parse(source: &str, policy: ScanPolicy) -> ParseResult<Parsed> {
    let mut parser = Parser::new(source, policy)?;
    let program = parser.parse_program()?;
    parser.expect(&Token::Eof)?;

    Ok(Parsed { program,
                warnings: parser.scanner.into_warnings() })
}

/// Recursive-descent parser with one token of lookahead.
///
/// Tokens are pulled from the [`Scanner`] on demand; only the current token is
/// kept.
pub struct Parser<'src> {
    pub(super) scanner:  Scanner<'src>,
    pub(super) current:  Token,
    pub(super) position: Position,
}

impl<'src> Parser<'src> {
    /// Creates a parser and scans the first token.
    ///
    /// # Errors
    /// Fails if the very first token cannot be scanned.
    pub fn new(source: &'src str, policy: ScanPolicy) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source, policy);
        let (current, position) = scanner.next_token()?;

        Ok(Self { scanner,
                  current,
                  position })
    }
}

impl Parser<'_> {
    /// Parses a program: a statement list followed by a mandatory `return`.
    ///
    /// Grammar: `program := statement* return_statement`
    ///
    /// Used both for whole scripts and for function bodies.
    ///
    /// # Errors
    /// Returns the first syntax error, for instance a missing `return`.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let body = self.parse_statement_list()?;
        let return_stmt = self.parse_return()?;

        Ok(Program { body,
                     return_stmt })
    }

    /// Parses a full expression.
    ///
    /// Grammar: `expression := comparison`
    ///
    /// # Errors
    /// Returns the first syntax error inside the expression.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_comparison()
    }

    /// Moves to the next token, returning the one that was current.
    pub(super) fn advance(&mut self) -> ParseResult<(Token, Position)> {
        let (next, next_position) = self.scanner.next_token()?;
        let token = std::mem::replace(&mut self.current, next);
        let position = std::mem::replace(&mut self.position, next_position);

        Ok((token, position))
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// Only meaningful for tokens without a payload.
    pub(super) fn expect(&mut self, expected: &Token) -> ParseResult<Position> {
        if self.current != *expected {
            return Err(self.unexpected(format!("'{expected}'")));
        }
        let (_, position) = self.advance()?;
        Ok(position)
    }

    /// Consumes an identifier and returns its name and position.
    pub(super) fn expect_identifier(&mut self) -> ParseResult<(String, Position)> {
        let Token::Identifier(name) = &mut self.current else {
            return Err(self.unexpected("identifier"));
        };
        let name = std::mem::take(name);
        let (_, position) = self.advance()?;

        Ok((name, position))
    }

    /// Builds an error for the current token.
    pub(super) fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.into(),
                                      found:    self.current.describe(),
                                      position: self.position, }
    }
}
