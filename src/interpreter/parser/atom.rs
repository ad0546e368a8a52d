use crate::{
    ast::{Expr, FunctionCall, Position},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an atom, the tightest-binding operand form.
    ///
    /// Grammar:
    /// ```text
    ///     atom := IDENT [ "(" arguments ")" ]
    ///           | "(" expression ")"
    ///           | NUMBER
    /// ```
    /// There is no unary minus; `0 - x` negates.
    pub(super) fn parse_atom(&mut self) -> ParseResult<Expr> {
        match self.current {
            Token::Identifier(_) => {
                let (name, position) = self.expect_identifier()?;
                if self.current == Token::LParen {
                    Ok(Expr::FunctionCall(self.parse_call_suffix(name, position)?))
                } else {
                    Ok(Expr::Ident { name, position })
                }
            },
            Token::Number(value) => {
                let (_, position) = self.advance()?;
                Ok(Expr::Number { value, position })
            },
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            },
            _ => Err(ParseError::UnexpectedSymbol { found:    self.current.describe(),
                                                    position: self.position, }),
        }
    }

    /// Parses the argument list of a call whose name was already consumed.
    ///
    /// Grammar: `"(" [expression ("," expression)*] ")"`
    pub(super) fn parse_call_suffix(&mut self,
                                    name: String,
                                    position: Position)
                                    -> ParseResult<FunctionCall> {
        self.expect(&Token::LParen)?;
        let arguments = self.parse_comma_separated(&Token::RParen, Self::parse_expression)?;

        Ok(FunctionCall { name,
                          arguments,
                          position })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ScanPolicy,
        ast::{Expr, Position},
        error::ParseError,
        interpreter::parser::core::Parser,
    };

    fn parse_expr(source: &str) -> Result<Expr, ParseError> {
        Parser::new(source, ScanPolicy::FailFast)?.parse_expression()
    }

    #[test]
    fn unary_minus_is_not_an_operand() {
        assert_eq!(parse_expr("-x").unwrap_err(),
                   ParseError::UnexpectedSymbol { found:    "'-'".to_string(),
                                                  position: Position::new(1, 1), });
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(parse_expr("(1 + 2").unwrap_err(),
                   ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    "'<end of file>'".to_string(),
                                                 position: Position::new(1, 7), });
    }

    #[test]
    fn argument_lists_need_commas() {
        assert_eq!(parse_expr("f(1 2)").unwrap_err(),
                   ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                 found:    "number 2".to_string(),
                                                 position: Position::new(1, 5), });
    }

    #[test]
    fn identifier_and_number_atoms() {
        assert_eq!(parse_expr("abc").unwrap(),
                   Expr::Ident { name:     "abc".to_string(),
                                 position: Position::new(1, 1), });
        assert_eq!(parse_expr("  17").unwrap(),
                   Expr::Number { value:    17,
                                  position: Position::new(1, 3), });
    }
}
