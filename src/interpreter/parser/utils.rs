use crate::interpreter::{
    lexer::Token,
    parser::core::{ParseResult, Parser},
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// Shared by argument lists and parameter lists. The opening delimiter
    /// must already be consumed; the closing one is consumed here. An
    /// immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := [item ("," item)*] closing`
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           closing: &Token,
                                           mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>)
                                           -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.current == *closing {
            self.advance()?;
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            if self.current == Token::Comma {
                self.advance()?;
            } else if self.current == *closing {
                self.advance()?;
                return Ok(items);
            } else {
                return Err(self.unexpected(format!("',' or '{closing}'")));
            }
        }
    }
}
