use crate::{
    ast::Block,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            statement::starts_statement,
        },
    },
};

impl Parser<'_> {
    /// Parses statements for as long as the current token can start one.
    ///
    /// Grammar: `statement_list := statement*`
    pub(super) fn parse_statement_list(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();
        while starts_statement(&self.current) {
            statements.push(self.parse_statement()?);
        }

        Ok(Block { statements })
    }

    /// Parses a block delimited by braces.
    ///
    /// Grammar: `block := "{" statement_list "}"`
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(&Token::LBrace)?;
        let block = self.parse_statement_list()?;
        self.expect(&Token::RBrace)?;

        Ok(block)
    }
}
