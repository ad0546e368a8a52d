use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses relational and equality operators.
    ///
    /// Comparisons are left-associative and do not chain: `a < b < c` parses
    /// as `(a < b) < c`, comparing the 0/1 result of the first comparison.
    ///
    /// Grammar: `comparison := additive (("<" | ">" | "==" | "!=") additive)*`
    pub(super) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && is_comparison_op(op)
        {
            let (_, position) = self.advance()?;
            let right = self.parse_additive()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }

        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(super) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (_, position) = self.advance()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }

        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `multiplicative := atom (("*" | "/") atom)*`
    pub(super) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_atom()?;

        while let Some(op) = token_to_binary_operator(&self.current)
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (_, position) = self.advance()?;
            let right = self.parse_atom()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }

        Ok(left)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use calc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison level.
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}
