use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Arithmetic wraps on 64-bit overflow. Division truncates toward zero.
    /// Comparisons yield `1` for true and `0` for false.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when dividing by `0`.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let position = Position::default();
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, -7, 2, position).unwrap(), -3);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Less, 1, 2, position).unwrap(), 1);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1, 0, position).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       position: Position)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        match op {
            Add => Ok(left.wrapping_add(right)),
            Sub => Ok(left.wrapping_sub(right)),
            Mul => Ok(left.wrapping_mul(right)),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(left.wrapping_div(right))
            },
            Less => Ok(i64::from(left < right)),
            Greater => Ok(i64::from(left > right)),
            Equal => Ok(i64::from(left == right)),
            NotEqual => Ok(i64::from(left != right)),
        }
    }
}
