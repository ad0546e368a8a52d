use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        environment::EnvironmentRef,
        evaluator::core::{Context, EvalResult},
    },
};

/// Checks that every argument is nonzero.
///
/// Arguments are evaluated left to right and evaluation stops at the first
/// zero, which fails with `AssertionFailed` at the call position. Returns `1`
/// when all arguments hold, including when there are none.
///
/// # Example
/// ```
/// use calc::{Config, Interpreter};
///
/// let interpreter = Interpreter::new(Config::default());
///
/// assert!(interpreter.run("return assert(1 < 2, 3);", &mut std::io::sink()).is_ok());
/// assert!(interpreter.run("return assert(1, 0);", &mut std::io::sink()).is_err());
/// ```
pub fn assert_fn(context: &mut Context<'_>,
                 env: &EnvironmentRef,
                 args: &[Expr],
                 position: Position)
                 -> EvalResult<i64> {
    for arg in args {
        if context.eval(arg, env)? == 0 {
            return Err(RuntimeError::AssertionFailed { position });
        }
    }
    Ok(1)
}
