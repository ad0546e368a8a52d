use crate::{
    ast::{Block, Expr, Statement},
    interpreter::{
        environment::EnvironmentRef,
        evaluator::core::{Context, EvalResult},
    },
};

impl Context<'_> {
    /// Executes the statements of a block in order.
    ///
    /// The block's value is the value of the last statement executed. Empty
    /// statements are skipped and leave that value untouched; an empty block
    /// yields `0`. Blocks share the environment they run in.
    pub(crate) fn exec_block(&mut self, block: &Block, env: &EnvironmentRef) -> EvalResult<i64> {
        let mut result = 0;
        for statement in &block.statements {
            if matches!(statement, Statement::Empty) {
                continue;
            }
            result = self.exec(statement, env)?;
        }
        Ok(result)
    }

    /// Executes an `if` statement.
    ///
    /// Any nonzero condition is true. Without an `else`, a false condition
    /// yields `0` and neither branch runs.
    pub(crate) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Statement,
                          else_branch: Option<&Statement>,
                          env: &EnvironmentRef)
                          -> EvalResult<i64> {
        if self.eval(condition, env)? != 0 {
            self.exec(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.exec(else_branch, env)
        } else {
            Ok(0)
        }
    }

    /// Executes a `while` loop.
    ///
    /// Yields the value of the last body execution, or `0` if the body never
    /// ran.
    pub(crate) fn exec_while(&mut self,
                             condition: &Expr,
                             body: &Statement,
                             env: &EnvironmentRef)
                             -> EvalResult<i64> {
        let mut result = 0;
        while self.eval(condition, env)? != 0 {
            result = self.exec(body, env)?;
        }
        Ok(result)
    }
}
