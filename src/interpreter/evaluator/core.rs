use std::io::Write;

use crate::{
    ast::{Expr, Program, Statement},
    config::{DEFAULT_MAX_CALL_DEPTH, ScopeMode},
    error::RuntimeError,
    interpreter::environment::EnvironmentRef,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state shared by a whole run.
///
/// Variables and functions live in the environment chain, not here; the
/// context only carries the scoping mode and the sink native functions write
/// their output to.
pub struct Context<'o> {
    scope_mode:                ScopeMode,
    output:                    &'o mut dyn Write,
    pub(crate) call_depth:     usize,
    pub(crate) max_call_depth: usize,
}

impl<'o> Context<'o> {
    /// Creates a context writing native output to `output`.
    #[must_use]
    pub fn new(scope_mode: ScopeMode, output: &'o mut dyn Write) -> Self {
        Self { scope_mode,
               output,
               call_depth: 0,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }

    /// Replaces the bound on nested script function calls.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

impl Context<'_> {
    /// The scoping mode of this run.
    #[must_use]
    pub const fn scope_mode(&self) -> ScopeMode {
        self.scope_mode
    }

    /// The sink for native function output.
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Evaluates a program: runs the body for its side effects, then returns
    /// the value of the `return` statement.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     ScanPolicy, ScopeMode,
    ///     interpreter::{environment::Environment, evaluator::core::Context},
    ///     parse,
    /// };
    ///
    /// let program = parse("x = 4; return x * x;", ScanPolicy::Recover).unwrap().program;
    /// let root = Environment::new_root();
    /// let mut output = Vec::new();
    /// let mut context = Context::new(ScopeMode::CallSite, &mut output);
    ///
    /// assert_eq!(context.eval_program(&program, &root).unwrap(), 16);
    /// assert_eq!(root.borrow().lookup_variable("x"), Some(4));
    /// ```
    pub fn eval_program(&mut self, program: &Program, env: &EnvironmentRef) -> EvalResult<i64> {
        self.exec_block(&program.body, env)?;
        self.eval(&program.return_stmt.value, env)
    }

    /// Evaluates an expression in `env`.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right.
    ///
    /// # Errors
    /// - `UndefinedVariable` / `UndefinedFunction` when a name is bound nowhere
    ///   along the scope chain.
    /// - `DivisionByZero`.
    /// - Any error raised inside a called function.
    pub fn eval(&mut self, expr: &Expr, env: &EnvironmentRef) -> EvalResult<i64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Ident { name, position } => {
                env.borrow()
                   .lookup_variable(name)
                   .ok_or_else(|| RuntimeError::UndefinedVariable { name:     name.clone(),
                                                                    position: *position, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::FunctionCall(call) => self.eval_call(call, env),
        }
    }

    /// Executes a statement in `env` and returns its value.
    ///
    /// Assignments yield the stored value, declarations yield `0`, calls yield
    /// their result, and compound statements yield the value described on
    /// their own evaluation functions.
    ///
    /// # Errors
    /// Propagates every error raised while evaluating nested expressions.
    pub fn exec(&mut self, statement: &Statement, env: &EnvironmentRef) -> EvalResult<i64> {
        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().define_variable(name, value);
                Ok(value)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch.as_deref(), env),
            Statement::While { condition, body, .. } => self.exec_while(condition, body, env),
            Statement::Block(block) => self.exec_block(block, env),
            Statement::Expression(call) => self.eval_call(call, env),
            Statement::FunctionDecl(decl) => {
                self.declare_function(decl, env);
                Ok(0)
            },
            Statement::Empty => Ok(0),
        }
    }
}
