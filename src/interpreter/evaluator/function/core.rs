use std::rc::Rc;

use tracing::{debug, trace};

/// Remaining stack below which a call switches to a fresh stack segment.
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each new stack segment.
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

use crate::{
    ast::{FunctionCall, FunctionDecl},
    config::ScopeMode,
    error::RuntimeError,
    interpreter::{
        environment::{Callable, Environment, EnvironmentRef, UserFunction},
        evaluator::core::{Context, EvalResult},
    },
};

impl Context<'_> {
    /// Evaluates a function call in `env`.
    ///
    /// The name is resolved through the scope chain. Script functions follow
    /// [`Context::call_user_function`]; natives receive the caller's
    /// environment and the unevaluated arguments.
    ///
    /// # Errors
    /// - `UndefinedFunction` if the name is bound nowhere along the chain.
    /// - Any error raised by the callee or by its arguments.
    pub(crate) fn eval_call(&mut self, call: &FunctionCall, env: &EnvironmentRef) -> EvalResult<i64> {
        let callable = env.borrow().lookup_function(&call.name);
        let Some(callable) = callable else {
            return Err(RuntimeError::UndefinedFunction { name:     call.name.clone(),
                                                         position: call.position, });
        };

        trace!(name = %call.name, position = %call.position, "calling function");
        match callable {
            Callable::User(function) => self.call_user_function(&function, call, env),
            Callable::Native(native) => (native.0)(self, env, &call.arguments, call.position),
        }
    }

    /// Calls a script function.
    ///
    /// A fresh environment is created for the call. Its parent is the caller's
    /// environment under [`ScopeMode::CallSite`] and the declaring environment
    /// under [`ScopeMode::Lexical`]. Arguments are evaluated left to right in
    /// the caller's environment and bound as locals of the new one; parameters
    /// without an argument are bound to `0` and surplus arguments are evaluated
    /// and then dropped.
    ///
    /// The body runs on a stack that grows on demand, so recursion depth is
    /// bounded only by [`Config::max_call_depth`](crate::Config).
    fn call_user_function(&mut self,
                          function: &UserFunction,
                          call: &FunctionCall,
                          env: &EnvironmentRef)
                          -> EvalResult<i64> {
        let parent = match &function.scope {
            None => Rc::clone(env),
            Some(scope) => scope.upgrade().ok_or_else(|| RuntimeError::DetachedFunction {
                name:     function.decl.name.clone(),
                position: call.position,
            })?,
        };

        let arguments = call.arguments
                            .iter()
                            .map(|argument| self.eval(argument, env))
                            .collect::<EvalResult<Vec<_>>>()?;

        let frame = Environment::with_parent(parent);
        {
            let mut frame = frame.borrow_mut();
            let mut arguments = arguments.into_iter();
            for param in &function.decl.params {
                frame.define_variable(param, arguments.next().unwrap_or(0));
            }
        }

        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { name:     function.decl.name.clone(),
                                                         limit:    self.max_call_depth,
                                                         position: call.position, });
        }

        self.call_depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
                         self.eval_program(&function.decl.body, &frame)
                     });
        self.call_depth -= 1;
        result
    }

    /// Binds a function declaration in `env`, replacing any local binding
    /// with the same name.
    pub(crate) fn declare_function(&mut self, decl: &Rc<FunctionDecl>, env: &EnvironmentRef) {
        let scope = match self.scope_mode() {
            ScopeMode::CallSite => None,
            ScopeMode::Lexical => Some(Rc::downgrade(env)),
        };
        debug!(name = %decl.name, params = decl.params.len(), position = %decl.position,
               "declaring function");

        let function = UserFunction { decl: Rc::clone(decl),
                                      scope };
        env.borrow_mut().define_function(&decl.name, Callable::User(function));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ScanPolicy,
        ast::{Position, Statement},
        parse,
    };

    fn run(source: &str, scope_mode: ScopeMode) -> EvalResult<i64> {
        let program = parse(source, ScanPolicy::FailFast).unwrap().program;
        let root = Environment::new_root();
        let mut output = Vec::new();
        Context::new(scope_mode, &mut output).eval_program(&program, &root)
    }

    #[test]
    fn missing_arguments_bind_to_zero() {
        let source = "fn f(a, b, c) { return a * 100 + b * 10 + c; } return f(1, 2);";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 120);
    }

    #[test]
    fn surplus_arguments_are_evaluated_then_dropped() {
        let source = "fn f(a) { return a; } return f(1, 2 / 0);";
        assert!(matches!(run(source, ScopeMode::CallSite),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert_eq!(run("fn f(a) { return a; } return f(4, 5);", ScopeMode::CallSite).unwrap(),
                   4);
    }

    #[test]
    fn arguments_are_evaluated_in_the_callers_scope() {
        let source = "a = 3; fn f(a, b) { return b; } return f(10, a);";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 3);
        assert_eq!(run(source, ScopeMode::Lexical).unwrap(), 3);
    }

    #[test]
    fn calls_do_not_leak_locals() {
        let source = "fn f() { t = 1; return t; } x = f(); return t;";
        assert!(matches!(run(source, ScopeMode::CallSite),
                         Err(RuntimeError::UndefinedVariable { ref name, .. }) if name == "t"));
    }

    #[test]
    fn callee_sees_caller_locals_only_at_call_site() {
        let source = "fn f() { return secret; } fn g() { secret = 42; return f(); } return g();";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 42);
        assert!(matches!(run(source, ScopeMode::Lexical),
                         Err(RuntimeError::UndefinedVariable { .. })));
    }

    #[test]
    fn recursion_works_in_both_modes() {
        let source = "fn fact(n) { r = 1; if (n > 1) r = n * fact(n - 1); return r; } return fact(10);";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 3_628_800);
        assert_eq!(run(source, ScopeMode::Lexical).unwrap(), 3_628_800);
    }

    #[test]
    fn nested_declarations_are_local_to_the_call() {
        let source = "fn outer() { fn inner() { return 7; } return inner(); } x = outer(); return inner();";
        assert_eq!(run("fn outer() { fn inner() { return 7; } return inner(); } return outer();",
                       ScopeMode::Lexical).unwrap(),
                   7);
        assert!(matches!(run(source, ScopeMode::CallSite),
                         Err(RuntimeError::UndefinedFunction { ref name, .. }) if name == "inner"));
    }

    #[test]
    fn deep_recursion_grows_the_stack() {
        let source = "fn f(n) { r = 0; if (n > 0) r = f(n - 1) + 1; return r; } return f(10000);";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 10_000);
        assert_eq!(run(source, ScopeMode::Lexical).unwrap(), 10_000);
    }

    #[test]
    fn call_depth_is_bounded() {
        let program = parse("fn f(n) { return f(n + 1); } return f(0);", ScanPolicy::FailFast).unwrap()
                                                                                             .program;
        let root = Environment::new_root();
        let mut output = Vec::new();
        let error = Context::new(ScopeMode::CallSite, &mut output).with_max_call_depth(50)
                                                                  .eval_program(&program, &root)
                                                                  .unwrap_err();
        assert!(matches!(error,
                         RuntimeError::CallDepthExceeded { ref name, limit: 50, .. } if name == "f"),
                "{error:?}");
    }

    #[test]
    fn call_depth_is_restored_after_each_call() {
        let program = parse("fn f() { return 1; } i = 0; while (i < 10) i = i + f(); return i;",
                            ScanPolicy::FailFast).unwrap()
                                                 .program;
        let root = Environment::new_root();
        let mut output = Vec::new();
        let mut context = Context::new(ScopeMode::CallSite, &mut output).with_max_call_depth(1);
        assert_eq!(context.eval_program(&program, &root).unwrap(), 10);
        assert_eq!(context.call_depth, 0);
    }

    #[test]
    fn redeclaration_replaces_the_binding() {
        let source = "fn f() { return 1; } a = f(); fn f() { return 2; } return a * 10 + f();";
        assert_eq!(run(source, ScopeMode::CallSite).unwrap(), 12);
    }

    #[test]
    fn lexical_function_with_dropped_scope_is_detached() {
        let program = parse("fn f() { return 1; } return 0;", ScanPolicy::FailFast).unwrap()
                                                                                    .program;
        let mut output = Vec::new();
        let mut context = Context::new(ScopeMode::Lexical, &mut output);
        let Statement::FunctionDecl(decl) = &program.body.statements[0] else {
            panic!("expected a declaration");
        };

        let caller = Environment::new_root();
        {
            let declaring = Environment::new_root();
            context.declare_function(decl, &declaring);
            let function = declaring.borrow().lookup_function("f").unwrap();
            caller.borrow_mut().define_function("f", function);
        }

        let call = FunctionCall { name:      "f".to_string(),
                                  arguments: Vec::new(),
                                  position:  Position::new(4, 2), };
        let error = context.eval_call(&call, &caller).unwrap_err();
        assert!(matches!(error,
                         RuntimeError::DetachedFunction { ref name, position }
                         if name == "f" && position == Position::new(4, 2)));
    }
}
