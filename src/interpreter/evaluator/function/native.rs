use tracing::debug;

use crate::{
    ast::{Expr, Position},
    interpreter::{
        environment::{Callable, EnvironmentRef, NativeFunction},
        evaluator::{
            core::{Context, EvalResult},
            function::{assert, print},
        },
    },
};

/// Signature of a host routine callable from scripts.
///
/// A native receives the run context, the caller's environment, the
/// unevaluated argument expressions and the call position. It decides whether
/// and how to evaluate each argument, performs its side effect through
/// [`Context::output`], and returns the call's value.
pub type NativeFn = fn(&mut Context<'_>, &EnvironmentRef, &[Expr], Position) -> EvalResult<i64>;

/// Defines the natives bound into every root environment.
///
/// Produces `NATIVE_TABLE` (name and routine for each entry) and
/// `NATIVE_FUNCTIONS` (the names alone).
macro_rules! native_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct NativeDef {
            name: &'static str,
            func: NativeFn,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, func: $func },
            )*
        ];
        /// Names of the natives every run starts with.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "print"  => print::print,
    "assert" => assert::assert_fn,
}

/// Binds every entry of the native table into `env`.
pub fn register_natives(env: &EnvironmentRef) {
    for native in NATIVE_TABLE {
        register_native(env, native.name, native.func);
    }
}

/// Binds a single native into `env` under `name`, shadowing any function
/// bound there before.
pub fn register_native(env: &EnvironmentRef, name: &str, func: NativeFn) {
    debug!(name, "registering native function");
    env.borrow_mut().define_function(name, Callable::Native(NativeFunction(func)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::environment::Environment;

    #[test]
    fn every_table_entry_is_registered() {
        let root = Environment::new_root();
        register_natives(&root);
        for name in NATIVE_FUNCTIONS {
            assert!(matches!(root.borrow().lookup_function(name), Some(Callable::Native(_))),
                    "{name} missing");
        }
    }

    #[test]
    fn later_registration_shadows_earlier() {
        fn seven(_: &mut Context<'_>, _: &EnvironmentRef, _: &[Expr], _: Position) -> EvalResult<i64> {
            Ok(7)
        }

        let root = Environment::new_root();
        register_natives(&root);
        register_native(&root, "print", seven);

        let Some(Callable::Native(native)) = root.borrow().lookup_function("print") else {
            panic!("print should stay a native");
        };
        let mut output = Vec::new();
        let mut context = Context::new(crate::ScopeMode::CallSite, &mut output);
        assert_eq!((native.0)(&mut context, &root, &[], Position::default()).unwrap(), 7);
        assert!(output.is_empty());
    }
}
