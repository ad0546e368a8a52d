use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use crate::{ast::FunctionDecl, interpreter::evaluator::function::native::NativeFn};

/// Shared handle to an environment.
///
/// Call scopes hold one to their parent; the root is held by the run.
pub type EnvironmentRef = Rc<RefCell<Environment>>;

/// Something that can be called by name.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A function declared in the script.
    User(UserFunction),
    /// A routine supplied by the host.
    Native(NativeFunction),
}

/// A script function bound in an environment.
#[derive(Debug, Clone)]
pub struct UserFunction {
    /// The declaration, shared with the AST.
    pub decl:  Rc<FunctionDecl>,
    /// The declaring scope, recorded only under lexical scoping. Weak, since
    /// that scope also owns this binding.
    pub scope: Option<Weak<RefCell<Environment>>>,
}

/// A host routine bound in an environment.
#[derive(Clone, Copy)]
pub struct NativeFunction(pub NativeFn);

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NativeFunction")
    }
}

/// One link of the scope chain.
///
/// Lookups walk outward through the parents and return the first match.
/// Writes always go to the local tables.
#[derive(Debug, Default)]
pub struct Environment {
    parent:    Option<EnvironmentRef>,
    variables: HashMap<String, i64>,
    functions: HashMap<String, Callable>,
}

impl Environment {
    /// Creates a root environment, the terminus of every lookup.
    #[must_use]
    pub fn new_root() -> EnvironmentRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment chained to `parent`.
    #[must_use]
    pub fn with_parent(parent: EnvironmentRef) -> EnvironmentRef {
        Rc::new(RefCell::new(Self { parent: Some(parent),
                                    ..Self::default() }))
    }

    /// Looks a variable up through the scope chain.
    ///
    /// The chain is walked iteratively; under call-site scoping it is as long
    /// as the call stack.
    #[must_use]
    pub fn lookup_variable(&self, name: &str) -> Option<i64> {
        self.find(|env| env.variables.get(name).copied())
    }

    /// Looks a function up through the scope chain.
    #[must_use]
    pub fn lookup_function(&self, name: &str) -> Option<Callable> {
        self.find(|env| env.functions.get(name).cloned())
    }

    /// Returns the first hit of `probe`, trying `self` and then each parent
    /// outward.
    fn find<T>(&self, probe: impl Fn(&Self) -> Option<T>) -> Option<T> {
        if let Some(found) = probe(self) {
            return Some(found);
        }

        let mut scope = self.parent.clone();
        while let Some(current) = scope {
            let current = current.borrow();
            if let Some(found) = probe(&*current) {
                return Some(found);
            }
            scope = current.parent.clone();
        }
        None
    }

    /// Binds a variable in this environment, replacing any local binding.
    /// Bindings in parent environments are left alone.
    pub fn define_variable(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Binds a function in this environment; the last binding wins.
    pub fn define_function(&mut self, name: &str, callable: Callable) {
        self.functions.insert(name.to_string(), callable);
    }

    /// The variables bound directly in this environment.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, i64> {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outward() {
        let root = Environment::new_root();
        root.borrow_mut().define_variable("x", 1);
        let middle = Environment::with_parent(Rc::clone(&root));
        middle.borrow_mut().define_variable("y", 2);
        let inner = Environment::with_parent(Rc::clone(&middle));

        let inner = inner.borrow();
        assert_eq!(inner.lookup_variable("x"), Some(1));
        assert_eq!(inner.lookup_variable("y"), Some(2));
        assert_eq!(inner.lookup_variable("z"), None);
    }

    #[test]
    fn writes_stay_local() {
        let root = Environment::new_root();
        root.borrow_mut().define_variable("x", 1);
        let inner = Environment::with_parent(Rc::clone(&root));
        inner.borrow_mut().define_variable("x", 2);

        assert_eq!(inner.borrow().lookup_variable("x"), Some(2));
        assert_eq!(root.borrow().lookup_variable("x"), Some(1));
        assert!(inner.borrow().variables().contains_key("x"));
    }

    #[test]
    fn lookup_survives_long_chains() {
        let root = Environment::new_root();
        root.borrow_mut().define_variable("x", 7);
        let mut chain = vec![root];
        for depth in 0..100_000 {
            let next = Environment::with_parent(Rc::clone(&chain[chain.len() - 1]));
            next.borrow_mut().define_variable("depth", depth);
            chain.push(next);
        }

        let innermost = chain[chain.len() - 1].borrow();
        assert_eq!(innermost.lookup_variable("x"), Some(7));
        assert_eq!(innermost.lookup_variable("depth"), Some(99_999));
        assert_eq!(innermost.lookup_variable("y"), None);
        drop(innermost);

        // Innermost first, so no drop has to recurse through the chain.
        while chain.pop().is_some() {}
    }

    #[test]
    fn functions_are_found_through_parents() {
        fn one(_: &mut crate::interpreter::evaluator::core::Context<'_>,
               _: &EnvironmentRef,
               _: &[crate::ast::Expr],
               _: crate::ast::Position)
               -> crate::interpreter::evaluator::core::EvalResult<i64> {
            Ok(1)
        }

        let root = Environment::new_root();
        root.borrow_mut().define_function("f", Callable::Native(NativeFunction(one)));
        let inner = Environment::with_parent(Rc::clone(&root));

        assert!(matches!(inner.borrow().lookup_function("f"), Some(Callable::Native(_))));
        assert!(inner.borrow().lookup_function("g").is_none());
    }
}
