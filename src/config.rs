use clap::ValueEnum;

/// Decides which environment becomes the parent of a function call's scope.
///
/// The two modes are observably different:
///
/// ```
/// use calc::{Config, Interpreter, ScopeMode};
///
/// let source = "y = 100; fn f() { return y; } fn g() { y = 5; return f(); } return g();";
/// let run = |scope_mode| {
///     let config = Config { scope_mode,
///                           ..Config::default() };
///     Interpreter::new(config).run(source, &mut std::io::sink()).unwrap().result
/// };
///
/// assert_eq!(run(ScopeMode::CallSite), 5);
/// assert_eq!(run(ScopeMode::Lexical), 100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScopeMode {
    /// The callee's scope is chained to the caller's active scope, so a
    /// function sees the locals of every function on the call stack.
    #[default]
    CallSite,
    /// The callee's scope is chained to the scope the function was declared
    /// in.
    Lexical,
}

/// What the scanner does with characters that do not start any token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ScanPolicy {
    /// Log a warning, skip the character and keep scanning.
    #[default]
    Recover,
    /// Stop with [`ParseError::InvalidCharacter`](crate::error::ParseError).
    FailFast,
}

/// Default bound on nested script function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 20_000;

/// Run configuration for an [`Interpreter`](crate::Interpreter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How function call scopes are chained.
    pub scope_mode:     ScopeMode,
    /// How stray characters are handled.
    pub scan_policy:    ScanPolicy,
    /// How many script function calls may be active at once. Deeper calls
    /// fail with [`RuntimeError::CallDepthExceeded`](crate::error::RuntimeError).
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { scope_mode:     ScopeMode::default(),
               scan_policy:    ScanPolicy::default(),
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }
}
