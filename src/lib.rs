//! # calc
//!
//! calc is an embeddable interpreter for a minimal imperative language written
//! in Rust. Scripts work on 64-bit signed integers and support arithmetic,
//! comparisons, variables, `if`/`while`, user-defined functions and functions
//! supplied by the host.
//!
//! ```
//! let outcome = calc::run("fn add(a, b) { return a + b; } x = add(2, 3); return x * 2;").unwrap();
//!
//! assert_eq!(outcome.result, 10);
//! assert_eq!(outcome.variables["x"], 5);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::BTreeMap, fmt, io::Write};

use tracing::info;

pub use crate::{
    config::{Config, ScanPolicy, ScopeMode},
    error::Error,
    interpreter::{
        evaluator::function::native::NativeFn,
        parser::core::{Parsed, parse},
    },
};
use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment,
        evaluator::{
            core::Context,
            function::native::{register_native, register_natives},
        },
    },
};

/// Defines the structure of parsed code.
///
/// Declares the expression and statement trees built by the parser and walked
/// by the evaluator. Every node carries the source position used in error
/// messages.
pub mod ast;
/// Run configuration.
///
/// Selects how function scopes are chained and how the scanner treats stray
/// characters.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during scanning, parsing,
/// or evaluating code. Each error carries the position it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches line and column numbers for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, environments and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// What a successful run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The value of the top-level `return`.
    pub result:    i64,
    /// Variables bound in the root environment when the run ended.
    pub variables: BTreeMap<String, i64>,
    /// Stray characters skipped while scanning.
    pub warnings:  Vec<ParseError>,
}

impl fmt::Display for Outcome {
    /// Lists the final variables, one `name = value` per line in name order,
    /// followed by `Result: N`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.variables {
            writeln!(f, "{name} = {value}")?;
        }
        write!(f, "Result: {}", self.result)
    }
}

/// Runs scripts with a fixed configuration and set of natives.
///
/// Every run starts from a fresh root environment, so runs never see each
/// other's bindings.
#[derive(Debug, Clone)]
pub struct Interpreter {
    config:  Config,
    natives: Vec<(String, NativeFn)>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Interpreter {
    /// Creates an interpreter with the default natives (`print`, `assert`).
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config,
               natives: Vec::new() }
    }

    /// The configuration runs use.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Adds a native function to every later run.
    ///
    /// Host natives are bound after the default ones, so a name that is
    /// registered again shadows the earlier binding.
    ///
    /// # Example
    /// ```
    /// use calc::{
    ///     Interpreter,
    ///     ast::{Expr, Position},
    ///     interpreter::{
    ///         environment::EnvironmentRef,
    ///         evaluator::core::{Context, EvalResult},
    ///     },
    /// };
    ///
    /// fn answer(_: &mut Context<'_>, _: &EnvironmentRef, _: &[Expr], _: Position) -> EvalResult<i64> {
    ///     Ok(42)
    /// }
    ///
    /// let mut interpreter = Interpreter::default();
    /// interpreter.register_native("answer", answer);
    ///
    /// let outcome = interpreter.run("return answer() + 1;", &mut std::io::sink()).unwrap();
    /// assert_eq!(outcome.result, 43);
    /// ```
    pub fn register_native(&mut self, name: impl Into<String>, func: NativeFn) -> &mut Self {
        self.natives.push((name.into(), func));
        self
    }

    /// Evaluates an already parsed program.
    ///
    /// Native output goes to `output`. The warnings recorded in `parsed` are
    /// carried into the [`Outcome`].
    pub fn evaluate(&self, parsed: Parsed, output: &mut dyn Write) -> Result<Outcome, RuntimeError> {
        let root = Environment::new_root();
        register_natives(&root);
        for (name, func) in &self.natives {
            register_native(&root, name, *func);
        }

        let mut context = Context::new(self.config.scope_mode, output)
            .with_max_call_depth(self.config.max_call_depth);
        let result = context.eval_program(&parsed.program, &root)?;
        info!(result, "program finished");

        let variables = root.borrow()
                            .variables()
                            .iter()
                            .map(|(name, value)| (name.clone(), *value))
                            .collect();

        Ok(Outcome { result,
                     variables,
                     warnings: parsed.warnings })
    }

    /// Parses and evaluates `source`, writing native output to `output`.
    ///
    /// # Example
    /// ```
    /// use calc::{Config, Interpreter, error::{Error, RuntimeError}};
    ///
    /// let interpreter = Interpreter::new(Config::default());
    ///
    /// let outcome = interpreter.run("x = 0 - 7; return x / 2;", &mut std::io::sink()).unwrap();
    /// assert_eq!(outcome.result, -3);
    ///
    /// let error = interpreter.run("return y;", &mut std::io::sink()).unwrap_err();
    /// assert!(matches!(error, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
    /// ```
    pub fn run(&self, source: &str, output: &mut dyn Write) -> Result<Outcome, Error> {
        let parsed = parse(source, self.config.scan_policy)?;
        Ok(self.evaluate(parsed, output)?)
    }
}

/// Runs `source` with the default configuration, printing native output to
/// standard output.
///
/// # Examples
/// ```
/// use calc::run;
///
/// let outcome = run("x = 0; i = 0; while (i < 5) { x = x + i; i = i + 1; } return x;").unwrap();
/// assert_eq!(outcome.result, 10);
///
/// // Unknown function.
/// assert!(run("return nope(1);").is_err());
/// ```
pub fn run(source: &str) -> Result<Outcome, Error> {
    Interpreter::default().run(source, &mut std::io::stdout().lock())
}
