use thiserror::Error;

use crate::ast::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A variable was read but is bound nowhere along the scope chain.
    #[error("Error {position}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the variable was read.
        position: Position,
    },
    /// A function was called but is bound nowhere along the scope chain.
    #[error("Error {position}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name:     String,
        /// Where the call was made.
        position: Position,
    },
    /// Attempted division by zero.
    #[error("Error {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
    /// An `assert` argument evaluated to zero.
    #[error("Error {position}: Assertion failed.")]
    AssertionFailed {
        /// Where `assert` was called.
        position: Position,
    },
    /// A lexically scoped function was called after its declaring scope ended.
    #[error("Error {position}: Function '{name}' outlived the scope it was declared in.")]
    DetachedFunction {
        /// The name of the function.
        name:     String,
        /// Where the call was made.
        position: Position,
    },
    /// Too many script function calls were active at once.
    #[error("Error {position}: Call to '{name}' exceeds the maximum call depth of {limit}.")]
    CallDepthExceeded {
        /// The function being called.
        name:     String,
        /// The configured limit.
        limit:    usize,
        /// Where the call was made.
        position: Position,
    },
    /// A native function failed to write its output.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
