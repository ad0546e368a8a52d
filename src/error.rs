use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// code: stray characters, malformed operators and unexpected tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, division by zero or failures writing native output.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end a run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source could not be scanned or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
