/// Declarations and the call protocol for script functions.
pub mod core;

/// The native function registry.
///
/// Declares the table of natives bound into every root environment and the
/// signature a host routine must have.
pub mod native;

/// The `print` native.
///
/// Writes its evaluated arguments to the run's output sink.
pub mod print;

/// The `assert` native.
pub mod assert;
