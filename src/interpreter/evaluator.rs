/// Binary operator evaluation.
///
/// Wrapping 64-bit arithmetic, truncating division and 0/1 comparisons.
pub mod binary;

/// Statement-level control flow: blocks, `if` and `while`.
pub mod control;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context and the dispatch over expression and
/// statement kinds.
pub mod core;

/// Function evaluation.
///
/// Handles declarations, the call protocol for user functions, and the
/// native function registry.
pub mod function;
